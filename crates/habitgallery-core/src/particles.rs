//! Particle background configuration.
//!
//! Serializes to the JSON layout the particles.js renderer reads.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticlesConfig {
    pub particles: Particles,
    pub interactivity: Interactivity,
    pub retina_detect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particles {
    pub number: Number,
    pub color: Value<String>,
    pub shape: Shape,
    pub opacity: Value<f32>,
    pub size: Size,
    pub line_linked: LineLinked,
    #[serde(rename = "move")]
    pub movement: Movement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Value<T> {
    pub value: T,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Number {
    pub value: u32,
    pub density: Density,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Density {
    pub enable: bool,
    pub value_area: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Size {
    pub value: f32,
    pub random: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineLinked {
    pub enable: bool,
    pub distance: u32,
    pub color: String,
    pub opacity: f32,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movement {
    pub enable: bool,
    pub speed: u32,
    pub direction: String,
    pub out_mode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interactivity {
    pub detect_on: String,
    pub events: Events,
    pub modes: Modes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Events {
    pub onhover: EventMode,
    pub onclick: EventMode,
    pub resize: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventMode {
    pub enable: bool,
    pub mode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Modes {
    pub repulse: Repulse,
    pub push: Push,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Repulse {
    pub distance: u32,
    pub duration: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Push {
    pub particles_nb: u32,
}

const PARTICLE_COLOR: &str = "#888888";

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            particles: Particles {
                number: Number {
                    value: 80,
                    density: Density {
                        enable: true,
                        value_area: 800,
                    },
                },
                color: Value {
                    value: PARTICLE_COLOR.to_string(),
                },
                shape: Shape {
                    kind: "circle".to_string(),
                },
                opacity: Value { value: 0.5 },
                size: Size {
                    value: 3.0,
                    random: true,
                },
                line_linked: LineLinked {
                    enable: true,
                    distance: 150,
                    color: PARTICLE_COLOR.to_string(),
                    opacity: 0.4,
                    width: 1,
                },
                movement: Movement {
                    enable: true,
                    speed: 6,
                    direction: "none".to_string(),
                    out_mode: "out".to_string(),
                },
            },
            interactivity: Interactivity {
                detect_on: "canvas".to_string(),
                events: Events {
                    onhover: EventMode {
                        enable: true,
                        mode: "repulse".to_string(),
                    },
                    onclick: EventMode {
                        enable: true,
                        mode: "push".to_string(),
                    },
                    resize: true,
                },
                modes: Modes {
                    repulse: Repulse {
                        distance: 200,
                        duration: 0.4,
                    },
                    push: Push { particles_nb: 4 },
                },
            },
            retina_detect: true,
        }
    }
}

impl ParticlesConfig {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Script starting the renderer in the container with `container_id`.
    /// Does nothing when the renderer library is not loaded.
    pub fn init_script(&self, container_id: &str) -> serde_json::Result<String> {
        let id = serde_json::to_string(container_id)?;
        Ok(format!(
            "if (typeof particlesJS === 'function' && document.getElementById({id})) {{ \
             particlesJS({id}, {}); return true; }} return false;",
            self.to_json()?
        ))
    }
}
