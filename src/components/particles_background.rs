//! Particles Background Component
//!
//! Full-page particle canvas behind the content.

use std::time::Duration;

use dioxus::prelude::*;
use habitgallery_core::ParticlesConfig;

use crate::context::eval_bool;

const CONTAINER_ID: &str = "particles-js";
const RENDERER_SRC: &str = "https://cdn.jsdelivr.net/particles.js/2.0.0/particles.min.js";
/// Attempts while the renderer script loads
const INIT_ATTEMPTS: u32 = 10;

#[component]
pub fn ParticlesBackground() -> Element {
    use_future(|| async {
        let script = match ParticlesConfig::default().init_script(CONTAINER_ID) {
            Ok(script) => script,
            Err(e) => {
                tracing::error!("Failed to encode particle config: {}", e);
                return;
            }
        };
        for _ in 0..INIT_ATTEMPTS {
            if eval_bool(&script).await {
                tracing::debug!("Particle background started");
                return;
            }
            tokio::time::sleep(Duration::from_millis(300)).await;
        }
        tracing::warn!("Particle renderer unavailable, background skipped");
    });

    rsx! {
        document::Script { src: "{RENDERER_SRC}" }
        div { id: CONTAINER_ID, class: "particles-background" }
    }
}
