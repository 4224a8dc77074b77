//! Interactive mascot animation.
//!
//! The mascot cycles through three frames. Clicking it switches to a fast
//! cycle for two seconds; clicks during the fast phase are ignored and do
//! not extend it.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::config::GalleryConfig;
use crate::timer::TimerSlot;

/// Mascot frames served by the backend
pub const CAT_FRAMES: [&str; 3] = ["/static/Box.png", "/static/Box2.png", "/static/Box3.png"];
/// Element id of the mascot image; its fallback placeholder is smaller
pub const CAT_IMAGE_ID: &str = "interactive-cat-img";
/// How long fast mode lasts before reverting
pub const FAST_MODE_DURATION: Duration = Duration::from_millis(2000);

/// Cycle speed of the mascot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatSpeed {
    Normal,
    Fast,
}

impl CatSpeed {
    /// Time between frames
    pub fn interval(&self) -> Duration {
        match self {
            CatSpeed::Normal => Duration::from_millis(500),
            CatSpeed::Fast => Duration::from_millis(150),
        }
    }
}

#[derive(Debug)]
struct CatState {
    index: usize,
    fast: bool,
    /// Speed of the running cycle, `None` when stopped
    speed: Option<CatSpeed>,
}

struct Inner {
    frames: Vec<String>,
    state: Mutex<CatState>,
    image: watch::Sender<String>,
    cycle: TimerSlot,
    revert: TimerSlot,
}

/// Shared handle to the mascot animation.
#[derive(Clone)]
pub struct CatAnimator {
    inner: Arc<Inner>,
}

impl CatAnimator {
    /// Animator over the default frames, resolved against the server URL
    pub fn new(config: &GalleryConfig) -> Self {
        Self::with_frames(CAT_FRAMES.iter().map(|f| config.resolve(f)).collect())
    }

    pub fn with_frames(frames: Vec<String>) -> Self {
        let first = frames.first().cloned().unwrap_or_default();
        let (image, _) = watch::channel(first);
        Self {
            inner: Arc::new(Inner {
                frames,
                state: Mutex::new(CatState {
                    index: 0,
                    fast: false,
                    speed: None,
                }),
                image,
                cycle: TimerSlot::new(),
                revert: TimerSlot::new(),
            }),
        }
    }

    /// Start cycling at `speed`, replacing any running cycle.
    pub fn start(&self, speed: CatSpeed) {
        self.inner.start(speed);
    }

    /// Handle a click on the mascot. Returns whether fast mode was entered.
    pub fn click(&self) -> bool {
        {
            let mut state = self.inner.state.lock();
            if state.fast {
                tracing::debug!("Mascot already fast, click ignored");
                return false;
            }
            state.fast = true;
        }

        self.inner.start(CatSpeed::Fast);
        let weak = Arc::downgrade(&self.inner);
        self.inner.revert.arm_once(FAST_MODE_DURATION, move || {
            if let Some(inner) = weak.upgrade() {
                inner.state.lock().fast = false;
                inner.start(CatSpeed::Normal);
            }
        });
        true
    }

    /// Stop both timers and leave fast mode.
    pub fn stop(&self) {
        self.inner.cycle.cancel();
        self.inner.revert.cancel();
        let mut state = self.inner.state.lock();
        state.fast = false;
        state.speed = None;
    }

    pub fn is_fast(&self) -> bool {
        self.inner.state.lock().fast
    }

    /// Interval of the running cycle, `None` when stopped
    pub fn current_interval(&self) -> Option<Duration> {
        self.inner.state.lock().speed.map(|s| s.interval())
    }

    pub fn frame_index(&self) -> usize {
        self.inner.state.lock().index
    }

    pub fn image_url(&self) -> String {
        self.inner.image.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.inner.image.subscribe()
    }
}

impl Inner {
    fn start(self: &Arc<Self>, speed: CatSpeed) {
        self.cycle.cancel();
        if self.frames.is_empty() {
            tracing::warn!("Cannot start mascot animation: no frames");
            return;
        }
        self.state.lock().speed = Some(speed);

        let weak = Arc::downgrade(self);
        self.cycle.arm_repeating(speed.interval(), move || match weak.upgrade() {
            Some(inner) => {
                inner.tick();
                true
            }
            None => false,
        });
    }

    fn tick(&self) {
        let url = {
            let mut state = self.state.lock();
            state.index = (state.index + 1) % self.frames.len();
            self.frames[state.index].clone()
        };
        self.image.send_replace(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> CatAnimator {
        CatAnimator::with_frames(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    }

    #[tokio::test(start_paused = true)]
    async fn test_normal_cycle_wraps() {
        let cat = animator();
        cat.start(CatSpeed::Normal);
        assert_eq!(cat.current_interval(), Some(Duration::from_millis(500)));
        assert_eq!(cat.image_url(), "a");

        tokio::time::sleep(Duration::from_millis(501)).await;
        assert_eq!(cat.image_url(), "b");

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(cat.frame_index(), 0);
        assert_eq!(cat.image_url(), "a");
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_enters_fast_then_reverts() {
        let cat = animator();
        cat.start(CatSpeed::Normal);

        assert!(cat.click());
        assert!(cat.is_fast());
        assert_eq!(cat.current_interval(), Some(Duration::from_millis(150)));

        tokio::time::sleep(Duration::from_millis(151)).await;
        assert_eq!(cat.frame_index(), 1);

        tokio::time::sleep(Duration::from_millis(1999 - 151)).await;
        assert!(cat.is_fast());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!cat.is_fast());
        assert_eq!(cat.current_interval(), Some(Duration::from_millis(500)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_click_does_not_extend() {
        let cat = animator();
        cat.start(CatSpeed::Normal);

        assert!(cat.click());
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(!cat.click());

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert!(!cat.is_fast());
        assert_eq!(cat.current_interval(), Some(Duration::from_millis(500)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_cycle() {
        let cat = animator();
        cat.start(CatSpeed::Normal);
        cat.start(CatSpeed::Normal);
        cat.start(CatSpeed::Normal);

        // one cycle only: a single step per interval
        tokio::time::sleep(Duration::from_millis(501)).await;
        assert_eq!(cat.frame_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop() {
        let cat = animator();
        cat.start(CatSpeed::Normal);
        cat.click();
        cat.stop();

        assert!(!cat.is_fast());
        assert_eq!(cat.current_interval(), None);
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(cat.frame_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_frames_does_not_start() {
        let cat = CatAnimator::with_frames(Vec::new());
        cat.start(CatSpeed::Normal);
        assert_eq!(cat.current_interval(), None);
        assert_eq!(cat.image_url(), "");
    }
}
