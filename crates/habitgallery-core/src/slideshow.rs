//! Hero slideshow of recent scorecards.
//!
//! ## Lifecycle
//!
//! | Phase | View | Timer |
//! |-------|------|-------|
//! | before `init` | `Pending` | none |
//! | store not yet populated | `Pending` | retry every 1.5s |
//! | no usable URLs | `Empty` | none |
//! | one slide | `Showing` | none |
//! | two or more slides | `Showing` | advance every 5s |
//! | after `clear` / inconsistency | `Cleared` | none |
//!
//! The slide set is a snapshot of the first five works taken once, when the
//! slideshow initializes. Later gallery reloads do not change it.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::config::{GalleryConfig, MAX_SLIDES};
use crate::store::WorkStore;
use crate::timer::TimerSlot;

/// How the slide image should be fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLoading {
    Eager,
    Lazy,
}

impl SlideLoading {
    /// Value for the `loading` attribute
    pub fn as_attr(&self) -> &'static str {
        match self {
            SlideLoading::Eager => "eager",
            SlideLoading::Lazy => "lazy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub url: String,
    pub active: bool,
    pub loading: SlideLoading,
}

/// What the hero section should display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlideshowView {
    /// Not initialized, or waiting for the first gallery load
    #[default]
    Pending,
    /// Initialized with no usable image: show the static placeholder
    Empty,
    Showing { slides: Vec<Slide>, current: usize },
    /// Torn down; nothing to show
    Cleared,
}

#[derive(Debug, Default)]
struct SlideState {
    urls: Vec<String>,
    current: usize,
    /// Number of slides the view currently holds
    rendered: usize,
}

struct Inner {
    store: WorkStore,
    config: GalleryConfig,
    state: Mutex<SlideState>,
    view: watch::Sender<SlideshowView>,
    timer: TimerSlot,
    interval: Duration,
    retry_delay: Duration,
}

/// Shared handle to the slideshow. Clones drive the same slideshow.
#[derive(Clone)]
pub struct Slideshow {
    inner: Arc<Inner>,
}

impl Slideshow {
    pub fn new(store: WorkStore, config: &GalleryConfig) -> Self {
        let (view, _) = watch::channel(SlideshowView::Pending);
        Self {
            inner: Arc::new(Inner {
                store,
                config: config.clone(),
                state: Mutex::new(SlideState::default()),
                view,
                timer: TimerSlot::new(),
                interval: config.slide_interval,
                retry_delay: config.slideshow_retry_delay,
            }),
        }
    }

    /// Take the slide set from the store and start rotating.
    ///
    /// If the store has never been populated, keeps checking every retry
    /// delay instead of failing.
    pub fn init(&self) {
        self.inner.timer.cancel();

        if self.inner.store.is_populated() {
            if self.inner.populate() {
                self.arm_advance();
            }
            return;
        }

        tracing::info!(
            "Slideshow waiting for works, retrying in {:?}",
            self.inner.retry_delay
        );
        let weak = Arc::downgrade(&self.inner);
        let retry_delay = self.inner.retry_delay;
        let interval = self.inner.interval;
        self.inner.timer.arm(async move {
            loop {
                tokio::time::sleep(retry_delay).await;
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if !inner.store.is_populated() {
                    tracing::debug!("Slideshow still waiting for works");
                    continue;
                }
                if !inner.populate() {
                    return;
                }
                break;
            }
            advance_loop(weak, interval).await;
        });
    }

    fn arm_advance(&self) {
        let weak = Arc::downgrade(&self.inner);
        let interval = self.inner.interval;
        self.inner.timer.arm(advance_loop(weak, interval));
    }

    /// Move to the next slide now. Returns false if the slideshow was torn
    /// down instead.
    pub fn advance(&self) -> bool {
        self.inner.advance()
    }

    /// Stop the timer and remove all slides.
    pub fn clear(&self) {
        self.inner.teardown();
    }

    /// Tell the slideshow how many slides the view actually holds.
    ///
    /// A count that disagrees with the slide set tears the slideshow down on
    /// the next tick.
    pub fn report_rendered(&self, count: usize) {
        self.inner.state.lock().rendered = count;
    }

    pub fn subscribe(&self) -> watch::Receiver<SlideshowView> {
        self.inner.view.subscribe()
    }

    pub fn view(&self) -> SlideshowView {
        self.inner.view.borrow().clone()
    }

    pub fn current_index(&self) -> usize {
        self.inner.state.lock().current
    }

    pub fn slide_urls(&self) -> Vec<String> {
        self.inner.state.lock().urls.clone()
    }

    /// Whether a timer (retry or advance) is armed
    pub fn is_running(&self) -> bool {
        self.inner.timer.is_armed()
    }
}

async fn advance_loop(weak: Weak<Inner>, interval: Duration) {
    loop {
        tokio::time::sleep(interval).await;
        let Some(inner) = weak.upgrade() else {
            return;
        };
        if !inner.advance() {
            return;
        }
    }
}

impl Inner {
    /// Snapshot the slide set and publish it. Returns whether rotation
    /// should start (more than one slide).
    fn populate(&self) -> bool {
        let urls: Vec<String> = self
            .store
            .leading_scorecard_urls(MAX_SLIDES)
            .iter()
            .map(|url| self.config.resolve(url))
            .collect();
        let mut state = self.state.lock();
        state.current = 0;
        state.urls = urls.clone();

        if urls.is_empty() {
            state.rendered = 0;
            self.view.send_replace(SlideshowView::Empty);
            tracing::info!("Slideshow has no images yet");
            return false;
        }

        let slides: Vec<Slide> = urls
            .into_iter()
            .enumerate()
            .map(|(i, url)| Slide {
                url,
                active: i == 0,
                loading: if i == 0 { SlideLoading::Eager } else { SlideLoading::Lazy },
            })
            .collect();
        state.rendered = slides.len();
        let count = slides.len();
        self.view.send_replace(SlideshowView::Showing { slides, current: 0 });
        tracing::info!("Slideshow initialized with {} slides", count);
        count > 1
    }

    fn advance(&self) -> bool {
        let mut state = self.state.lock();
        let count = state.urls.len();
        if count == 0 || state.rendered != count {
            tracing::warn!(
                "Slideshow inconsistent ({} rendered, {} urls), tearing down",
                state.rendered,
                count
            );
            drop(state);
            self.teardown();
            return false;
        }

        let previous = state.current;
        let next = (previous + 1) % count;
        state.current = next;
        drop(state);

        self.view.send_modify(|view| {
            if let SlideshowView::Showing { slides, current } = view {
                if let Some(slide) = slides.get_mut(previous) {
                    slide.active = false;
                }
                if let Some(slide) = slides.get_mut(next) {
                    slide.active = true;
                }
                *current = next;
            }
        });
        tracing::debug!("Slide {} -> {}", previous, next);
        true
    }

    fn teardown(&self) {
        self.timer.cancel();
        {
            let mut state = self.state.lock();
            *state = SlideState::default();
        }
        self.view.send_replace(SlideshowView::Cleared);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Work;

    fn works(n: usize) -> Vec<Work> {
        (0..n)
            .map(|i| Work {
                id: Some(format!("w{}", i)),
                author: Some(format!("author {}", i)),
                scorecard_image_url: Some(format!("/uploads/{}_scorecard.png", i)),
                ..Default::default()
            })
            .collect()
    }

    fn setup(n: Option<usize>) -> (WorkStore, Slideshow) {
        let store = WorkStore::new();
        if let Some(n) = n {
            store.replace(works(n));
        }
        let config = GalleryConfig::new("http://localhost/").unwrap();
        let slideshow = Slideshow::new(store.clone(), &config);
        (store, slideshow)
    }

    fn active_index(view: &SlideshowView) -> Option<usize> {
        match view {
            SlideshowView::Showing { slides, .. } => {
                let active: Vec<usize> = slides
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.active)
                    .map(|(i, _)| i)
                    .collect();
                assert_eq!(active.len(), 1, "exactly one active slide");
                Some(active[0])
            }
            _ => None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_tick_moves_to_second_slide() {
        let (_store, slideshow) = setup(Some(5));
        slideshow.init();

        assert_eq!(active_index(&slideshow.view()), Some(0));
        assert!(slideshow.is_running());

        tokio::time::sleep(Duration::from_millis(5001)).await;
        assert_eq!(slideshow.current_index(), 1);
        assert_eq!(active_index(&slideshow.view()), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_five_ticks_wrap_around() {
        let (_store, slideshow) = setup(Some(5));
        slideshow.init();

        tokio::time::sleep(Duration::from_millis(5 * 5000 + 1)).await;
        assert_eq!(slideshow.current_index(), 0);
        assert_eq!(active_index(&slideshow.view()), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slide_loading_hints() {
        let (_store, slideshow) = setup(Some(3));
        slideshow.init();

        let SlideshowView::Showing { slides, .. } = slideshow.view() else {
            panic!("expected slides");
        };
        assert_eq!(slides[0].loading, SlideLoading::Eager);
        assert!(slides[1..].iter().all(|s| s.loading == SlideLoading::Lazy));
    }

    #[tokio::test(start_paused = true)]
    async fn test_takes_at_most_five() {
        let (_store, slideshow) = setup(Some(8));
        slideshow.init();
        assert_eq!(slideshow.slide_urls().len(), 5);
        assert_eq!(
            slideshow.slide_urls()[0],
            "http://localhost/uploads/0_scorecard.png"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_store_shows_placeholder_without_timer() {
        let (_store, slideshow) = setup(Some(0));
        slideshow.init();

        assert_eq!(slideshow.view(), SlideshowView::Empty);
        assert!(!slideshow.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_slide_does_not_rotate() {
        let (_store, slideshow) = setup(Some(1));
        slideshow.init();

        assert_eq!(active_index(&slideshow.view()), Some(0));
        assert!(!slideshow.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_store_population() {
        let (store, slideshow) = setup(None);
        slideshow.init();
        assert_eq!(slideshow.view(), SlideshowView::Pending);

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(slideshow.view(), SlideshowView::Pending);

        store.replace(works(2));
        // next retry at 3000ms
        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert_eq!(active_index(&slideshow.view()), Some(0));

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(slideshow.current_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_snapshot_not_rederived_on_reload() {
        let (store, slideshow) = setup(Some(2));
        slideshow.init();

        store.replace(works(5));
        tokio::time::sleep(Duration::from_millis(5001)).await;
        assert_eq!(slideshow.slide_urls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rendered_mismatch_tears_down() {
        let (_store, slideshow) = setup(Some(4));
        slideshow.init();
        slideshow.report_rendered(3);

        tokio::time::sleep(Duration::from_millis(5001)).await;
        assert_eq!(slideshow.view(), SlideshowView::Cleared);
        assert!(!slideshow.is_running());
        assert!(slideshow.slide_urls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_mounted_count_reported_each_advance() {
        let (_store, slideshow) = setup(Some(3));
        slideshow.init();
        tokio::time::sleep(Duration::from_millis(1)).await;

        for expected in [1, 2, 0] {
            slideshow.report_rendered(3);
            tokio::time::sleep(Duration::from_millis(5000)).await;
            assert_eq!(slideshow.current_index(), expected);
        }

        // a slide element disappears from the page
        slideshow.report_rendered(2);
        tokio::time::sleep(Duration::from_millis(5001)).await;
        assert_eq!(slideshow.view(), SlideshowView::Cleared);
        assert!(!slideshow.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_stops_rotation() {
        let (_store, slideshow) = setup(Some(3));
        slideshow.init();
        slideshow.clear();

        assert_eq!(slideshow.view(), SlideshowView::Cleared);
        tokio::time::sleep(Duration::from_millis(20_000)).await;
        assert_eq!(slideshow.current_index(), 0);
        assert!(!slideshow.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_slideshow_stops_timer() {
        let (_store, slideshow) = setup(Some(3));
        let mut rx = slideshow.subscribe();
        slideshow.init();
        drop(slideshow);

        tokio::time::sleep(Duration::from_millis(20_000)).await;
        assert!(rx.has_changed().is_err(), "sender dropped with the slideshow");
    }
}
