//! Page composition and startup order.
//!
//! [`Page`] owns one instance of every component and wires them together.
//! [`Page::start`] runs the startup sequence:
//!
//! 1. check the rendered surface; a missing critical part raises the
//!    init-error banner
//! 2. load the gallery and wait for it, so the work cache is filled
//! 3. start the slideshow from that cache
//! 4. start the mascot animation
//! 5. start the keep-alive ping
//!
//! A missing decorative part only skips its own step.

use std::sync::Arc;

use crate::backend::Backend;
use crate::cat::{CatAnimator, CatSpeed};
use crate::config::GalleryConfig;
use crate::error::GalleryResult;
use crate::gallery::{GalleryLoader, LoadSummary};
use crate::keepalive::PeriodicPing;
use crate::messages;
use crate::modal::DetailModal;
use crate::slideshow::Slideshow;
use crate::store::WorkStore;
use crate::upload::UploadFlow;

/// Which page sections the shell actually mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSurface {
    pub gallery: bool,
    pub upload_form: bool,
    pub status_line: bool,
    pub modal: bool,
    pub slideshow: bool,
    pub mascot: bool,
    pub particles: bool,
    pub mobile_menu: bool,
}

impl Default for PageSurface {
    fn default() -> Self {
        Self {
            gallery: true,
            upload_form: true,
            status_line: true,
            modal: true,
            slideshow: true,
            mascot: true,
            particles: true,
            mobile_menu: true,
        }
    }
}

impl PageSurface {
    /// Critical sections that are missing
    pub fn missing_critical(&self) -> Vec<&'static str> {
        [
            ("gallery", self.gallery),
            ("upload form", self.upload_form),
            ("status line", self.status_line),
        ]
        .into_iter()
        .filter_map(|(name, present)| (!present).then_some(name))
        .collect()
    }

    /// Decorative sections that are missing
    pub fn missing_decorative(&self) -> Vec<&'static str> {
        [
            ("detail modal", self.modal),
            ("slideshow", self.slideshow),
            ("mascot", self.mascot),
            ("particles", self.particles),
            ("mobile menu", self.mobile_menu),
        ]
        .into_iter()
        .filter_map(|(name, present)| (!present).then_some(name))
        .collect()
    }
}

/// Result of [`Page::start`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartReport {
    /// Init-error banner text, if a critical section is missing
    pub banner: Option<&'static str>,
    /// Outcome of the initial gallery load, if it ran
    pub gallery: Option<GalleryResult<LoadSummary>>,
    /// Sections skipped because they were not mounted
    pub skipped: Vec<&'static str>,
}

pub struct Page<B: Backend> {
    config: GalleryConfig,
    store: WorkStore,
    gallery: Arc<GalleryLoader<B>>,
    upload: UploadFlow<B>,
    modal: DetailModal,
    slideshow: Slideshow,
    cat: CatAnimator,
    ping: PeriodicPing<B>,
}

impl<B: Backend> Page<B> {
    pub fn new(config: GalleryConfig, backend: Arc<B>) -> Self {
        let store = WorkStore::new();
        let gallery = Arc::new(GalleryLoader::new(
            Arc::clone(&backend),
            store.clone(),
            config.clone(),
        ));
        let upload = UploadFlow::new(Arc::clone(&backend), Arc::clone(&gallery), config.clone());
        let modal = DetailModal::new(store.clone(), config.clone());
        let slideshow = Slideshow::new(store.clone(), &config);
        let cat = CatAnimator::new(&config);
        let ping = PeriodicPing::new(backend, &config);

        Self {
            config,
            store,
            gallery,
            upload,
            modal,
            slideshow,
            cat,
            ping,
        }
    }

    /// Run the startup sequence against the mounted `surface`.
    pub async fn start(&self, surface: PageSurface) -> StartReport {
        tracing::info!("Starting page against {}", self.config.base_url);

        let missing = surface.missing_critical();
        let banner = if missing.is_empty() {
            None
        } else {
            tracing::error!("Critical page sections missing: {}", missing.join(", "));
            Some(messages::INIT_ERROR_BANNER)
        };

        let mut skipped = missing;
        for name in surface.missing_decorative() {
            tracing::warn!("Section '{}' not mounted, skipping", name);
            skipped.push(name);
        }

        // the slideshow reads the cache, so it needs the load even without
        // a gallery section
        let gallery = if surface.gallery || surface.slideshow {
            Some(self.gallery.load().await)
        } else {
            None
        };

        if surface.slideshow {
            self.slideshow.init();
        }
        if surface.mascot {
            self.cat.start(CatSpeed::Normal);
        }
        if self.config.keep_alive {
            self.ping.start();
        } else {
            tracing::info!("Keep-alive ping disabled");
        }

        StartReport {
            banner,
            gallery,
            skipped,
        }
    }

    /// Stop every timer the page started.
    pub fn shutdown(&self) {
        self.slideshow.clear();
        self.cat.stop();
        self.ping.stop();
        tracing::info!("Page timers stopped");
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn store(&self) -> &WorkStore {
        &self.store
    }

    pub fn gallery(&self) -> &GalleryLoader<B> {
        &self.gallery
    }

    pub fn upload(&self) -> &UploadFlow<B> {
        &self.upload
    }

    pub fn modal(&self) -> &DetailModal {
        &self.modal
    }

    pub fn slideshow(&self) -> &Slideshow {
        &self.slideshow
    }

    pub fn cat(&self) -> &CatAnimator {
        &self.cat
    }

    pub fn ping(&self) -> &PeriodicPing<B> {
        &self.ping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_surface_is_complete() {
        let surface = PageSurface::default();
        assert!(surface.missing_critical().is_empty());
        assert!(surface.missing_decorative().is_empty());
    }

    #[test]
    fn test_missing_sections_are_classified() {
        let surface = PageSurface {
            status_line: false,
            mascot: false,
            ..Default::default()
        };
        assert_eq!(surface.missing_critical(), vec!["status line"]);
        assert_eq!(surface.missing_decorative(), vec!["mascot"]);
    }
}
