//! Habit Gallery Core Library
//!
//! Client core for the habit-tracking gallery: visitors share a habit
//! scorecard, a six-panel comic and a short reflection, and every submission
//! is shown as a gallery card with a detail view.
//!
//! ## Overview
//!
//! The core owns everything that has state or timing; the desktop shell only
//! renders what the core publishes.
//!
//! ```text
//! Page::start
//!   ├── GalleryLoader::load ──► WorkStore (replaced wholesale)
//!   ├── Slideshow::init    ◄── WorkStore (snapshot of first 5 scorecards)
//!   ├── CatAnimator::start (500ms / 150ms fast mode)
//!   └── PeriodicPing::start (GET / every 10 min, floor 5 min)
//!
//! UploadFlow::submit ──► Backend::upload ──► GalleryLoader::load
//! DetailModal::open  ◄── WorkStore (lookup by id at click time)
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use habitgallery_core::{GalleryConfig, HttpBackend, Page};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GalleryConfig::new("http://127.0.0.1:5000/")?;
//!     let backend = Arc::new(HttpBackend::new(config.clone())?);
//!     let page = Page::new(config, backend);
//!
//!     page.start(Default::default()).await;
//!     for card in page.gallery().cards() {
//!         println!("{}", card.author.as_str());
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod bootstrap;
pub mod cat;
pub mod config;
pub mod error;
pub mod escape;
pub mod fallback;
pub mod gallery;
pub mod keepalive;
pub mod logging;
pub mod messages;
pub mod modal;
pub mod nav;
pub mod particles;
pub mod slideshow;
pub mod store;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod timer;
pub mod types;
pub mod upload;

// Re-exports
pub use backend::{Backend, HttpBackend, UploadReply, UploadResponse};
pub use bootstrap::{Page, PageSurface, StartReport};
pub use cat::{CatAnimator, CatSpeed};
pub use config::GalleryConfig;
pub use error::{GalleryError, GalleryResult, ValidationError};
pub use escape::{escape_html, escape_value, Markup};
pub use fallback::ImageFallback;
pub use gallery::{GalleryLoader, GalleryView, LoadSummary, WorkCard};
pub use keepalive::PeriodicPing;
pub use modal::{CloseTrigger, DetailModal, WorkDetail};
pub use nav::{MobileMenu, ScrollRequest};
pub use particles::ParticlesConfig;
pub use slideshow::{Slide, SlideLoading, Slideshow, SlideshowView};
pub use store::WorkStore;
pub use timer::TimerSlot;
pub use types::{ImageFile, Work};
pub use upload::{
    StatusKind, StatusLine, SubmitControl, SubmitOutcome, UploadFlow, UploadForm, UploadPayload,
};
