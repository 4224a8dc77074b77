//! Detail dialog for one cached work.

use tokio::sync::watch;

use crate::config::GalleryConfig;
use crate::error::{GalleryError, GalleryResult, ImageSlot};
use crate::escape::{escape_html, Markup};
use crate::fallback::ImageFallback;
use crate::messages;
use crate::store::WorkStore;
use crate::types::Work;

/// Populated dialog contents. Text is escaped; images carry their own
/// fallback handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkDetail {
    pub id: String,
    pub author: Markup,
    pub current_habits: Markup,
    pub reflection: Markup,
    pub scorecard: ImageFallback,
    pub comic: ImageFallback,
}

fn text_or(value: Option<&str>, placeholder: &'static str) -> Markup {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => escape_html(v),
        None => Markup::trusted(placeholder),
    }
}

impl WorkDetail {
    fn from_work(work: &Work, config: &GalleryConfig) -> Self {
        let author = work.author.as_deref().filter(|a| !a.is_empty());
        let image = |url: Option<&str>, alt: String, caption: &'static str| {
            let src = url.map(|u| config.resolve(u)).unwrap_or_default();
            ImageFallback::new(src, alt).with_caption(caption)
        };
        let display_name = author.unwrap_or(messages::ANONYMOUS_AUTHOR);

        Self {
            id: work.id().unwrap_or_default().to_string(),
            author: text_or(author, messages::ANONYMOUS_AUTHOR),
            current_habits: text_or(work.current_habits.as_deref(), messages::NOT_PROVIDED),
            reflection: text_or(work.reflection.as_deref(), messages::NOT_PROVIDED),
            scorecard: image(
                work.scorecard_url(),
                format!("{} 的習慣計分卡", display_name),
                messages::SCORECARD_LOAD_FAILED,
            ),
            comic: image(
                work.comic_url(),
                format!("{} 的六格漫畫", display_name),
                messages::COMIC_LOAD_FAILED,
            ),
        }
    }
}

/// What closed the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    /// Click on the backdrop itself, not on the dialog content
    Overlay,
    Escape,
}

/// The work detail dialog. `None` in the view means closed.
pub struct DetailModal {
    store: WorkStore,
    config: GalleryConfig,
    view: watch::Sender<Option<WorkDetail>>,
}

impl DetailModal {
    pub fn new(store: WorkStore, config: GalleryConfig) -> Self {
        let (view, _) = watch::channel(None);
        Self {
            store,
            config,
            view,
        }
    }

    /// Show the work with `id`. Nothing opens when it is not cached.
    pub fn open(&self, id: &str) -> GalleryResult<()> {
        let Some(work) = self.store.find(id) else {
            tracing::error!("Work {} not found in cache ({} cached)", id, self.store.len());
            return Err(GalleryError::WorkNotFound(id.to_string()));
        };
        let detail = WorkDetail::from_work(&work, &self.config);
        tracing::debug!("Opening detail for work {}", detail.id);
        self.view.send_replace(Some(detail));
        Ok(())
    }

    /// Close and clear every field. Returns whether it was open.
    pub fn close(&self, trigger: CloseTrigger) -> bool {
        let was_open = self.view.send_replace(None).is_some();
        if was_open {
            tracing::debug!("Detail closed via {:?}", trigger);
        }
        was_open
    }

    /// Key handler for the page; only Escape while open does anything.
    pub fn handle_key(&self, key: &str) -> bool {
        key == "Escape" && self.is_open() && self.close(CloseTrigger::Escape)
    }

    /// Route an image load failure to that image's fallback.
    pub fn image_failed(&self, slot: ImageSlot) -> bool {
        self.view.send_if_modified(|detail| match detail {
            Some(detail) => match slot {
                ImageSlot::Scorecard => detail.scorecard.handle_error(),
                ImageSlot::Comic => detail.comic.handle_error(),
            },
            None => false,
        })
    }

    pub fn is_open(&self) -> bool {
        self.view.borrow().is_some()
    }

    /// Background scrolling is suppressed exactly while the dialog is open
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn detail(&self) -> Option<WorkDetail> {
        self.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<WorkDetail>> {
        self.view.subscribe()
    }
}
