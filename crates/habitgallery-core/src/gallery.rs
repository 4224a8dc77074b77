//! Gallery loading and card rendering.
//!
//! ## States
//!
//! | State | View |
//! |-------|------|
//! | fetch in flight | `Loading` ("正在載入作品...") |
//! | empty list | `Empty` (invitation to be the first) |
//! | non-empty list | `Cards`, server order, invalid entries skipped (may be none left) |
//! | transport / HTTP / malformed body | `Error` with the escaped message |
//!
//! A failed load leaves the [`WorkStore`] untouched; a successful one
//! replaces it wholesale.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::watch;

use crate::backend::Backend;
use crate::config::GalleryConfig;
use crate::error::GalleryResult;
use crate::escape::{escape_html, Markup};
use crate::messages;
use crate::store::WorkStore;
use crate::types::Work;

/// One gallery card, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkCard {
    /// Work id, used to open the detail modal
    pub id: String,
    pub author: Markup,
    /// Scorecard image URL, resolved against the server
    pub image_url: String,
    pub alt: String,
}

impl WorkCard {
    fn from_work(work: &Work, config: &GalleryConfig) -> Option<Self> {
        if !work.is_renderable() {
            return None;
        }
        let author = work.author.as_deref().unwrap_or_default();
        Some(Self {
            id: work.id.clone().unwrap_or_default(),
            author: escape_html(author),
            image_url: config.resolve(work.scorecard_url().unwrap_or_default()),
            alt: format!("{} 的習慣計分卡", author),
        })
    }
}

/// What the gallery section should display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryView {
    #[default]
    Loading,
    Empty,
    Cards(Vec<WorkCard>),
    /// Escaped, localized error message
    Error(Markup),
}

impl GalleryView {
    /// Placeholder text shown instead of cards, if any
    pub fn placeholder(&self) -> Option<Markup> {
        match self {
            GalleryView::Loading => Some(Markup::trusted(messages::GALLERY_LOADING)),
            GalleryView::Empty => Some(Markup::trusted(messages::GALLERY_EMPTY)),
            GalleryView::Cards(_) => None,
            GalleryView::Error(message) => Some(message.clone()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, GalleryView::Error(_))
    }
}

/// Counts from one successful load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub rendered: usize,
    pub skipped: usize,
}

pub struct GalleryLoader<B: Backend> {
    backend: Arc<B>,
    store: WorkStore,
    config: GalleryConfig,
    view: watch::Sender<GalleryView>,
}

impl<B: Backend> GalleryLoader<B> {
    pub fn new(backend: Arc<B>, store: WorkStore, config: GalleryConfig) -> Self {
        let (view, _) = watch::channel(GalleryView::Loading);
        Self {
            backend,
            store,
            config,
            view,
        }
    }

    /// Fetch works and rebuild the gallery view from scratch.
    ///
    /// Safe to call repeatedly. Concurrent loads are not cancelled; the one
    /// that completes last wins.
    pub async fn load(&self) -> GalleryResult<LoadSummary> {
        self.view.send_replace(GalleryView::Loading);

        let items = match self.backend.fetch_works().await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!("Failed to load works: {}", e);
                let mut message = String::from(messages::GALLERY_ERROR_PREFIX);
                message.push_str(escape_html(&e.to_string()).as_str());
                self.view.send_replace(GalleryView::Error(Markup::trusted(message)));
                return Err(e);
            }
        };

        let raw_total = items.len();
        let works = parse_works(items);
        self.store.replace(works.clone());

        if raw_total == 0 {
            tracing::info!("No works shared yet");
            self.view.send_replace(GalleryView::Empty);
            return Ok(LoadSummary {
                rendered: 0,
                skipped: 0,
            });
        }

        let cards: Vec<WorkCard> = works
            .iter()
            .filter_map(|work| {
                let card = WorkCard::from_work(work, &self.config);
                if card.is_none() {
                    tracing::warn!("Skipping invalid work data: {:?}", work);
                }
                card
            })
            .collect();
        let summary = LoadSummary {
            rendered: cards.len(),
            skipped: raw_total - cards.len(),
        };
        tracing::info!(
            "Rendered {} works ({} skipped)",
            summary.rendered,
            summary.skipped
        );
        self.view.send_replace(GalleryView::Cards(cards));
        Ok(summary)
    }

    pub fn view(&self) -> GalleryView {
        self.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GalleryView> {
        self.view.subscribe()
    }

    /// Cards currently displayed (empty unless the view is `Cards`)
    pub fn cards(&self) -> Vec<WorkCard> {
        match &*self.view.borrow() {
            GalleryView::Cards(cards) => cards.clone(),
            _ => Vec::new(),
        }
    }

    pub fn store(&self) -> &WorkStore {
        &self.store
    }
}

/// Parse raw entries, keeping the ones that are JSON objects of the right
/// shape. Entries that fail to parse are logged and dropped.
fn parse_works(items: Vec<Value>) -> Vec<Work> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Work>(item.clone()) {
            Ok(work) => Some(work),
            Err(e) => {
                tracing::warn!("Skipping unparsable work {}: {}", item, e);
                None
            }
        })
        .collect()
}
