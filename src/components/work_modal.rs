//! Work Detail Modal Component
//!
//! Full view of one work: both images, author and reflections.

use dioxus::prelude::*;
use habitgallery_core::error::ImageSlot;
use habitgallery_core::CloseTrigger;

use crate::context::{eval_bool, use_page, use_watch};

const LOCK_SCROLL: &str = "document.body.style.overflow = 'hidden'; return true;";
const UNLOCK_SCROLL: &str = "document.body.style.overflow = ''; return true;";

/// Work Detail Modal
///
/// Opens when the core publishes a detail and closes on the close button,
/// a click on the overlay, or Escape (handled at the app root).
#[component]
pub fn WorkModal() -> Element {
    let page = use_page();
    let detail = use_watch({
        let page = page.clone();
        move || page.modal().subscribe()
    });

    // Background scroll follows the open state
    use_effect(move || {
        let locked = detail().is_some();
        spawn(async move {
            eval_bool(if locked { LOCK_SCROLL } else { UNLOCK_SCROLL }).await;
        });
    });

    let Some(work) = detail() else {
        return rsx! {};
    };

    let close_page = page.clone();
    let overlay_page = page.clone();
    let scorecard_page = page.clone();
    let comic_page = page;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| {
                overlay_page.modal().close(CloseTrigger::Overlay);
            },

            div {
                class: "work-modal",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "modal-close",
                    "aria-label": "關閉",
                    onclick: move |_| {
                        close_page.modal().close(CloseTrigger::CloseButton);
                    },
                    "×"
                }

                h2 {
                    class: "modal-title",
                    dangerous_inner_html: "{work.author}",
                }

                div { class: "modal-images",
                    figure { class: "modal-figure",
                        img {
                            src: "{work.scorecard.src()}",
                            alt: "{work.scorecard.alt()}",
                            onerror: move |_| {
                                scorecard_page.modal().image_failed(ImageSlot::Scorecard);
                            },
                        }
                        figcaption { "習慣計分卡" }
                    }
                    figure { class: "modal-figure",
                        img {
                            src: "{work.comic.src()}",
                            alt: "{work.comic.alt()}",
                            onerror: move |_| {
                                comic_page.modal().image_failed(ImageSlot::Comic);
                            },
                        }
                        figcaption { "六格漫畫" }
                    }
                }

                div { class: "modal-text",
                    h3 { "目前的習慣" }
                    p { dangerous_inner_html: "{work.current_habits}" }
                    h3 { "反思與展望" }
                    p { dangerous_inner_html: "{work.reflection}" }
                }
            }
        }
    }
}
