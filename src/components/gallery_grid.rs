//! Gallery Grid Component
//!
//! One card per work; each card opens the detail dialog on click, Enter or
//! Space.

use dioxus::prelude::*;
use habitgallery_core::messages::WORK_IMAGE_LOAD_FAILED;
use habitgallery_core::{GalleryView, WorkCard};

use crate::components::images::FallbackImage;
use crate::context::{open_work, use_page, use_watch};

#[component]
pub fn GalleryGrid() -> Element {
    let page = use_page();
    let view = use_watch({
        let page = page.clone();
        move || page.gallery().subscribe()
    });

    let current = view();
    rsx! {
        div { class: "gallery-grid", "aria-live": "polite",
            match current {
                GalleryView::Cards(cards) => rsx! {
                    for card in cards {
                        GalleryCard { key: "{card.id}", card }
                    }
                },
                other => {
                    let placeholder = other.placeholder().unwrap_or_default();
                    rsx! {
                        p {
                            class: if other.is_error() { "gallery-placeholder error" } else { "gallery-placeholder" },
                            dangerous_inner_html: "{placeholder}",
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GalleryCard(card: WorkCard) -> Element {
    let page = use_page();
    let id = card.id.clone();

    let open = {
        let id = id.clone();
        move || open_work(&page, &id)
    };
    let on_click = open.clone();
    let on_key = open;

    rsx! {
        div {
            class: "gallery-card",
            role: "button",
            tabindex: "0",
            "data-id": "{id}",
            onclick: move |_| on_click(),
            onkeydown: move |evt: KeyboardEvent| {
                let key = evt.key();
                if key == Key::Enter || key == Key::Character(" ".to_string()) {
                    evt.prevent_default();
                    on_key();
                }
            },

            FallbackImage {
                src: card.image_url.clone(),
                alt: card.alt.clone(),
                caption: WORK_IMAGE_LOAD_FAILED,
                class: "gallery-card__img".to_string(),
            }
            div {
                class: "gallery-card__author",
                dangerous_inner_html: "{card.author}",
            }
        }
    }
}
