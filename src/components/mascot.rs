//! Mascot Component
//!
//! The animated cat in the hero. Clicking it speeds the animation up for a
//! moment.

use dioxus::prelude::*;
use habitgallery_core::cat::CAT_IMAGE_ID;
use habitgallery_core::messages::CAT_LOAD_FAILED;

use crate::components::images::FallbackImage;
use crate::context::{use_page, use_watch};

#[component]
pub fn Mascot() -> Element {
    let page = use_page();
    let frame = use_watch({
        let page = page.clone();
        move || page.cat().subscribe()
    });

    rsx! {
        div {
            class: "mascot",
            title: "點我試試看！",
            onclick: move |_| {
                page.cat().click();
            },
            FallbackImage {
                src: frame(),
                alt: "互動小貓",
                caption: CAT_LOAD_FAILED,
                id: CAT_IMAGE_ID.to_string(),
                loading: "eager",
                rearm: false,
            }
        }
    }
}
