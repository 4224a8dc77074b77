//! Hero Slideshow Component
//!
//! Rotates the first few shared scorecards. Timing lives in the core; this
//! only renders the published slides.

use dioxus::prelude::*;
use habitgallery_core::messages::{IMAGE_LOAD_FAILED, SLIDESHOW_EMPTY};
use habitgallery_core::SlideshowView;

use crate::components::images::FallbackImage;
use crate::context::{eval_count, use_page, use_watch};

const COUNT_SLIDES: &str =
    "return document.querySelectorAll('.hero-slideshow .slide').length;";

#[component]
pub fn HeroSlideshow() -> Element {
    let page = use_page();
    let view = use_watch({
        let page = page.clone();
        move || page.slideshow().subscribe()
    });

    // Report the slide elements actually mounted so the core can detect a
    // mismatch with its slide set
    use_effect(move || {
        if !matches!(view(), SlideshowView::Showing { .. }) {
            return;
        }
        let page = page.clone();
        spawn(async move {
            if let Some(mounted) = eval_count(COUNT_SLIDES).await {
                page.slideshow().report_rendered(mounted);
            }
        });
    });

    rsx! {
        div { class: "hero-slideshow",
            match view() {
                SlideshowView::Showing { slides, .. } => rsx! {
                    for (i, slide) in slides.into_iter().enumerate() {
                        div {
                            key: "{i}",
                            class: if slide.active { "slide active" } else { "slide" },
                            FallbackImage {
                                src: slide.url.clone(),
                                alt: format!("分享作品 {}", i + 1),
                                caption: IMAGE_LOAD_FAILED,
                                loading: slide.loading.as_attr(),
                            }
                        }
                    }
                },
                SlideshowView::Empty => rsx! {
                    p { class: "slideshow-placeholder", "{SLIDESHOW_EMPTY}" }
                },
                SlideshowView::Pending | SlideshowView::Cleared => rsx! {},
            }
        }
    }
}
