//! Fallback Image
//!
//! An `img` that swaps in a generated placeholder the first time it fails.

use dioxus::prelude::*;
use habitgallery_core::messages::IMAGE_LOAD_FAILED;
use habitgallery_core::ImageFallback;

/// Image with a one-shot error fallback
///
/// # Examples
///
/// ```rust
/// rsx! {
///     FallbackImage {
///         src: card.image_url.clone(),
///         alt: card.alt.clone(),
///         caption: WORK_IMAGE_LOAD_FAILED,
///     }
/// }
/// ```
#[component]
pub fn FallbackImage(
    /// Image URL
    src: ReadOnlySignal<String>,
    /// Alt text until the image fails
    alt: String,
    /// Placeholder caption
    #[props(default = IMAGE_LOAD_FAILED)]
    caption: &'static str,
    /// Element id
    #[props(default = None)]
    id: Option<String>,
    #[props(default = None)]
    class: Option<String>,
    #[props(default = "lazy")]
    loading: &'static str,
    /// Give each new source a fresh attempt. When false, a source change
    /// after a failure keeps the placeholder.
    #[props(default = true)]
    rearm: bool,
) -> Element {
    let mut image = use_signal(|| {
        let fallback = ImageFallback::new(src.peek().clone(), alt.clone()).with_caption(caption);
        match id.clone() {
            Some(id) => fallback.with_id(id),
            None => fallback,
        }
    });

    use_effect(move || {
        let next = src();
        if image.peek().src() == next {
            return;
        }
        if rearm {
            image.write().set_src(next);
        } else if image.peek().is_armed() {
            image.write().follow_src(next);
        }
    });

    let current = image();

    rsx! {
        img {
            id: id.clone(),
            class: class.clone(),
            src: "{current.src()}",
            alt: "{current.alt()}",
            loading,
            onerror: move |_| {
                image.write().handle_error();
            },
        }
    }
}
