//! Placeholder graphics for images that fail to load.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::cat::CAT_IMAGE_ID;
use crate::escape::escape_html;
use crate::messages;

const DEFAULT_SIZE: u32 = 200;
const CAT_SIZE: u32 = 80;

/// Source and alt text of one image, with a one-shot error handler.
///
/// The first failure swaps in a generated SVG; the handler detaches itself
/// at that point so a failing placeholder can never loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFallback {
    element_id: Option<String>,
    caption: String,
    src: String,
    alt: String,
    armed: bool,
}

impl ImageFallback {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            element_id: None,
            caption: messages::IMAGE_LOAD_FAILED.to_string(),
            src: src.into(),
            alt: alt.into(),
            armed: true,
        }
    }

    /// Element id; the mascot image gets a smaller placeholder
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = Some(id.into());
        self
    }

    /// Text shown on the placeholder and used as alt text
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    /// Whether the error handler is still attached
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Point at a new image and re-attach the handler.
    pub fn set_src(&mut self, src: impl Into<String>) {
        self.src = src.into();
        self.armed = true;
    }

    /// Follow a source that changes on its own (animation frames) without
    /// re-attaching the handler. Once the placeholder is shown it stays.
    /// Returns whether the source changed.
    pub fn follow_src(&mut self, src: impl Into<String>) -> bool {
        if !self.armed {
            return false;
        }
        self.src = src.into();
        true
    }

    /// Handle a load failure. Returns false when already detached.
    pub fn handle_error(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        self.armed = false;
        tracing::error!("Image failed to load: {} (alt: {})", self.src, self.alt);

        let size = match self.element_id.as_deref() {
            Some(CAT_IMAGE_ID) => CAT_SIZE,
            _ => DEFAULT_SIZE,
        };
        self.src = placeholder_uri(size, &self.caption);
        self.alt = self.caption.clone();
        true
    }
}

/// Square grey SVG with `caption` centered, as a `data:` URI.
pub fn placeholder_uri(size: u32, caption: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{size}' height='{size}' viewBox='0 0 {size} {size}'>\
<rect width='100%' height='100%' fill='#cccccc'/>\
<text x='50%' y='50%' font-family='sans-serif' font-size='14px' fill='#ffffff' \
dominant-baseline='middle' text-anchor='middle'>{}</text></svg>",
        escape_html(caption)
    );
    format!("data:image/svg+xml;base64,{}", BASE64.encode(svg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(uri: &str) -> String {
        let encoded = uri
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("data uri");
        String::from_utf8(BASE64.decode(encoded).unwrap()).unwrap()
    }

    #[test]
    fn test_replaces_source_and_alt() {
        let mut img = ImageFallback::new("/uploads/missing.png", "小華 的習慣計分卡")
            .with_caption(messages::WORK_IMAGE_LOAD_FAILED);

        assert!(img.handle_error());
        assert!(img.src().starts_with("data:image/svg+xml;base64,"));
        assert_eq!(img.alt(), "作品圖片載入失敗");

        let svg = decode(img.src());
        assert!(svg.contains("width='200'"));
        assert!(svg.contains(">作品圖片載入失敗</text>"));
    }

    #[test]
    fn test_handler_detaches_after_first_failure() {
        let mut img = ImageFallback::new("/a.png", "a");
        assert!(img.handle_error());
        let placeholder = img.src().to_string();

        assert!(!img.is_armed());
        assert!(!img.handle_error());
        assert_eq!(img.src(), placeholder);
    }

    #[test]
    fn test_mascot_is_smaller() {
        let mut img = ImageFallback::new("/static/Box.png", "cat")
            .with_id(CAT_IMAGE_ID)
            .with_caption(messages::CAT_LOAD_FAILED);
        img.handle_error();

        let svg = decode(img.src());
        assert!(svg.contains("width='80'"));
        assert!(svg.contains("viewBox='0 0 80 80'"));
        assert_eq!(img.alt(), "Cat Error");
    }

    #[test]
    fn test_caption_is_escaped() {
        let svg = decode(&placeholder_uri(200, "<img onerror=x>"));
        assert!(svg.contains("&lt;img onerror=x&gt;"));
        assert!(!svg.contains("<img"));
    }

    #[test]
    fn test_follow_src_keeps_placeholder_after_failure() {
        let mut img = ImageFallback::new("/static/Box.png", "cat")
            .with_id(CAT_IMAGE_ID)
            .with_caption(messages::CAT_LOAD_FAILED);

        assert!(img.follow_src("/static/Box2.png"));
        assert_eq!(img.src(), "/static/Box2.png");

        assert!(img.handle_error());
        let placeholder = img.src().to_string();

        for frame in ["/static/Box3.png", "/static/Box.png", "/static/Box2.png"] {
            assert!(!img.follow_src(frame));
            assert!(!img.handle_error());
        }
        assert_eq!(img.src(), placeholder);
        assert!(!img.is_armed());
    }

    #[test]
    fn test_set_src_rearms() {
        let mut img = ImageFallback::new("/a.png", "a");
        img.handle_error();
        img.set_src("/b.png");
        assert!(img.is_armed());
        assert_eq!(img.src(), "/b.png");
    }
}
