//! Image handling components
//!
//! Images with a generated fallback, and the native image picker.

mod fallback_image;
pub mod image_picker;

pub use fallback_image::FallbackImage;
pub use image_picker::ImagePicker;
