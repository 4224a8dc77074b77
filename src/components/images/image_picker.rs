//! Image Picker Component
//!
//! Native file picker that reads the chosen file and detects its type from
//! the contents.

use std::path::Path;

use dioxus::prelude::*;
use habitgallery_core::ImageFile;
use rfd::AsyncFileDialog;

/// File picker button for one image field
///
/// # Examples
///
/// ```rust
/// rsx! {
///     ImagePicker {
///         label: "習慣計分卡",
///         name: "scorecard-image",
///         selected: form().scorecard.clone(),
///         on_pick: move |file| form.write().scorecard = Some(file),
///     }
/// }
/// ```
#[component]
pub fn ImagePicker(
    /// Field label
    label: &'static str,
    /// Form field name
    name: &'static str,
    /// Currently selected file
    selected: Option<ImageFile>,
    /// Called with the loaded file
    on_pick: EventHandler<ImageFile>,
) -> Element {
    let mut reading = use_signal(|| false);

    let pick = move |_| {
        reading.set(true);

        spawn(async move {
            let picked = AsyncFileDialog::new()
                .add_filter("images", &["png", "jpg", "jpeg", "gif"])
                .set_title(label)
                .pick_file()
                .await;

            if let Some(handle) = picked {
                let bytes = handle.read().await;
                on_pick.call(to_image_file(handle.path(), bytes));
            }
            reading.set(false);
        });
    };

    rsx! {
        div { class: "image-picker",
            label { class: "form-label", r#for: "{name}", "{label}" }
            button {
                id: "{name}",
                class: "image-picker-btn",
                r#type: "button",
                onclick: pick,
                disabled: reading(),
                if reading() {
                    "讀取中..."
                } else if let Some(file) = &selected {
                    "{file.file_name}"
                } else {
                    "選擇圖片"
                }
            }
        }
    }
}

/// Build an [`ImageFile`], sniffing the MIME type from the bytes. Unknown
/// content gets an empty type and is rejected by validation.
fn to_image_file(path: &Path, bytes: Vec<u8>) -> ImageFile {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image")
        .to_string();
    let mime = match image::guess_format(&bytes) {
        Ok(format) => format.to_mime_type().to_string(),
        Err(e) => {
            tracing::debug!("Could not detect image type of {}: {}", file_name, e);
            String::new()
        }
    };
    ImageFile::new(file_name, mime, bytes)
}
