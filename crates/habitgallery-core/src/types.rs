//! Core types: works as served by `/works` and image files picked for upload.

use serde::{Deserialize, Serialize};

/// One shared submission, as returned by `GET /works`.
///
/// Every field is optional on the wire: the server is not trusted to send a
/// complete record, and incomplete ones are filtered at render time rather
/// than rejected at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub scorecard_image_url: Option<String>,
    #[serde(default)]
    pub comic_image_url: Option<String>,
    #[serde(default)]
    pub current_habits: Option<String>,
    #[serde(default)]
    pub reflection: Option<String>,
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl Work {
    /// A work can be shown as a gallery card only with an id, an author and
    /// a scorecard image.
    pub fn is_renderable(&self) -> bool {
        non_empty(&self.id).is_some()
            && non_empty(&self.author).is_some()
            && non_empty(&self.scorecard_image_url).is_some()
    }

    pub fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    pub fn scorecard_url(&self) -> Option<&str> {
        non_empty(&self.scorecard_image_url)
    }

    pub fn comic_url(&self) -> Option<&str> {
        non_empty(&self.comic_image_url)
    }
}

/// An image file picked by the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Original file name, sent as the multipart filename
    pub file_name: String,
    /// MIME type as detected from the file contents (empty if unknown)
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Size in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
