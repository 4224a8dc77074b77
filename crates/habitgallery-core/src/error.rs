//! Error types for Habit Gallery

use thiserror::Error;

use crate::messages;

/// Main error type for Habit Gallery operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// No response was received (connection refused, DNS, timeout)
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("{}", http_message(.status, .server_message))]
    Http {
        status: u16,
        server_message: Option<String>,
    },

    /// 2xx response whose body was not what the client expects
    #[error("{0}")]
    Malformed(String),

    /// Upload form rejected before any request was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Work id not present in the cached work list
    #[error("Work not found: {0}")]
    WorkNotFound(String),

    /// A page surface the component depends on is not mounted
    #[error("Missing page element: {0}")]
    MissingElement(&'static str),

    /// Invalid configuration value (e.g. unparsable server URL)
    #[error("Invalid configuration: {0}")]
    Config(String),
}

fn http_message(status: &u16, server_message: &Option<String>) -> String {
    match server_message {
        Some(msg) => format!("伺服器錯誤: {}", msg),
        None => format!("HTTP error! status: {}", status),
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(_: serde_json::Error) -> Self {
        GalleryError::Malformed(messages::MALFORMED_WORKS.to_string())
    }
}

/// Upload form validation failures.
///
/// `Display` is the localized message shown in the status line. Only the
/// first failing rule is ever reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("請輸入作者姓名！")]
    AuthorMissing,

    #[error("作者姓名過長，請勿超過 {max} 字。")]
    AuthorTooLong { max: usize },

    #[error("請選擇{}圖片！", .0.label())]
    ImageMissing(ImageSlot),

    #[error("{}圖片格式不支援。請選擇 PNG, JPG, 或 GIF。", .0.label())]
    ImageType(ImageSlot),

    #[error("{}檔案大小超過限制 (最大 {max_mib}MB)。", .slot.label())]
    ImageTooLarge { slot: ImageSlot, max_mib: u64 },

    #[error("請輸入目前的習慣！")]
    HabitsMissing,

    #[error("目前的習慣描述過長，請勿超過 {max} 字。")]
    HabitsTooLong { max: usize },

    #[error("請輸入反思與展望！")]
    ReflectionMissing,

    #[error("反思與展望過長，請勿超過 {max} 字。")]
    ReflectionTooLong { max: usize },
}

/// Which of the two image fields a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Scorecard,
    Comic,
}

impl ImageSlot {
    /// Localized field label
    pub fn label(&self) -> &'static str {
        match self {
            ImageSlot::Scorecard => "習慣計分卡",
            ImageSlot::Comic => "六格漫畫",
        }
    }

    /// Multipart field name
    pub fn field_name(&self) -> &'static str {
        match self {
            ImageSlot::Scorecard => "scorecard-image",
            ImageSlot::Comic => "comic-image",
        }
    }
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = GalleryError::Http {
            status: 503,
            server_message: None,
        };
        assert_eq!(err.to_string(), "HTTP error! status: 503");

        let err = GalleryError::Http {
            status: 500,
            server_message: Some("disk full".to_string()),
        };
        assert_eq!(err.to_string(), "伺服器錯誤: disk full");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::AuthorMissing.to_string(), "請輸入作者姓名！");
        assert_eq!(
            ValidationError::ImageTooLarge {
                slot: ImageSlot::Scorecard,
                max_mib: 16
            }
            .to_string(),
            "習慣計分卡檔案大小超過限制 (最大 16MB)。"
        );
        assert_eq!(
            ValidationError::ImageType(ImageSlot::Comic).to_string(),
            "六格漫畫圖片格式不支援。請選擇 PNG, JPG, 或 GIF。"
        );
    }

    #[test]
    fn test_error_from_validation() {
        let err: GalleryError = ValidationError::HabitsMissing.into();
        assert!(matches!(err, GalleryError::Validation(_)));
        assert_eq!(err.to_string(), "請輸入目前的習慣！");
    }
}
