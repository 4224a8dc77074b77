//! Upload form validation and submission.
//!
//! ## Flow
//!
//! 1. Validate the form, stopping at the first failing rule. A failure is
//!    shown in the status line and nothing is sent.
//! 2. Disable the submit button ("上傳中...") and send one multipart request.
//! 3. On `{success: true}`: show success, reset the form, reload the gallery
//!    and clear the success message after five seconds if nothing newer has
//!    replaced it.
//! 4. On any failure: show the server's error (escaped) or a generic message.
//! 5. Always re-enable the submit button.

use std::sync::Arc;

use tokio::sync::watch;

use crate::backend::Backend;
use crate::config::GalleryConfig;
use crate::error::{ImageSlot, ValidationError};
use crate::escape::{escape_html, Markup};
use crate::gallery::GalleryLoader;
use crate::messages;
use crate::timer::TimerSlot;
use crate::types::ImageFile;

pub const MAX_AUTHOR_CHARS: usize = 50;
pub const MAX_HABITS_CHARS: usize = 500;
pub const MAX_REFLECTION_CHARS: usize = 1000;
pub const MAX_IMAGE_BYTES: u64 = 16 * 1024 * 1024;
pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/png", "image/jpeg", "image/jpg", "image/gif"];

/// Form contents as the visitor filled them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub author: String,
    pub scorecard: Option<ImageFile>,
    pub comic: Option<ImageFile>,
    pub current_habits: String,
    pub reflection: String,
}

/// A validated submission, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPayload {
    pub author: String,
    pub scorecard: ImageFile,
    pub comic: ImageFile,
    pub current_habits: String,
    pub reflection: String,
}

fn check_text(
    value: &str,
    max: usize,
    missing: ValidationError,
    too_long: ValidationError,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(missing);
    }
    if trimmed.chars().count() > max {
        return Err(too_long);
    }
    Ok(trimmed.to_string())
}

fn check_image(file: &Option<ImageFile>, slot: ImageSlot) -> Result<ImageFile, ValidationError> {
    let file = file.as_ref().ok_or(ValidationError::ImageMissing(slot))?;
    if !ALLOWED_IMAGE_TYPES.contains(&file.mime.as_str()) {
        return Err(ValidationError::ImageType(slot));
    }
    if file.size() > MAX_IMAGE_BYTES {
        return Err(ValidationError::ImageTooLarge {
            slot,
            max_mib: MAX_IMAGE_BYTES / 1024 / 1024,
        });
    }
    Ok(file.clone())
}

impl UploadForm {
    /// Check every rule in order and report the first failure only.
    pub fn validate(&self) -> Result<UploadPayload, ValidationError> {
        let author = check_text(
            &self.author,
            MAX_AUTHOR_CHARS,
            ValidationError::AuthorMissing,
            ValidationError::AuthorTooLong {
                max: MAX_AUTHOR_CHARS,
            },
        )?;
        let scorecard = check_image(&self.scorecard, ImageSlot::Scorecard)?;
        let comic = check_image(&self.comic, ImageSlot::Comic)?;
        let current_habits = check_text(
            &self.current_habits,
            MAX_HABITS_CHARS,
            ValidationError::HabitsMissing,
            ValidationError::HabitsTooLong {
                max: MAX_HABITS_CHARS,
            },
        )?;
        let reflection = check_text(
            &self.reflection,
            MAX_REFLECTION_CHARS,
            ValidationError::ReflectionMissing,
            ValidationError::ReflectionTooLong {
                max: MAX_REFLECTION_CHARS,
            },
        )?;

        Ok(UploadPayload {
            author,
            scorecard,
            comic,
            current_habits,
            reflection,
        })
    }

    pub fn reset(&mut self) {
        *self = UploadForm::default();
    }
}

/// Styling of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Info => "upload-status upload-status--info",
            StatusKind::Success => "upload-status upload-status--success",
            StatusKind::Error => "upload-status upload-status--error",
        }
    }
}

/// The message under the upload form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub message: Markup,
    pub kind: Option<StatusKind>,
    /// Bumped on every change; lets a delayed clear tell whether its
    /// message is still the one showing
    pub seq: u64,
}

/// State of the submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub disabled: bool,
    pub label: &'static str,
}

impl SubmitControl {
    pub fn ready() -> Self {
        Self {
            disabled: false,
            label: messages::SUBMIT_LABEL,
        }
    }

    pub fn submitting() -> Self {
        Self {
            disabled: true,
            label: messages::SUBMITTING_LABEL,
        }
    }
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::ready()
    }
}

/// How a submit attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Rejected locally; nothing was sent
    Invalid(ValidationError),
    /// Server accepted the work; the form was reset
    Uploaded,
    /// Server answered but did not accept the work
    Rejected(String),
    /// No response from the server
    Unreachable,
    /// A submission is already in flight
    Busy,
}

/// Restores the submit button however the submission ends, including when
/// the future is dropped mid-request.
struct SubmitGuard<'a> {
    control: &'a watch::Sender<SubmitControl>,
}

impl<'a> SubmitGuard<'a> {
    fn engage(control: &'a watch::Sender<SubmitControl>) -> Self {
        control.send_replace(SubmitControl::submitting());
        Self { control }
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.control.send_replace(SubmitControl::ready());
    }
}

pub struct UploadFlow<B: Backend> {
    backend: Arc<B>,
    gallery: Arc<GalleryLoader<B>>,
    status: Arc<watch::Sender<StatusLine>>,
    control: watch::Sender<SubmitControl>,
    clear_timer: TimerSlot,
    config: GalleryConfig,
}

impl<B: Backend> UploadFlow<B> {
    pub fn new(backend: Arc<B>, gallery: Arc<GalleryLoader<B>>, config: GalleryConfig) -> Self {
        let (status, _) = watch::channel(StatusLine::default());
        let (control, _) = watch::channel(SubmitControl::ready());
        Self {
            backend,
            gallery,
            status: Arc::new(status),
            control,
            clear_timer: TimerSlot::new(),
            config,
        }
    }

    /// Validate and send `form`. On success `form` is reset.
    pub async fn submit(&self, form: &mut UploadForm) -> SubmitOutcome {
        if self.control.borrow().disabled {
            tracing::debug!("Upload already in progress");
            return SubmitOutcome::Busy;
        }

        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::info!("Upload form rejected: {:?}", e);
                self.set_status(Markup::trusted(e.to_string()), Some(StatusKind::Error));
                return SubmitOutcome::Invalid(e);
            }
        };

        let _guard = SubmitGuard::engage(&self.control);
        self.set_status(
            Markup::trusted(messages::UPLOAD_IN_PROGRESS),
            Some(StatusKind::Info),
        );

        match self.backend.upload(payload).await {
            Ok(response) if response.is_success() => {
                let seq = self.set_status(
                    Markup::trusted(messages::UPLOAD_SUCCESS),
                    Some(StatusKind::Success),
                );
                form.reset();
                if let Err(e) = self.gallery.load().await {
                    tracing::warn!("Gallery refresh after upload failed: {}", e);
                }
                self.schedule_clear(seq);
                tracing::info!("Upload succeeded (status {})", response.status);
                SubmitOutcome::Uploaded
            }
            Ok(response) => {
                let reason = response
                    .error_message()
                    .unwrap_or(messages::UPLOAD_UNKNOWN_ERROR)
                    .to_string();
                tracing::error!("Upload failed (status {}): {:?}", response.status, response.reply);
                let mut message = String::from(messages::UPLOAD_FAILED_PREFIX);
                message.push_str(escape_html(&reason).as_str());
                self.set_status(Markup::trusted(message), Some(StatusKind::Error));
                SubmitOutcome::Rejected(reason)
            }
            Err(e) => {
                tracing::error!("Error during upload: {}", e);
                self.set_status(
                    Markup::trusted(messages::UPLOAD_CONNECTIVITY),
                    Some(StatusKind::Error),
                );
                SubmitOutcome::Unreachable
            }
        }
    }

    /// Replace the status line; returns its new sequence number.
    fn set_status(&self, message: Markup, kind: Option<StatusKind>) -> u64 {
        let mut seq = 0;
        self.status.send_modify(|line| {
            line.seq += 1;
            line.message = message;
            line.kind = kind;
            seq = line.seq;
        });
        seq
    }

    fn schedule_clear(&self, seq: u64) {
        let status = Arc::clone(&self.status);
        self.clear_timer
            .arm_once(self.config.status_clear_delay, move || {
                status.send_if_modified(|line| {
                    if line.seq != seq {
                        return false;
                    }
                    line.seq += 1;
                    line.message = Markup::default();
                    line.kind = None;
                    true
                });
            });
    }

    pub fn status(&self) -> StatusLine {
        self.status.borrow().clone()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<StatusLine> {
        self.status.subscribe()
    }

    pub fn submit_control(&self) -> SubmitControl {
        *self.control.borrow()
    }

    pub fn subscribe_control(&self) -> watch::Receiver<SubmitControl> {
        self.control.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(size: usize) -> ImageFile {
        ImageFile::new("card.png", "image/png", vec![0u8; size])
    }

    fn valid_form() -> UploadForm {
        UploadForm {
            author: "  小華 ".to_string(),
            scorecard: Some(png(1024)),
            comic: Some(ImageFile::new("comic.gif", "image/gif", vec![1u8; 2048])),
            current_habits: "每天滑手機到半夜".to_string(),
            reflection: "想要早點睡".to_string(),
        }
    }

    #[test]
    fn test_valid_form_trims_text() {
        let payload = valid_form().validate().unwrap();
        assert_eq!(payload.author, "小華");
        assert_eq!(payload.comic.mime, "image/gif");
    }

    #[test]
    fn test_author_rules() {
        let mut form = valid_form();
        form.author = "   ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::AuthorMissing));

        form.author = "名".repeat(50);
        assert!(form.validate().is_ok());

        form.author = "名".repeat(51);
        assert_eq!(
            form.validate(),
            Err(ValidationError::AuthorTooLong { max: 50 })
        );
    }

    #[test]
    fn test_image_rules() {
        let mut form = valid_form();
        form.scorecard = None;
        assert_eq!(
            form.validate(),
            Err(ValidationError::ImageMissing(ImageSlot::Scorecard))
        );

        form.scorecard = Some(ImageFile::new("x.webp", "image/webp", vec![0; 10]));
        assert_eq!(
            form.validate(),
            Err(ValidationError::ImageType(ImageSlot::Scorecard))
        );

        form.scorecard = Some(png(17 * 1024 * 1024));
        assert_eq!(
            form.validate(),
            Err(ValidationError::ImageTooLarge {
                slot: ImageSlot::Scorecard,
                max_mib: 16
            })
        );

        form.scorecard = Some(png(16 * 1024 * 1024));
        form.comic = Some(ImageFile::new("c.jpg", "image/jpeg", vec![0; 17 * 1024 * 1024]));
        assert_eq!(
            form.validate(),
            Err(ValidationError::ImageTooLarge {
                slot: ImageSlot::Comic,
                max_mib: 16
            })
        );
    }

    #[test]
    fn test_text_limits() {
        let mut form = valid_form();
        form.current_habits = "a".repeat(501);
        assert_eq!(
            form.validate(),
            Err(ValidationError::HabitsTooLong { max: 500 })
        );

        form.current_habits = "a".repeat(500);
        form.reflection = String::new();
        assert_eq!(form.validate(), Err(ValidationError::ReflectionMissing));

        form.reflection = "b".repeat(1001);
        assert_eq!(
            form.validate(),
            Err(ValidationError::ReflectionTooLong { max: 1000 })
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let form = UploadForm {
            author: String::new(),
            scorecard: None,
            comic: None,
            current_habits: String::new(),
            reflection: String::new(),
        };
        assert_eq!(form.validate(), Err(ValidationError::AuthorMissing));
    }

    #[test]
    fn test_reset() {
        let mut form = valid_form();
        form.reset();
        assert_eq!(form, UploadForm::default());
    }

    #[test]
    fn test_guard_restores_control() {
        let (control, _) = watch::channel(SubmitControl::ready());
        {
            let _guard = SubmitGuard::engage(&control);
            assert_eq!(*control.borrow(), SubmitControl::submitting());
        }
        assert_eq!(*control.borrow(), SubmitControl::ready());
        assert_eq!(control.borrow().label, "確認上傳");
    }
}
