//! Upload Flow Integration Tests
//!
//! Drives `UploadFlow` against the in-memory backend with tokio's paused
//! clock, checking what reaches the network, what the status line shows and
//! how the gallery refreshes after a successful upload.

use std::sync::Arc;
use std::time::Duration;

use habitgallery_core::backend::UploadResponse;
use habitgallery_core::testing::{work_json, MockBackend};
use habitgallery_core::{
    GalleryConfig, GalleryError, GalleryLoader, ImageFile, StatusKind, SubmitControl,
    SubmitOutcome, UploadFlow, UploadForm, ValidationError, WorkStore,
};

struct Harness {
    backend: Arc<MockBackend>,
    gallery: Arc<GalleryLoader<MockBackend>>,
    flow: UploadFlow<MockBackend>,
}

fn harness() -> Harness {
    let config = GalleryConfig::new("http://localhost:5000/").unwrap();
    let backend = Arc::new(MockBackend::new());
    let gallery = Arc::new(GalleryLoader::new(
        backend.clone(),
        WorkStore::new(),
        config.clone(),
    ));
    let flow = UploadFlow::new(backend.clone(), gallery.clone(), config);
    Harness {
        backend,
        gallery,
        flow,
    }
}

fn image(name: &str, mime: &str, size: usize) -> ImageFile {
    ImageFile::new(name, mime, vec![7u8; size])
}

fn filled_form() -> UploadForm {
    UploadForm {
        author: "小明".to_string(),
        scorecard: Some(image("scorecard.png", "image/png", 4096)),
        comic: Some(image("comic.jpg", "image/jpeg", 8192)),
        current_habits: "睡前一直看手機".to_string(),
        reflection: "改成睡前看書".to_string(),
    }
}

#[tokio::test(start_paused = true)]
async fn test_missing_author_sends_nothing() {
    let h = harness();
    let mut form = filled_form();
    form.author = String::new();

    let outcome = h.flow.submit(&mut form).await;

    assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::AuthorMissing));
    let status = h.flow.status();
    assert_eq!(status.message.as_str(), "請輸入作者姓名！");
    assert_eq!(status.kind, Some(StatusKind::Error));
    assert!(h.backend.uploads().is_empty());
    assert_eq!(h.backend.fetch_count(), 0);
    // left for correction
    assert_eq!(form.current_habits, "睡前一直看手機");
    assert_eq!(h.flow.submit_control(), SubmitControl::ready());
}

#[tokio::test(start_paused = true)]
async fn test_oversized_scorecard_sends_nothing() {
    let h = harness();
    let mut form = filled_form();
    form.scorecard = Some(image("huge.png", "image/png", 17 * 1024 * 1024));

    let outcome = h.flow.submit(&mut form).await;

    assert!(matches!(
        outcome,
        SubmitOutcome::Invalid(ValidationError::ImageTooLarge { .. })
    ));
    assert_eq!(
        h.flow.status().message.as_str(),
        "習慣計分卡檔案大小超過限制 (最大 16MB)。"
    );
    assert!(h.backend.uploads().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_successful_upload_resets_and_refreshes_once() {
    let h = harness();
    h.backend.set_works(Ok(vec![work_json("new", "小明")]));
    let mut form = filled_form();

    let outcome = h.flow.submit(&mut form).await;

    assert_eq!(outcome, SubmitOutcome::Uploaded);
    let uploads = h.backend.uploads();
    assert_eq!(uploads.len(), 1);
    let sent = &uploads[0];
    assert_eq!(sent.author, "小明");
    assert_eq!(sent.scorecard.file_name, "scorecard.png");
    assert_eq!(sent.comic.file_name, "comic.jpg");
    assert_eq!(sent.current_habits, "睡前一直看手機");
    assert_eq!(sent.reflection, "改成睡前看書");

    assert_eq!(form, UploadForm::default());
    assert_eq!(h.backend.fetch_count(), 1);
    assert_eq!(h.gallery.cards().len(), 1);

    let status = h.flow.status();
    assert_eq!(status.message.as_str(), "作品上傳成功！畫廊正在更新...");
    assert_eq!(status.kind, Some(StatusKind::Success));
    assert_eq!(h.flow.submit_control(), SubmitControl::ready());
}

#[tokio::test(start_paused = true)]
async fn test_success_status_clears_after_five_seconds() {
    let h = harness();
    h.flow.submit(&mut filled_form()).await;

    tokio::time::sleep(Duration::from_millis(4_900)).await;
    assert_eq!(h.flow.status().kind, Some(StatusKind::Success));

    tokio::time::sleep(Duration::from_millis(200)).await;
    let status = h.flow.status();
    assert!(status.message.is_empty());
    assert_eq!(status.kind, None);
}

#[tokio::test(start_paused = true)]
async fn test_newer_status_is_not_cleared() {
    let h = harness();
    h.flow.submit(&mut filled_form()).await;

    tokio::time::sleep(Duration::from_secs(2)).await;
    let mut bad = filled_form();
    bad.reflection = String::new();
    h.flow.submit(&mut bad).await;

    tokio::time::sleep(Duration::from_secs(4)).await;
    let status = h.flow.status();
    assert_eq!(status.message.as_str(), "請輸入反思與展望！");
    assert_eq!(status.kind, Some(StatusKind::Error));
}

#[tokio::test(start_paused = true)]
async fn test_server_error_is_escaped() {
    let h = harness();
    h.backend
        .set_upload_reply(400, false, Some("<b>檔案損毀</b>"));
    let mut form = filled_form();

    let outcome = h.flow.submit(&mut form).await;

    assert_eq!(outcome, SubmitOutcome::Rejected("<b>檔案損毀</b>".to_string()));
    assert_eq!(
        h.flow.status().message.as_str(),
        "上傳失敗: &lt;b&gt;檔案損毀&lt;/b&gt;"
    );
    assert_eq!(form, filled_form());
    assert_eq!(h.backend.fetch_count(), 0);
    assert_eq!(h.flow.submit_control(), SubmitControl::ready());
}

#[tokio::test(start_paused = true)]
async fn test_success_false_with_2xx_is_failure() {
    let h = harness();
    h.backend.set_upload_reply(200, false, None);

    let outcome = h.flow.submit(&mut filled_form()).await;

    assert_eq!(outcome, SubmitOutcome::Rejected("發生未知錯誤".to_string()));
    assert_eq!(h.flow.status().message.as_str(), "上傳失敗: 發生未知錯誤");
}

#[tokio::test(start_paused = true)]
async fn test_unparsable_error_body() {
    let h = harness();
    h.backend.set_upload_result(Ok(UploadResponse {
        status: 502,
        reply: None,
    }));

    h.flow.submit(&mut filled_form()).await;
    assert_eq!(h.flow.status().message.as_str(), "上傳失敗: 發生未知錯誤");
    assert_eq!(h.flow.status().kind, Some(StatusKind::Error));
}

#[tokio::test(start_paused = true)]
async fn test_transport_failure() {
    let h = harness();
    h.backend
        .set_upload_result(Err(GalleryError::Transport("connection refused".to_string())));
    let mut form = filled_form();

    let outcome = h.flow.submit(&mut form).await;

    assert_eq!(outcome, SubmitOutcome::Unreachable);
    assert_eq!(
        h.flow.status().message.as_str(),
        "上傳過程中發生網路或伺服器連線錯誤。"
    );
    assert_eq!(form, filled_form());
    assert_eq!(h.flow.submit_control(), SubmitControl::ready());
}

#[tokio::test(start_paused = true)]
async fn test_refresh_failure_still_counts_as_uploaded() {
    let h = harness();
    h.backend.set_works(Err(GalleryError::Http {
        status: 503,
        server_message: None,
    }));

    let outcome = h.flow.submit(&mut filled_form()).await;

    assert_eq!(outcome, SubmitOutcome::Uploaded);
    assert!(h.gallery.view().is_error());
    assert_eq!(h.flow.status().kind, Some(StatusKind::Success));
}
