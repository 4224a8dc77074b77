//! In-memory [`Backend`] for tests and offline runs.
//!
//! Records every request and answers with canned responses.

use parking_lot::Mutex;
use serde_json::Value;

use crate::backend::{Backend, UploadReply, UploadResponse};
use crate::error::GalleryResult;
use crate::upload::UploadPayload;

#[derive(Debug)]
struct MockState {
    works: GalleryResult<Vec<Value>>,
    upload: GalleryResult<UploadResponse>,
    ping: GalleryResult<u16>,
    fetch_count: usize,
    ping_count: usize,
    stalled_pings: usize,
    uploads: Vec<UploadPayload>,
}

#[derive(Debug)]
pub struct MockBackend {
    state: Mutex<MockState>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Empty work list, successful uploads, 200 pings
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                works: Ok(Vec::new()),
                upload: Ok(UploadResponse {
                    status: 201,
                    reply: Some(UploadReply {
                        success: true,
                        message: Some("分享成功!".to_string()),
                        ..Default::default()
                    }),
                }),
                ping: Ok(200),
                fetch_count: 0,
                ping_count: 0,
                stalled_pings: 0,
                uploads: Vec::new(),
            }),
        }
    }

    pub fn with_works(works: Vec<Value>) -> Self {
        let backend = Self::new();
        backend.set_works(Ok(works));
        backend
    }

    pub fn set_works(&self, works: GalleryResult<Vec<Value>>) {
        self.state.lock().works = works;
    }

    pub fn set_upload_result(&self, result: GalleryResult<UploadResponse>) {
        self.state.lock().upload = result;
    }

    /// Respond to uploads with `status` and the given JSON body
    pub fn set_upload_reply(&self, status: u16, success: bool, error: Option<&str>) {
        self.set_upload_result(Ok(UploadResponse {
            status,
            reply: Some(UploadReply {
                success,
                error: error.map(str::to_string),
                ..Default::default()
            }),
        }));
    }

    pub fn set_ping_result(&self, result: GalleryResult<u16>) {
        self.state.lock().ping = result;
    }

    /// The next `count` pings never complete
    pub fn stall_next_pings(&self, count: usize) {
        self.state.lock().stalled_pings = count;
    }

    pub fn fetch_count(&self) -> usize {
        self.state.lock().fetch_count
    }

    pub fn ping_count(&self) -> usize {
        self.state.lock().ping_count
    }

    /// Every upload payload received, in order
    pub fn uploads(&self) -> Vec<UploadPayload> {
        self.state.lock().uploads.clone()
    }
}

impl Backend for MockBackend {
    async fn fetch_works(&self) -> GalleryResult<Vec<Value>> {
        let mut state = self.state.lock();
        state.fetch_count += 1;
        state.works.clone()
    }

    async fn upload(&self, payload: UploadPayload) -> GalleryResult<UploadResponse> {
        let mut state = self.state.lock();
        state.uploads.push(payload);
        state.upload.clone()
    }

    async fn ping(&self) -> GalleryResult<u16> {
        let (result, stall) = {
            let mut state = self.state.lock();
            state.ping_count += 1;
            let stall = state.stalled_pings > 0;
            if stall {
                state.stalled_pings -= 1;
            }
            (state.ping.clone(), stall)
        };
        if stall {
            std::future::pending::<()>().await;
        }
        result
    }
}

/// A JSON work record as the server would send it
pub fn work_json(id: &str, author: &str) -> Value {
    serde_json::json!({
        "id": id,
        "author": author,
        "currentHabits": format!("{} 的習慣", author),
        "reflection": format!("{} 的反思", author),
        "scorecardImageUrl": format!("/uploads/{}_scorecard.png", id),
        "comicImageUrl": format!("/uploads/{}_comic.png", id),
    })
}

