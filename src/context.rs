//! Page context for Habit Gallery.
//!
//! The [`Page`] is built in `main` and handed to the app as root context.
//!
//! ## Usage
//!
//! ```ignore
//! let page = use_page();
//! let cards = use_watch(|| page.gallery().subscribe());
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use habitgallery_core::messages::WORK_NOT_FOUND_ALERT;
use habitgallery_core::{HttpBackend, Page};
use tokio::sync::watch;

/// Shared page type for context.
pub type SharedPage = Arc<Page<HttpBackend>>;

/// Hook to access the page from context.
pub fn use_page() -> SharedPage {
    use_context::<SharedPage>()
}

/// Mirror a core watch channel into a signal.
///
/// The signal starts with the current value and follows every change until
/// the component unmounts.
pub fn use_watch<T>(subscribe: impl FnOnce() -> watch::Receiver<T>) -> Signal<T>
where
    T: Clone + Send + Sync + 'static,
{
    let rx = use_hook(subscribe);
    let mut value = use_signal(|| rx.borrow().clone());

    use_future(move || {
        let mut rx = rx.clone();
        async move {
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                value.set(next);
            }
        }
    });

    value
}

/// Open the detail dialog for `id`, alerting when the work is not cached.
pub fn open_work(page: &SharedPage, id: &str) {
    if page.modal().open(id).is_err() {
        spawn(async move {
            rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title("習慣養成畫廊")
                .set_description(WORK_NOT_FOUND_ALERT)
                .show()
                .await;
        });
    }
}

/// Run a script in the webview and read back a boolean result.
pub async fn eval_bool(script: &str) -> bool {
    match document::eval(script).join::<bool>().await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Script evaluation failed: {:?}", e);
            false
        }
    }
}

/// Run a script in the webview and read back a count. `None` when the script
/// could not run.
pub async fn eval_count(script: &str) -> Option<usize> {
    match document::eval(script).join::<usize>().await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!("Script evaluation failed: {:?}", e);
            None
        }
    }
}
