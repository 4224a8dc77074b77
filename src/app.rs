use dioxus::prelude::*;
use habitgallery_core::bootstrap::StartReport;
use habitgallery_core::PageSurface;

use crate::context::use_page;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, starts the page once on mount and routes the
/// Escape key to the detail dialog.
#[component]
pub fn App() -> Element {
    let page = use_page();
    let mut report: Signal<Option<StartReport>> = use_signal(|| None);

    // Start on mount: gallery first, then slideshow, mascot and keep-alive
    use_effect({
        let page = page.clone();
        move || {
            let page = page.clone();
            spawn(async move {
                let started = page.start(PageSurface::default()).await;
                if let Some(Err(e)) = &started.gallery {
                    tracing::warn!("Initial gallery load failed: {}", e);
                }
                report.set(Some(started));
            });
        }
    });

    use_drop({
        let page = page.clone();
        move || page.shutdown()
    });

    let banner = report().and_then(|r| r.banner);

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "app-root",
            tabindex: "-1",
            onkeydown: move |evt: KeyboardEvent| {
                page.modal().handle_key(&evt.key().to_string());
            },

            if let Some(message) = banner {
                div { class: "init-error-banner", role: "alert", "{message}" }
            }

            Home {}
        }
    }
}
