//! Upload Form Component
//!
//! Author name, two images and two reflections. Validation and submission
//! go through the core upload flow; the status line and the submit button
//! mirror its published state.

use dioxus::prelude::*;
use habitgallery_core::error::ImageSlot;
use habitgallery_core::upload::{MAX_AUTHOR_CHARS, MAX_HABITS_CHARS, MAX_REFLECTION_CHARS};
use habitgallery_core::{SubmitOutcome, UploadForm as FormData};

use crate::components::images::ImagePicker;
use crate::context::{use_page, use_watch};

#[component]
pub fn UploadForm() -> Element {
    let page = use_page();
    let mut form = use_signal(FormData::default);
    let status = use_watch({
        let page = page.clone();
        move || page.upload().subscribe_status()
    });
    let control = use_watch({
        let page = page.clone();
        move || page.upload().subscribe_control()
    });

    let submit = move |_| {
        let page = page.clone();
        spawn(async move {
            let mut draft = form.peek().clone();
            let outcome = page.upload().submit(&mut draft).await;
            // Only a successful upload touches the visitor's input
            if outcome == SubmitOutcome::Uploaded {
                form.set(draft);
            }
        });
    };

    let current = form();
    let line = status();
    let button = control();

    rsx! {
        div { class: "upload-form",
            div { class: "form-field",
                label { class: "form-label", r#for: "author-name", "作者姓名" }
                input {
                    id: "author-name",
                    class: "form-input",
                    r#type: "text",
                    maxlength: "{MAX_AUTHOR_CHARS}",
                    placeholder: "你的名字或暱稱",
                    value: "{current.author}",
                    oninput: move |e| form.write().author = e.value(),
                }
            }

            div { class: "form-row",
                ImagePicker {
                    label: ImageSlot::Scorecard.label(),
                    name: ImageSlot::Scorecard.field_name(),
                    selected: current.scorecard.clone(),
                    on_pick: move |file| form.write().scorecard = Some(file),
                }
                ImagePicker {
                    label: ImageSlot::Comic.label(),
                    name: ImageSlot::Comic.field_name(),
                    selected: current.comic.clone(),
                    on_pick: move |file| form.write().comic = Some(file),
                }
            }

            div { class: "form-field",
                label { class: "form-label", r#for: "current-habits", "目前的習慣" }
                textarea {
                    id: "current-habits",
                    class: "form-textarea",
                    maxlength: "{MAX_HABITS_CHARS}",
                    rows: "4",
                    value: "{current.current_habits}",
                    oninput: move |e| form.write().current_habits = e.value(),
                }
            }

            div { class: "form-field",
                label { class: "form-label", r#for: "reflection", "反思與展望" }
                textarea {
                    id: "reflection",
                    class: "form-textarea",
                    maxlength: "{MAX_REFLECTION_CHARS}",
                    rows: "5",
                    value: "{current.reflection}",
                    oninput: move |e| form.write().reflection = e.value(),
                }
            }

            button {
                class: "btn-primary upload-submit",
                r#type: "button",
                disabled: button.disabled,
                onclick: submit,
                "{button.label}"
            }

            div {
                class: line.kind.map(|k| k.css_class()).unwrap_or("upload-status"),
                role: "status",
                dangerous_inner_html: "{line.message}",
            }
        }
    }
}
