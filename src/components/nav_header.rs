//! Navigation Header Component
//!
//! Desktop: horizontal header with title and section links
//! Mobile: links collapse into a toggle panel

use dioxus::prelude::*;
use habitgallery_core::nav::nav_click;
use habitgallery_core::MobileMenu;

use crate::context::eval_bool;

/// In-page sections reachable from the header
const NAV_LINKS: [(&str, &str); 3] = [
    ("#hero", "首頁"),
    ("#gallery", "作品畫廊"),
    ("#upload", "上傳作品"),
];

/// Navigation Header component
///
/// Anchor links scroll smoothly to their section. A link clicked inside the
/// open mobile panel also closes the panel.
#[component]
pub fn NavHeader() -> Element {
    let mut menu = use_signal(MobileMenu::new);

    let mut follow = move |href: &'static str, inside_menu: bool| {
        let Some(request) = nav_click(&mut menu.write(), href, inside_menu) else {
            return;
        };
        spawn(async move {
            let found = eval_bool(&request.script()).await;
            request.report(found);
        });
    };

    let open = menu().is_open();

    rsx! {
        header { class: "nav-header",
            a {
                class: "nav-title",
                href: "#hero",
                onclick: move |evt| {
                    evt.prevent_default();
                    follow("#hero", false);
                },
                "習慣養成畫廊"
            }

            nav { class: "nav-links",
                for (href, label) in NAV_LINKS {
                    a {
                        key: "{href}",
                        class: "nav-link",
                        href: "{href}",
                        onclick: move |evt| {
                            evt.prevent_default();
                            follow(href, false);
                        },
                        "{label}"
                    }
                }
            }

            button {
                class: "mobile-menu-button icon-font",
                "aria-label": "選單",
                "aria-expanded": "{open}",
                onclick: move |_| {
                    menu.write().toggle();
                },
                "{menu().glyph()}"
            }
        }

        div {
            class: if open { "mobile-menu open" } else { "mobile-menu" },
            for (href, label) in NAV_LINKS {
                a {
                    key: "{href}",
                    class: "mobile-menu-link",
                    href: "{href}",
                    onclick: move |evt| {
                        evt.prevent_default();
                        follow(href, true);
                    },
                    "{label}"
                }
            }
        }
    }
}
