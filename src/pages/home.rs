//! Single-page layout: hero, gallery, upload form and the detail dialog.

use dioxus::prelude::*;

use crate::components::{
    GalleryGrid, HeroSlideshow, Mascot, NavHeader, ParticlesBackground, UploadForm, WorkModal,
};

#[component]
pub fn Home() -> Element {
    rsx! {
        ParticlesBackground {}
        NavHeader {}

        main { class: "page",
            section { id: "hero", class: "hero",
                div { class: "hero-text",
                    h1 { class: "page-title", "習慣養成畫廊" }
                    p { class: "hero-subtitle",
                        "分享你的習慣計分卡與六格漫畫，看看大家如何一點一滴改變自己。"
                    }
                    a { class: "btn-primary hero-cta", href: "#upload", "分享我的作品" }
                }
                HeroSlideshow {}
                Mascot {}
            }

            section { id: "gallery", class: "gallery-section",
                h2 { class: "section-title", "作品畫廊" }
                GalleryGrid {}
            }

            section { id: "upload", class: "upload-section",
                h2 { class: "section-title", "上傳作品" }
                UploadForm {}
            }
        }

        WorkModal {}
    }
}
