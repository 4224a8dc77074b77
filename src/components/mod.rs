//! UI Components for Habit Gallery.

mod gallery_grid;
mod hero_slideshow;
pub mod images;
mod mascot;
mod nav_header;
mod particles_background;
mod upload_form;
mod work_modal;

pub use gallery_grid::GalleryGrid;
pub use hero_slideshow::HeroSlideshow;
pub use mascot::Mascot;
pub use nav_header::NavHeader;
pub use particles_background::ParticlesBackground;
pub use upload_form::UploadForm;
pub use work_modal::WorkModal;
