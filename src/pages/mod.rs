//! Page components for Habit Gallery.

mod home;

pub use home::Home;
