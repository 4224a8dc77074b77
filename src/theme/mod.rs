//! Theme for Habit Gallery.

mod styles;

pub use styles::GLOBAL_STYLES;
