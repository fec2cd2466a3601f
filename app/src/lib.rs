//! Stipple renderer: redraws an image as weighted random dots.

pub mod bootstrap;
pub mod config;
pub mod render;

pub use bootstrap::init_config;
pub use render::{RenderSummary, render};
