pub mod alpha_bleed;
pub mod bounds;
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod icon;
pub mod lockfile;
pub mod mask;
pub mod plan;
pub mod settings;
pub mod stencil;

pub use bounds::{crop_to, detect_content_bounds, BoundingBox};
pub use classify::{classify_pixel, Coverage};
pub use error::{StencilError, StencilResult};
pub use mask::apply_circular_mask;
pub use settings::{EdgeMode, ResizeFilter, StencilConfig, TargetSize};
pub use stencil::{generate, render};
