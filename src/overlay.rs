//! Transient suggestion overlay
//!
//! The dropdown list shown below the entry field while matches exist.

mod overlay_render;
mod overlay_state;

pub use overlay_render::{render_popup, row_at};
pub use overlay_state::OverlayState;
