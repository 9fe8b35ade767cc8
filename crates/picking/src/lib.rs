#![warn(missing_docs)]
//! Mouse picking: turn a screen position into a world-space ray and test it
//! against scene meshes.

mod raycaster;

pub use raycaster::{screen_to_ndc, Raycaster};
