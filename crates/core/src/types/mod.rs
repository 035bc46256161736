//! Value types shared across the workspace.

pub mod email;
pub mod id;
