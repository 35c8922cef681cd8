//! Combat resolution - Run one hit through a weak point set

mod resolution;
mod result;

pub use resolution::{resolve_weakpoint_hit, resolve_weakpoint_hit_with_rng};
pub use result::WeakpointHitResult;
