//! Continuum engine: metric grids, marker placement, footprint averaging and
//! the pointer interaction state machine. Rendering lives in the viewer crate.
#![deny(missing_docs)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

pub mod aggregate;
pub mod board;
pub mod geometry;
pub mod grid;
pub mod interaction;
pub mod marker;
pub mod resize;
pub mod store;

pub use continuum_field::{NormRect, NormalizedPoint};
