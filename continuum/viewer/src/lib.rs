#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

pub mod colormap;
pub mod config;
pub mod export;
pub mod overlay;
pub mod pixel_map;
pub mod raster;
