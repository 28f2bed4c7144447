//! Concentrated-liquidity depth engine.
//!
//! Turns sparse per-pool tick snapshots into a dense, price-centered bucket
//! profile with token and USD breakdowns ([`depth`]), and paints that
//! profile as pixel-aligned bars on any [`render::Canvas`].

pub mod depth;
pub mod math;
pub mod model;
pub mod render;
pub mod schema;
pub mod validate;

#[cfg(feature = "wasm")]
pub mod wasm;
