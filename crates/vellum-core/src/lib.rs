//! Vellum Core Types and Definitions
//!
//! This crate provides the building blocks for hand-authored Vellum
//! diagrams. It includes:
//!
//! - **Geometry**: Points, sizes, insets and bounding boxes ([`geometry`] module)
//! - **Colors**: The closed palette and class vocabulary ([`color`] module)
//! - **Draw**: Visual elements, connectors, markers and text estimation ([`draw`] module)
//! - **Errors**: Construction-time failures ([`DrawError`])

pub mod color;
pub mod draw;
pub mod geometry;

mod error;

pub use error::DrawError;
