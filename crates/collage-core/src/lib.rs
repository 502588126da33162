//! Collage Core Types and Definitions
//!
//! This crate provides the foundational types shared by the collage layout
//! engine, its renderers, and the CLI. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Placement**: Layout output rectangles ([`placement::Placement`])
//! - **Transform**: Per-image pan/zoom/rotation ([`transform::ImageTransform`])

pub mod color;
pub mod geometry;
pub mod placement;
pub mod transform;
