//! Layout engine implementations.
//!
//! Each variant is a stateless unit struct implementing [`Engine`]. The
//! variant-to-engine mapping lives in [`LayoutVariant`]'s exhaustive match,
//! so adding a variant without an engine does not compile.
//!
//! Engines return one slot per input item. Deterministic variants fill every
//! slot; rejection-sampling variants leave a slot empty when an item could
//! not be placed.
//!
//! [`LayoutVariant`]: super::LayoutVariant

mod circle_pack;
mod filmstrip;
mod geometric;
mod grid;
mod heart;
mod honeycomb;
mod masonry;
mod scatter;
mod spiral;
mod strip;

pub use circle_pack::CirclePack;
pub use filmstrip::Filmstrip;
pub use geometric::Geometric;
pub use grid::Grid;
pub use heart::Heart;
pub use honeycomb::Honeycomb;
pub use masonry::Masonry;
pub use scatter::{Polaroid, Random};
pub use spiral::Spiral;
pub use strip::{Columns, Rows};

use collage_core::placement::Placement;

use super::{Item, LayoutParams, Lcg};

/// Trait implemented by every layout variant.
pub trait Engine: Send + Sync {
    /// Calculate placements for `items` on the canvas described by `params`.
    ///
    /// - `items`: Intrinsic image dimensions, in order. Never empty.
    /// - `params`: Canvas size (strictly positive, finite) and spacing
    ///   (non-negative).
    /// - `rng`: Generator seeded for this call. Deterministic variants leave
    ///   it untouched.
    ///
    /// Returns exactly `items.len()` slots.
    fn calculate(&self, items: &[Item], params: &LayoutParams, rng: &mut Lcg)
    -> Vec<Option<Placement>>;
}

/// Extent of one cell when `count` cells share `available` with `spacing`
/// gaps between them. Clamped at zero when the gaps exceed the space.
fn cell_extent(available: f64, count: usize, spacing: f64) -> f64 {
    let count = count.max(1) as f64;
    ((available - (count - 1.0) * spacing) / count).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_extent() {
        assert_eq!(cell_extent(100.0, 4, 0.0), 25.0);
        assert_eq!(cell_extent(110.0, 2, 10.0), 50.0);
        assert_eq!(cell_extent(10.0, 3, 50.0), 0.0);
        assert_eq!(cell_extent(10.0, 0, 5.0), 10.0);
    }
}
