//! Layout engine for placing images on the collage canvas.
//!
//! This module maps an ordered set of images, described only by their
//! intrinsic dimensions, onto placement rectangles inside a canvas. Every
//! variant is a pure function of its inputs: randomized variants draw from a
//! [`Lcg`] seeded with the item count, so the same inputs always produce the
//! same arrangement.
//!
//! # Pipeline Position
//!
//! ```text
//! Project (images + settings)
//!     ↓ canvas framing
//! LayoutParams
//!     ↓ layout (this module)
//! Arrangement
//!     ↓ per-image transforms + export
//! Output
//! ```
//!
//! # Submodules
//!
//! - [`rng`] - Deterministic linear congruential generator
//! - [`variant`] - The closed set of layout variants and their wire names

mod engines;
pub mod rng;
pub mod variant;

use log::{debug, trace, warn};
use serde::Serialize;

use collage_core::{geometry::Size, placement::Placement};

pub use rng::Lcg;
pub use variant::LayoutVariant;

/// Intrinsic dimensions of one source image.
///
/// Items are identified by their position in the input sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    width: f64,
    height: f64,
}

impl Item {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Width divided by height.
    ///
    /// Degenerate dimensions (zero, negative or non-finite) count as square.
    pub fn aspect_ratio(&self) -> f64 {
        if self.is_degenerate() {
            1.0
        } else {
            self.width / self.height
        }
    }

    /// Height divided by width, with the same fallback as [`Self::aspect_ratio`].
    pub fn inverse_aspect_ratio(&self) -> f64 {
        if self.is_degenerate() {
            1.0
        } else {
            self.height / self.width
        }
    }

    fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

/// Inputs shared by every layout variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    variant: LayoutVariant,
    canvas: Size,
    spacing: f64,
}

impl LayoutParams {
    /// Creates layout parameters.
    ///
    /// `canvas` is the usable drawing area, already reduced by any border.
    /// Negative or NaN spacing is replaced with 0.
    pub fn new(variant: LayoutVariant, canvas: Size, spacing: f64) -> Self {
        let spacing = if spacing.is_finite() && spacing > 0.0 {
            spacing
        } else {
            0.0
        };
        Self {
            variant,
            canvas,
            spacing,
        }
    }

    pub fn variant(&self) -> LayoutVariant {
        self.variant
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Returns a copy with a different variant.
    pub fn with_variant(mut self, variant: LayoutVariant) -> Self {
        self.variant = variant;
        self
    }

    fn has_valid_canvas(&self) -> bool {
        self.canvas.is_positive()
    }
}

/// Result of one layout pass.
///
/// Holds one slot per input item, in input order. Rejection-sampling variants
/// (`heart`, `circlepack`) leave a slot empty when an item's attempts ran out.
/// [`Arrangement::slots`] keeps that index correspondence for consumers that
/// pair placements with images; [`Arrangement::placements`] is the compacted
/// view and [`Arrangement::unplaced`] counts the empty slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Arrangement {
    #[serde(skip)]
    slots: Vec<Option<Placement>>,
    placements: Vec<Placement>,
    unplaced: usize,
}

impl Arrangement {
    fn from_slots(slots: Vec<Option<Placement>>) -> Self {
        let placements: Vec<Placement> = slots.iter().flatten().copied().collect();
        let unplaced = slots.len() - placements.len();
        Self {
            slots,
            placements,
            unplaced,
        }
    }

    fn all_unplaced(count: usize) -> Self {
        Self {
            slots: vec![None; count],
            placements: Vec::new(),
            unplaced: count,
        }
    }

    /// One entry per input item; `None` marks an item that was not placed.
    pub fn slots(&self) -> &[Option<Placement>] {
        &self.slots
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of input items that received no placement.
    pub fn unplaced(&self) -> usize {
        self.unplaced
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Placement> {
        self.placements.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }
}

/// Computes an arrangement for `items` with the given parameters.
///
/// The call is total: an empty input yields an empty arrangement, and an
/// invalid canvas (zero, negative, or non-finite) yields an empty arrangement
/// with every item counted as unplaced.
///
/// # Examples
///
/// ```
/// use collage::layout::{arrange, Item, LayoutParams, LayoutVariant};
/// use collage_core::geometry::Size;
///
/// let items = [Item::new(800.0, 600.0); 4];
/// let params = LayoutParams::new(LayoutVariant::Grid, Size::new(200.0, 100.0), 0.0);
/// let arrangement = arrange(&items, &params);
///
/// assert_eq!(arrangement.len(), 4);
/// assert_eq!(arrangement.placements()[3].x(), 100.0);
/// ```
pub fn arrange(items: &[Item], params: &LayoutParams) -> Arrangement {
    if items.is_empty() {
        return Arrangement::default();
    }

    if !params.has_valid_canvas() {
        warn!(
            variant:% = params.variant(),
            width = params.canvas().width(),
            height = params.canvas().height();
            "Invalid canvas, nothing placed"
        );
        return Arrangement::all_unplaced(items.len());
    }

    let mut rng = Lcg::for_item_count(items.len());
    let slots = params.variant().engine().calculate(items, params, &mut rng);
    let arrangement = Arrangement::from_slots(slots);

    debug!(
        variant:% = params.variant(),
        placed = arrangement.len(),
        unplaced = arrangement.unplaced();
        "Layout calculated"
    );
    trace!(arrangement:?; "Arrangement");

    arrangement
}
