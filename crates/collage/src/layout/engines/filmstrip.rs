use collage_core::placement::Placement;

use super::Engine;
use crate::layout::{Item, LayoutParams, Lcg};

/// Overlapping square frames along the canvas diagonal.
///
/// A single tilt between -20 and 20 degrees is drawn for the whole strip.
/// The strip is as long as the canvas diagonal and centered on the canvas;
/// consecutive frames overlap by 30% of their size. Spacing is ignored.
pub struct Filmstrip;

impl Filmstrip {
    const MAX_TILT: f64 = 20.0;
    const OVERLAP: f64 = 0.3;
}

impl Engine for Filmstrip {
    fn calculate(
        &self,
        items: &[Item],
        params: &LayoutParams,
        rng: &mut Lcg,
    ) -> Vec<Option<Placement>> {
        let canvas = params.canvas();
        let tilt = rng.next_f64() * (2.0 * Self::MAX_TILT) - Self::MAX_TILT;
        let (sin, cos) = tilt.to_radians().sin_cos();

        let strip_length = canvas.diagonal();
        let item_size = strip_length / (items.len() as f64 * 0.8);
        let step = item_size - item_size * Self::OVERLAP;

        let start_x = canvas.width() / 2.0 - (strip_length / 2.0) * cos;
        let start_y = canvas.height() / 2.0 - (strip_length / 2.0) * sin;

        (0..items.len())
            .map(|i| {
                let distance = i as f64 * step;
                Some(
                    Placement::new(
                        start_x + distance * cos - item_size / 2.0,
                        start_y + distance * sin - item_size / 2.0,
                        item_size,
                        item_size,
                    )
                    .with_rotation(tilt),
                )
            })
            .collect()
    }
}
