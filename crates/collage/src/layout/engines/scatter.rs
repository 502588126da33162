//! Seeded scatter arrangements.
//!
//! Values are drawn from the generator in a fixed order per image so that a
//! given item count always produces the same scatter.

use collage_core::placement::Placement;

use super::Engine;
use crate::layout::{Item, LayoutParams, Lcg};

/// Rectangles of random size and position, each between a fifth and a little
/// over half of the canvas per axis.
pub struct Random;

impl Engine for Random {
    fn calculate(
        &self,
        items: &[Item],
        params: &LayoutParams,
        rng: &mut Lcg,
    ) -> Vec<Option<Placement>> {
        let canvas = params.canvas();
        let (canvas_width, canvas_height) = (canvas.width(), canvas.height());

        items
            .iter()
            .map(|_| {
                let width = rng.next_f64() * (canvas_width / 3.0) + canvas_width / 5.0;
                let height = rng.next_f64() * (canvas_height / 3.0) + canvas_height / 5.0;
                let x = rng.next_f64() * (canvas_width - width);
                let y = rng.next_f64() * (canvas_height - height);
                Some(Placement::new(x, y, width, height))
            })
            .collect()
    }
}

/// Square snapshots tilted by up to 15 degrees either way.
pub struct Polaroid;

impl Polaroid {
    const MAX_TILT: f64 = 15.0;
}

impl Engine for Polaroid {
    fn calculate(
        &self,
        items: &[Item],
        params: &LayoutParams,
        rng: &mut Lcg,
    ) -> Vec<Option<Placement>> {
        let canvas = params.canvas();
        let min_side = canvas.min_side();

        items
            .iter()
            .map(|_| {
                let size = min_side * (rng.next_f64() * 0.2 + 0.25);
                let x = rng.next_f64() * (canvas.width() - size);
                let y = rng.next_f64() * (canvas.height() - size);
                let rotation = rng.next_f64() * (2.0 * Self::MAX_TILT) - Self::MAX_TILT;
                Some(Placement::new(x, y, size, size).with_rotation(rotation))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use collage_core::geometry::Size;

    use super::*;
    use crate::layout::LayoutVariant;

    fn run(engine: &dyn Engine, count: usize, canvas: Size) -> Vec<Placement> {
        let items = vec![Item::new(800.0, 600.0); count];
        let params = LayoutParams::new(LayoutVariant::Random, canvas, 0.0);
        engine
            .calculate(&items, &params, &mut Lcg::for_item_count(count))
            .into_iter()
            .flatten()
            .collect()
    }

    #[test]
    fn test_random_stays_inside_canvas() {
        let canvas = Size::new(900.0, 600.0);
        for placement in run(&Random, 10, canvas) {
            assert!(placement.width() >= canvas.width() / 5.0);
            assert!(placement.width() <= canvas.width() / 5.0 + canvas.width() / 3.0);
            assert!(placement.x() >= 0.0);
            assert!(placement.y() >= 0.0);
            assert!(placement.x() + placement.width() <= canvas.width());
            assert!(placement.y() + placement.height() <= canvas.height());
            assert_eq!(placement.rotation(), None);
        }
    }

    #[test]
    fn test_random_follows_draw_order() {
        let canvas = Size::new(300.0, 300.0);
        let mut rng = Lcg::for_item_count(1);
        let width = rng.next_f64() * 100.0 + 60.0;
        let height = rng.next_f64() * 100.0 + 60.0;
        let x = rng.next_f64() * (300.0 - width);
        let y = rng.next_f64() * (300.0 - height);

        let placements = run(&Random, 1, canvas);
        assert_eq!(placements, vec![Placement::new(x, y, width, height)]);
    }

    #[test]
    fn test_polaroid_squares_with_tilt() {
        let canvas = Size::new(1000.0, 800.0);
        for placement in run(&Polaroid, 8, canvas) {
            assert_eq!(placement.width(), placement.height());
            assert!(placement.width() >= 800.0 * 0.25);
            assert!(placement.width() <= 800.0 * 0.45);
            let rotation = placement.rotation().unwrap();
            assert!((-15.0..15.0).contains(&rotation));
        }
    }
}
