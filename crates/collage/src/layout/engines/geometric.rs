use collage_core::{
    geometry::{Point, Size},
    placement::Placement,
};

use super::{Engine, grid};
use crate::layout::{Item, LayoutParams, Lcg};

/// Share of the canvas width taken by the hero image.
const HERO_SHARE: f64 = 0.6;
/// Share of the canvas width left for the side grid.
const GRID_SHARE: f64 = 0.4;

/// Fixed compositions by image count.
///
/// - 1: the full canvas
/// - 2: two vertical halves
/// - 3: left half, right half split top and bottom
/// - 4: the regular grid
/// - 5+: a hero image over the left 60%, the rest in a square-ish grid on
///   the right
pub struct Geometric;

impl Engine for Geometric {
    fn calculate(
        &self,
        items: &[Item],
        params: &LayoutParams,
        rng: &mut Lcg,
    ) -> Vec<Option<Placement>> {
        let canvas = params.canvas();
        let (w, h, s) = (canvas.width(), canvas.height(), params.spacing());
        let half_width = (w / 2.0 - s / 2.0).max(0.0);
        let half_height = (h / 2.0 - s / 2.0).max(0.0);

        let placements = match items.len() {
            1 => vec![Placement::new(0.0, 0.0, w, h)],
            2 => vec![
                Placement::new(0.0, 0.0, half_width, h),
                Placement::new(w / 2.0 + s / 2.0, 0.0, half_width, h),
            ],
            3 => vec![
                Placement::new(0.0, 0.0, half_width, h),
                Placement::new(w / 2.0 + s / 2.0, 0.0, half_width, half_height),
                Placement::new(w / 2.0 + s / 2.0, h / 2.0 + s / 2.0, half_width, half_height),
            ],
            4 => return grid::Grid.calculate(items, params, rng),
            count => {
                let hero = Placement::new(0.0, 0.0, (w * HERO_SHARE - s / 2.0).max(0.0), h);
                let rest = count - 1;
                let cols = (rest as f64).sqrt().ceil() as usize;
                let origin = Point::new(w * HERO_SHARE + s / 2.0, 0.0);
                let area = Size::new((w * GRID_SHARE - s / 2.0).max(0.0), h);

                std::iter::once(hero)
                    .chain(grid::cells(rest, cols, origin, area, s))
                    .collect()
            }
        };

        placements.into_iter().map(Some).collect()
    }
}
