use collage_core::{
    geometry::{Point, Size},
    placement::Placement,
};

use super::{Engine, cell_extent};
use crate::layout::{Item, LayoutParams, Lcg};

/// Uniform cells in row-major order.
///
/// The column count follows the canvas aspect ratio,
/// `cols = ceil(sqrt(n * W / H))`, so cells stay close to square.
pub struct Grid;

impl Engine for Grid {
    fn calculate(
        &self,
        items: &[Item],
        params: &LayoutParams,
        _rng: &mut Lcg,
    ) -> Vec<Option<Placement>> {
        let canvas = params.canvas();
        let count = items.len();
        let cols = ((count as f64 * canvas.aspect_ratio()).sqrt().ceil() as usize).max(1);

        cells(count, cols, Point::default(), canvas, params.spacing())
            .into_iter()
            .map(Some)
            .collect()
    }
}

/// Lays out `count` uniform cells `cols` wide inside the area starting at
/// `origin` with size `area`.
pub(super) fn cells(
    count: usize,
    cols: usize,
    origin: Point,
    area: Size,
    spacing: f64,
) -> Vec<Placement> {
    let cols = cols.max(1);
    let rows = count.div_ceil(cols).max(1);
    let cell_width = cell_extent(area.width(), cols, spacing);
    let cell_height = cell_extent(area.height(), rows, spacing);

    (0..count)
        .map(|i| {
            let row = (i / cols) as f64;
            let col = (i % cols) as f64;
            Placement::new(
                origin.x() + col * (cell_width + spacing),
                origin.y() + row * (cell_height + spacing),
                cell_width,
                cell_height,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutVariant;

    fn run(count: usize, canvas: Size, spacing: f64) -> Vec<Placement> {
        let items = vec![Item::new(640.0, 480.0); count];
        let params = LayoutParams::new(LayoutVariant::Grid, canvas, spacing);
        Grid.calculate(&items, &params, &mut Lcg::for_item_count(count))
            .into_iter()
            .flatten()
            .collect()
    }

    #[test]
    fn test_four_items_tile_canvas() {
        let placements = run(4, Size::new(200.0, 100.0), 0.0);
        assert_eq!(
            placements,
            vec![
                Placement::new(0.0, 0.0, 100.0, 50.0),
                Placement::new(100.0, 0.0, 100.0, 50.0),
                Placement::new(0.0, 50.0, 100.0, 50.0),
                Placement::new(100.0, 50.0, 100.0, 50.0),
            ]
        );
    }

    #[test]
    fn test_spacing_between_cells() {
        // cols = ceil(sqrt(2 * 2)) = 2, rows = 1
        let placements = run(2, Size::new(200.0, 100.0), 10.0);
        assert_eq!(placements[0], Placement::new(0.0, 0.0, 95.0, 100.0));
        assert_eq!(placements[1], Placement::new(105.0, 0.0, 95.0, 100.0));
    }

    #[test]
    fn test_single_item_fills_canvas() {
        let placements = run(1, Size::new(200.0, 200.0), 25.0);
        assert_eq!(placements, vec![Placement::new(0.0, 0.0, 200.0, 200.0)]);
    }

    #[test]
    fn test_oversized_spacing_clamps_cells() {
        let placements = run(9, Size::new(30.0, 30.0), 100.0);
        assert_eq!(placements.len(), 9);
        assert!(placements
            .iter()
            .all(|p| p.width() == 0.0 && p.height() == 0.0));
    }
}
