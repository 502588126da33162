//! Single-line arrangements: one row per image or one column per image.

use collage_core::placement::Placement;

use super::{Engine, cell_extent};
use crate::layout::{Item, LayoutParams, Lcg};

/// Stacks images top to bottom, each in a full-width row of equal height,
/// horizontally centered at its natural aspect ratio.
pub struct Rows;

impl Engine for Rows {
    fn calculate(
        &self,
        items: &[Item],
        params: &LayoutParams,
        _rng: &mut Lcg,
    ) -> Vec<Option<Placement>> {
        let canvas = params.canvas();
        let spacing = params.spacing();
        let row_height = cell_extent(canvas.height(), items.len(), spacing);

        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let width = row_height * item.aspect_ratio();
                Some(Placement::new(
                    (canvas.width() - width) / 2.0,
                    i as f64 * (row_height + spacing),
                    width,
                    row_height,
                ))
            })
            .collect()
    }
}

/// The transpose of [`Rows`]: equal-width columns left to right, each image
/// vertically centered.
pub struct Columns;

impl Engine for Columns {
    fn calculate(
        &self,
        items: &[Item],
        params: &LayoutParams,
        _rng: &mut Lcg,
    ) -> Vec<Option<Placement>> {
        let canvas = params.canvas();
        let spacing = params.spacing();
        let column_width = cell_extent(canvas.width(), items.len(), spacing);

        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let height = column_width * item.inverse_aspect_ratio();
                Some(Placement::new(
                    i as f64 * (column_width + spacing),
                    (canvas.height() - height) / 2.0,
                    column_width,
                    height,
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use collage_core::geometry::Size;

    use super::*;
    use crate::layout::LayoutVariant;

    fn run(engine: &dyn Engine, items: &[Item], canvas: Size, spacing: f64) -> Vec<Placement> {
        let params = LayoutParams::new(LayoutVariant::Rows, canvas, spacing);
        engine
            .calculate(items, &params, &mut Lcg::for_item_count(items.len()))
            .into_iter()
            .flatten()
            .collect()
    }

    #[test]
    fn test_rows_centers_image() {
        let placements = run(&Rows, &[Item::new(200.0, 100.0)], Size::new(400.0, 50.0), 0.0);
        assert_eq!(placements, vec![Placement::new(150.0, 0.0, 100.0, 50.0)]);
    }

    #[test]
    fn test_rows_stack_with_spacing() {
        let items = [Item::new(100.0, 100.0), Item::new(300.0, 100.0)];
        let placements = run(&Rows, &items, Size::new(400.0, 210.0), 10.0);
        assert_eq!(placements[0], Placement::new(150.0, 0.0, 100.0, 100.0));
        assert_eq!(placements[1], Placement::new(50.0, 110.0, 300.0, 100.0));
    }

    #[test]
    fn test_columns_centers_image() {
        let placements = run(&Columns, &[Item::new(100.0, 200.0)], Size::new(50.0, 400.0), 0.0);
        assert_eq!(placements, vec![Placement::new(0.0, 150.0, 50.0, 100.0)]);
    }

    #[test]
    fn test_columns_advance_with_spacing() {
        let items = [Item::new(100.0, 100.0); 3];
        let placements = run(&Columns, &items, Size::new(320.0, 300.0), 10.0);
        let xs: Vec<f64> = placements.iter().map(|p| p.x()).collect();
        assert_eq!(xs, vec![0.0, 110.0, 220.0]);
        assert!(placements.iter().all(|p| p.y() == 100.0));
    }
}
