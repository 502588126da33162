use collage_core::placement::Placement;

use super::{Engine, cell_extent};
use crate::layout::{Item, LayoutParams, Lcg};

/// Minimum canvas width per masonry column.
const COLUMN_WIDTH_HINT: f64 = 250.0;
const MIN_COLUMNS: usize = 2;
const MAX_COLUMNS: usize = 4;

/// Fixed-width columns; each image drops into the currently shortest one.
///
/// Image heights follow their aspect ratio, so the result may extend below
/// the canvas when many tall images are given.
pub struct Masonry;

impl Engine for Masonry {
    fn calculate(
        &self,
        items: &[Item],
        params: &LayoutParams,
        _rng: &mut Lcg,
    ) -> Vec<Option<Placement>> {
        let canvas = params.canvas();
        let spacing = params.spacing();
        let cols = ((canvas.width() / COLUMN_WIDTH_HINT).floor() as usize)
            .clamp(MIN_COLUMNS, MAX_COLUMNS);
        let column_width = cell_extent(canvas.width(), cols, spacing);
        let mut column_heights = vec![0.0_f64; cols];

        items
            .iter()
            .map(|item| {
                let (column, top) = shortest_column(&column_heights);
                let height = item.inverse_aspect_ratio() * column_width;
                column_heights[column] += height + spacing;

                Some(Placement::new(
                    column as f64 * (column_width + spacing),
                    top,
                    column_width,
                    height,
                ))
            })
            .collect()
    }
}

/// Index and height of the shortest column, first index on ties.
fn shortest_column(heights: &[f64]) -> (usize, f64) {
    heights
        .iter()
        .copied()
        .enumerate()
        .fold((0, f64::INFINITY), |best, (index, height)| {
            if height < best.1 { (index, height) } else { best }
        })
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::layout::LayoutVariant;
    use collage_core::geometry::Size;

    fn run(items: &[Item], canvas: Size, spacing: f64) -> Vec<Placement> {
        let params = LayoutParams::new(LayoutVariant::Masonry, canvas, spacing);
        Masonry
            .calculate(items, &params, &mut Lcg::for_item_count(items.len()))
            .into_iter()
            .flatten()
            .collect()
    }

    #[test]
    fn test_column_count_bounds() {
        let items = [Item::new(100.0, 100.0); 8];
        // floor(300 / 250) = 1 -> 2 columns
        let narrow = run(&items, Size::new(300.0, 800.0), 0.0);
        assert_eq!(narrow[0].width(), 150.0);
        // floor(2000 / 250) = 8 -> 4 columns
        let wide = run(&items, Size::new(2000.0, 800.0), 0.0);
        assert_eq!(wide[0].width(), 500.0);
    }

    #[test]
    fn test_fills_shortest_column() {
        let items = [
            Item::new(100.0, 200.0),
            Item::new(100.0, 50.0),
            Item::new(100.0, 100.0),
        ];
        // 2 columns of width 100
        let placements = run(&items, Size::new(210.0, 600.0), 10.0);
        assert_eq!(placements[0], Placement::new(0.0, 0.0, 100.0, 200.0));
        assert_eq!(placements[1], Placement::new(110.0, 0.0, 100.0, 50.0));
        // Column 1 is shorter (60 < 210)
        assert_eq!(placements[2], Placement::new(110.0, 60.0, 100.0, 100.0));
    }

    #[test]
    fn test_column_growth_is_bounded() {
        let items = [Item::new(500.0, 500.0); 6];
        let spacing = 10.0;
        let placements = run(&items, Size::new(800.0, 600.0), spacing);

        // floor(800 / 250) = 3 columns of (800 - 2 * 10) / 3 = 260
        let column_width = 260.0;
        let mut column_heights = [0.0_f64; 3];
        for placement in &placements {
            assert_approx_eq!(f64, placement.width(), column_width);
            assert_approx_eq!(f64, placement.height(), column_width);

            let column = (placement.x() / (column_width + spacing)).round() as usize;
            assert_approx_eq!(f64, placement.y(), column_heights[column]);
            column_heights[column] = placement.y() + placement.height() + spacing;

            let tallest = column_heights.iter().copied().fold(f64::MIN, f64::max);
            let shortest = column_heights.iter().copied().fold(f64::MAX, f64::min);
            assert!(tallest - shortest <= placement.height() + spacing + 1e-9);
        }

        let origins: Vec<(f64, f64)> = placements.iter().map(|p| (p.x(), p.y())).collect();
        assert_eq!(
            origins,
            vec![
                (0.0, 0.0),
                (270.0, 0.0),
                (540.0, 0.0),
                (0.0, 270.0),
                (270.0, 270.0),
                (540.0, 270.0),
            ]
        );
    }

    #[test]
    fn test_shortest_column_prefers_first_on_tie() {
        assert_eq!(shortest_column(&[5.0, 5.0, 5.0]), (0, 5.0));
        assert_eq!(shortest_column(&[5.0, 2.0, 2.0]), (1, 2.0));
    }
}
