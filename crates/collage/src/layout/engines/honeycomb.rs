use collage_core::placement::Placement;

use super::Engine;
use crate::layout::{Item, LayoutParams, Lcg};

/// Walk order around a hex ring, starting from `(k, 0)`.
const RING_DIRECTIONS: [(i32, i32); 6] = [(-1, 1), (-1, 0), (0, -1), (1, -1), (1, 0), (0, 1)];

/// Height of a hexagon's drawn box relative to its full height.
const BOX_HEIGHT_FACTOR: f64 = 0.866;

/// Hexagonal cells in rings around the canvas center.
///
/// Cells are sized so that `n` hexagons cover the canvas area, then
/// enumerated in axial coordinates: the center cell, then ring 1 (6 cells),
/// ring 2 (12 cells), and so on.
pub struct Honeycomb;

impl Engine for Honeycomb {
    fn calculate(
        &self,
        items: &[Item],
        params: &LayoutParams,
        _rng: &mut Lcg,
    ) -> Vec<Option<Placement>> {
        let canvas = params.canvas();
        let spacing = params.spacing();
        let sqrt3 = 3.0_f64.sqrt();

        let area_per_hex = canvas.width() * canvas.height() / items.len() as f64;
        let hex_height = (area_per_hex * 4.0 / (3.0 * sqrt3)).sqrt();
        let hex_width = sqrt3 / 2.0 * hex_height;

        ring_coordinates(items.len())
            .into_iter()
            .map(|(q, r)| {
                let (q, r) = (f64::from(q), f64::from(r));
                let x = (hex_width + spacing) * (q + r / 2.0);
                let y = (hex_height * 0.75 + spacing) * r;
                Some(Placement::new(
                    x + canvas.width() / 2.0 - hex_width / 2.0,
                    y + canvas.height() / 2.0 - hex_height * 0.75 / 2.0,
                    hex_width,
                    hex_height * BOX_HEIGHT_FACTOR,
                ))
            })
            .collect()
    }
}

/// First `count` axial coordinates in ring order.
///
/// Ring `k` starts at `(k, 0)` and walks six sides of `k` steps, so it holds
/// exactly `6k` distinct cells, all at hex distance `k` from the origin.
pub(crate) fn ring_coordinates(count: usize) -> Vec<(i32, i32)> {
    let mut coordinates = Vec::with_capacity(count);
    if count == 0 {
        return coordinates;
    }
    coordinates.push((0, 0));

    let mut ring = 1;
    while coordinates.len() < count {
        let (mut q, mut r) = (ring, 0);
        'ring: for (dq, dr) in RING_DIRECTIONS {
            for _ in 0..ring {
                if coordinates.len() == count {
                    break 'ring;
                }
                coordinates.push((q, r));
                q += dq;
                r += dr;
            }
        }
        ring += 1;
    }

    coordinates
}
