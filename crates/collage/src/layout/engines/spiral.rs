use std::f64::consts::PI;

use collage_core::{
    geometry::{Point, Size},
    placement::Placement,
};

use super::Engine;
use crate::layout::{Item, LayoutParams, Lcg};

/// Radius of the spiral at angle zero.
const INNER_RADIUS: f64 = 10.0;
/// Smallest square edge.
const MIN_SIZE: f64 = 40.0;

/// Squares on a spiral winding out from the canvas center, shrinking with
/// their index.
pub struct Spiral;

impl Engine for Spiral {
    fn calculate(
        &self,
        items: &[Item],
        params: &LayoutParams,
        _rng: &mut Lcg,
    ) -> Vec<Option<Placement>> {
        let canvas = params.canvas();
        let min_side = canvas.min_side();
        let center = Point::new(canvas.width() / 2.0, canvas.height() / 2.0);
        let growth = min_side / (2.0 * PI * (items.len() as f64 + 2.0).ln());

        (0..items.len())
            .map(|i| {
                let angle = 2.8 * (i as f64 + 2.0).ln();
                let radius = INNER_RADIUS + growth * angle;
                let size = MIN_SIZE.max(min_side / (i as f64 + 1.0).sqrt() * 0.3);
                let (sin, cos) = angle.sin_cos();
                let point = Point::new(center.x() + radius * cos, center.y() + radius * sin);
                Some(Placement::centered(point, Size::new(size, size)))
            })
            .collect()
    }
}
