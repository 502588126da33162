use log::trace;

use collage_core::{
    geometry::{Point, Size},
    placement::Placement,
};

use super::Engine;
use crate::layout::{Item, LayoutParams, Lcg};

/// Sampling attempts per image before it is skipped.
const MAX_ATTEMPTS: usize = 100;

/// Random squares whose centers fall inside a heart curve.
///
/// Centers are rejection-sampled from a box 1.2 times the short canvas side
/// and accepted when `(x² + y² - 1)³ - x²y³ < 0`, with coordinates
/// normalized by 0.45 times the short side. The curve uses canvas (y-down)
/// coordinates. Images whose attempts run out get no placement.
pub struct Heart;

impl Heart {
    /// Maps a canvas point into curve space around `center`.
    fn normalize(point: Point, center: Point, scale: f64) -> Point {
        Point::new(
            (point.x() - center.x()) / scale,
            (point.y() - center.y()) / scale,
        )
    }

    fn contains(point: Point) -> bool {
        let (x, y) = (point.x(), point.y());
        (x.powi(2) + y.powi(2) - 1.0).powi(3) - x.powi(2) * y.powi(3) < 0.0
    }
}

impl Engine for Heart {
    fn calculate(
        &self,
        items: &[Item],
        params: &LayoutParams,
        rng: &mut Lcg,
    ) -> Vec<Option<Placement>> {
        let canvas = params.canvas();
        let min_side = canvas.min_side();
        let center = Point::new(canvas.width() / 2.0, canvas.height() / 2.0);
        let scale = min_side * 0.45;

        items
            .iter()
            .enumerate()
            .map(|(index, _)| {
                let size = min_side * (rng.next_f64() * 0.15 + 0.1);

                let placement = (0..MAX_ATTEMPTS).find_map(|_| {
                    let candidate = Point::new(
                        (rng.next_f64() - 0.5) * min_side * 1.2 + center.x(),
                        (rng.next_f64() - 0.5) * min_side * 1.2 + center.y(),
                    );
                    Self::contains(Self::normalize(candidate, center, scale))
                        .then(|| Placement::centered(candidate, Size::new(size, size)))
                });

                if placement.is_none() {
                    trace!(index; "Heart attempts exhausted");
                }
                placement
            })
            .collect()
    }
}
