use log::trace;

use collage_core::{geometry::Point, placement::Placement};

use super::Engine;
use crate::layout::{Item, LayoutParams, Lcg};

/// Sampling attempts per image before it is skipped.
const MAX_ATTEMPTS: usize = 500;

#[derive(Debug, Clone, Copy)]
struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Returns true when the circles are closer than `gap` at any point.
    fn crowds(&self, other: &Circle, gap: f64) -> bool {
        self.center.distance(other.center) < self.radius + other.radius + gap
    }

    fn bounding_square(&self) -> Placement {
        Placement::new(
            self.center.x() - self.radius,
            self.center.y() - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

/// Random non-overlapping circles, each image placed in its circle's
/// bounding square.
///
/// Radii range from 1/15 to 1/3 of the short canvas side. Candidates are
/// rejected while they come within `spacing` of an accepted circle; images
/// whose attempts run out get no placement.
pub struct CirclePack;

impl Engine for CirclePack {
    fn calculate(
        &self,
        items: &[Item],
        params: &LayoutParams,
        rng: &mut Lcg,
    ) -> Vec<Option<Placement>> {
        let canvas = params.canvas();
        let spacing = params.spacing();
        let max_radius = canvas.min_side() / 3.0;
        let min_radius = canvas.min_side() / 15.0;
        let mut accepted: Vec<Circle> = Vec::with_capacity(items.len());

        items
            .iter()
            .enumerate()
            .map(|(index, _)| {
                let circle = (0..MAX_ATTEMPTS).find_map(|_| {
                    let radius = rng.next_f64() * (max_radius - min_radius) + min_radius;
                    let x = rng.next_f64() * (canvas.width() - 2.0 * radius) + radius;
                    let y = rng.next_f64() * (canvas.height() - 2.0 * radius) + radius;
                    let candidate = Circle {
                        center: Point::new(x, y),
                        radius,
                    };

                    (!accepted.iter().any(|c| c.crowds(&candidate, spacing))).then_some(candidate)
                });

                match circle {
                    Some(circle) => {
                        accepted.push(circle);
                        Some(circle.bounding_square())
                    }
                    None => {
                        trace!(index; "Circle pack attempts exhausted");
                        None
                    }
                }
            })
            .collect()
    }
}
