use std::cmp::Ordering;

use crate::models::Car;

/// Orders cars by popularity: rating count descending, then average rating
/// descending with unrated cars last, then id ascending as a stable final
/// tie-break.
pub fn rank(cars: &mut [Car]) {
    cars.sort_by(|a, b| {
        b.total_rates
            .cmp(&a.total_rates)
            .then_with(|| cmp_avg(b.avg_rating, a.avg_rating))
            .then_with(|| a.id.cmp(&b.id))
    });
}

fn cmp_avg(a: Option<f64>, b: Option<f64>) -> Ordering {
    let a = a.unwrap_or(f64::NEG_INFINITY);
    let b = b.unwrap_or(f64::NEG_INFINITY);
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
