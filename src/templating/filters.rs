//! Custom Tera filters for business pages.

use std::collections::HashMap;

/// `{{ rating | stars }}` renders a 0-5 rating as five filled or empty stars.
///
/// Ratings are rounded to the nearest whole star and clamped to 0..=5.
pub fn create_stars_filter() -> impl tera::Filter + 'static {
    |value: &tera::Value, _args: &HashMap<String, tera::Value>| -> tera::Result<tera::Value> {
        let rating = value
            .as_f64()
            .ok_or_else(|| tera::Error::msg("stars filter requires a numeric rating"))?;
        Ok(tera::Value::String(stars(rating)))
    }
}

fn stars(rating: f64) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
