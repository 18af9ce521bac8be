//! Formatting helpers shared by the view model and the text renderer.

use crate::domain::CatalogEntry;
use chrono::NaiveDate;

/// Rating with one decimal place.
#[must_use]
pub fn format_rating(rating: f64) -> String {
    if rating.is_finite() {
        format!("{rating:.1}")
    } else {
        "-".to_string()
    }
}

/// Long-form release date (`March 12, 2024`), `Unknown date` when missing.
#[must_use]
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "Unknown date".to_string(), |d| d.format("%B %-d, %Y").to_string())
}

/// Mean rating rounded to one decimal; 0 for an empty slice.
#[must_use]
pub fn average_rating<'a>(entries: impl IntoIterator<Item = &'a CatalogEntry>) -> f64 {
    let (sum, count) = entries
        .into_iter()
        .filter(|e| e.rating_average.is_finite())
        .fold((0.0_f64, 0_u32), |(sum, count), e| (sum + e.rating_average, count + 1));

    if count == 0 {
        return 0.0;
    }
    (sum / f64::from(count) * 10.0).round() / 10.0
}

/// Joins the configured image base URL and a provider poster path.
#[must_use]
pub fn poster_url(base: &str, poster_ref: Option<&str>) -> Option<String> {
    poster_ref.map(|path| {
        let base = base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    })
}

/// Truncates `text` to `max` characters, ending with `...` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
