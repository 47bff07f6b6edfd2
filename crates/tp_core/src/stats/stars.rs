//! Star rating
//!
//! Percent-of-ideal condensed to a 1–5-star level for dashboard badges.

/// Convert a percent-of-ideal score (0–100) to 1–5 stars.
pub fn percent_to_stars(pct: f64) -> u8 {
    if pct >= 80.0 {
        5
    } else if pct >= 65.0 {
        4
    } else if pct >= 50.0 {
        3
    } else if pct >= 35.0 {
        2
    } else {
        1
    }
}

/// Render `n` filled stars out of five, e.g. `★★★☆☆`.
pub fn render_stars(n: u8) -> String {
    let n = n.min(5) as usize;
    format!("{}{}", "★".repeat(n), "☆".repeat(5 - n))
}

/// Italian level label for a star count.
pub fn star_label(n: u8) -> &'static str {
    match n {
        1 => "Iniziale",
        2 => "Base",
        3 => "Intermedio",
        4 => "Avanzato",
        _ => "Eccellente",
    }
}
