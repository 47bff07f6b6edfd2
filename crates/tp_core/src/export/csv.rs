//! CSV writers
//!
//! Two shapes: a single-session sheet (metadata, stroke stats, area/percent,
//! raw series) and a one-row-per-session history sheet. Every field is
//! quoted, matching the product's existing exports.

use csv::{QuoteStyle, WriterBuilder};
use thiserror::Error;

use crate::models::{SeriesResult, Settings, TestSession};
use crate::stats::{compute_session_results, SessionResults, StrokeName};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

fn writer() -> csv::Writer<Vec<u8>> {
    // Rows have varying widths; quote everything like the original sheets.
    WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new())
}

fn finish(mut wtr: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    wtr.flush()?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| std::io::Error::new(e.error().kind(), e.error().to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

fn series_row(series: &SeriesResult) -> [String; 7] {
    let test = serde_json::to_value(series)
        .ok()
        .and_then(|v| v.get("test_type").and_then(|t| t.as_str()).map(str::to_string))
        .unwrap_or_default();
    let index = (series.series_index() + 1).to_string();
    let score = series.score().to_string();
    let (direction, serve_type, strip, side) = match series {
        SeriesResult::Groundstrokes { direction, .. } => {
            (variant_name(direction), String::new(), String::new(), String::new())
        }
        SeriesResult::Combined { direction, .. } => {
            (variant_name(direction), String::new(), String::new(), String::new())
        }
        SeriesResult::Return { side, .. } => {
            (variant_name(side), String::new(), String::new(), String::new())
        }
        SeriesResult::Serve { serve_type, side, target_strip, .. } => (
            String::new(),
            variant_name(serve_type),
            target_strip.to_string(),
            variant_name(side),
        ),
        SeriesResult::Volley { direction, .. } => {
            (variant_name(direction), String::new(), String::new(), String::new())
        }
    };
    [test, index, score, direction, serve_type, strip, side]
}

/// Wire-format name of a unit enum value ("fh_cross", "prima", …).
fn variant_name<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

/// Full sheet for one session's results.
pub fn session_csv(results: &SessionResults) -> Result<String, ExportError> {
    let session = &results.session;
    let mut wtr = writer();

    wtr.write_record(["Tennis Precision Test — Sessione"])?;
    wtr.write_record(["Giocatore", session.player_name.as_str()])?;
    wtr.write_record(["Data", session.date.to_string().as_str()])?;
    wtr.write_record(["Categoria", session.category.short_label()])?;
    wtr.write_record(["Coach", session.coach.as_str()])?;
    if let Some(dob) = session.date_of_birth {
        wtr.write_record(["Data di Nascita", dob.to_string().as_str()])?;
    }
    if let Some(note) = &session.note {
        wtr.write_record(["Nota", note.as_str()])?;
    }
    wtr.write_record([""])?;

    wtr.write_record(["Stroke", "Label", "Ave", "Dev", "N Serie"])?;
    for s in &results.stats {
        wtr.write_record([
            variant_name(&s.stroke),
            s.label.clone(),
            format!("{:.3}", s.ave),
            format!("{:.3}", s.dev),
            s.scores.len().to_string(),
        ])?;
    }
    wtr.write_record([""])?;

    wtr.write_record(["Area Radar", format!("{:.3}", results.radar_area).as_str()])?;
    wtr.write_record(["% Ideale", format!("{:.2}%", results.percent_of_ideal).as_str()])?;
    wtr.write_record([""])?;

    wtr.write_record(["Test", "Serie", "Score", "Direzione", "Tipo Servizio", "Striscia", "Lato"])?;
    for series in &session.series {
        wtr.write_record(series_row(series))?;
    }

    finish(wtr)
}

/// One-row-per-session history sheet with per-stroke aggregates.
pub fn history_csv(sessions: &[TestSession], settings: &Settings) -> Result<String, ExportError> {
    let mut wtr = writer();
    wtr.write_record([
        "Giocatore",
        "Data",
        "Categoria",
        "Coach",
        "DataNascita",
        "Nota",
        "Serve_Ave",
        "Serve_Dev",
        "FH_Ave",
        "FH_Dev",
        "Combined_Ave",
        "Combined_Dev",
        "Return_Ave",
        "Return_Dev",
        "BH_Ave",
        "BH_Dev",
        "Volley_Ave",
        "Volley_Dev",
        "Area",
        "%Ideale",
    ])?;

    // History column order differs from the radar axis order.
    const COLUMN_ORDER: [StrokeName; 6] = [
        StrokeName::Serve,
        StrokeName::Forehand,
        StrokeName::Combined,
        StrokeName::Return,
        StrokeName::Backhand,
        StrokeName::Volley,
    ];

    for session in sessions {
        let r = compute_session_results(
            session,
            settings.std_dev_mode,
            settings.precision_time_strategy,
        );
        let mut record: Vec<String> = vec![
            session.player_name.clone(),
            session.date.to_string(),
            session.category.short_label().to_string(),
            session.coach.clone(),
            session.date_of_birth.map(|d| d.to_string()).unwrap_or_default(),
            session.note.clone().unwrap_or_default(),
        ];
        for stroke in COLUMN_ORDER {
            let stat = r.stats.iter().find(|s| s.stroke == stroke);
            record.push(stat.map(|s| format!("{:.3}", s.ave)).unwrap_or_default());
            record.push(stat.map(|s| format!("{:.3}", s.dev)).unwrap_or_default());
        }
        record.push(format!("{:.3}", r.radar_area));
        record.push(format!("{:.2}%", r.percent_of_ideal));
        wtr.write_record(&record)?;
    }

    finish(wtr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PrecisionTimeStrategy, StdDevMode};
    use crate::testutil::{results_with_strokes, session_with_strokes};

    #[test]
    fn session_sheet_has_stroke_and_raw_blocks() {
        let results = results_with_strokes("Anna", [8, 7, 5, 4, 6, 9]);
        let csv = session_csv(&results).unwrap();

        assert!(csv.contains("\"Giocatore\",\"Anna\""));
        // One row per canonical stroke.
        for stroke in ["serve", "forehand", "combined", "return", "backhand", "volley"] {
            assert!(csv.contains(&format!("\"{stroke}\"")), "missing stroke row {stroke}");
        }
        // One raw row per recorded series (plus headers and metadata).
        let raw_rows = csv.lines().filter(|l| l.starts_with("\"groundstrokes\"")).count();
        assert_eq!(raw_rows, 20);
        assert!(csv.contains("\"Area Radar\""));
        assert!(csv.contains("\"% Ideale\""));
    }

    #[test]
    fn serve_rows_carry_strip_and_side_not_direction() {
        let results = results_with_strokes("Anna", [8, 7, 5, 4, 6, 9]);
        let csv = session_csv(&results).unwrap();
        let serve_row = csv.lines().find(|l| l.starts_with("\"serve\"")).unwrap();
        assert!(serve_row.contains("\"prima\""));
        assert!(serve_row.contains("\"T\""));
        assert!(serve_row.contains("\"right\""));
    }

    #[test]
    fn history_sheet_is_one_row_per_session() {
        let sessions = vec![
            session_with_strokes("Anna", [8, 7, 5, 4, 6, 9]),
            session_with_strokes("Bruno", [5, 5, 5, 5, 5, 5]),
        ];
        let settings = Settings {
            std_dev_mode: StdDevMode::Sample,
            precision_time_strategy: PrecisionTimeStrategy::A,
        };
        let csv = history_csv(&sessions, &settings).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3, "header plus one row per session");
        assert!(lines[0].starts_with("\"Giocatore\""));
        assert!(lines[2].contains("\"25.00%\""), "all-5 session is a quarter of ideal");
    }
}
