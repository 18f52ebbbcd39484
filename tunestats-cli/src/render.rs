//! Shared table and cell helpers for the views.

use anyhow::Result;
use colored::{ColoredString, Colorize};
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

use tunestats_types::format_relative_time;

pub fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header.to_vec());
    table
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Relative play time, or the raw value when the backend sent something
/// unparseable.
pub fn played_cell(played_at: &str) -> String {
    format_relative_time(played_at).unwrap_or_else(|_| played_at.to_string())
}

pub fn genres_cell(genres: &[String]) -> String {
    if genres.is_empty() {
        return "-".to_string();
    }
    genres.iter().take(3).map(String::as_str).collect::<Vec<_>>().join(", ")
}

pub fn optional_cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn hour_label(hour: u8) -> String {
    format!("{:02}:00", hour)
}

pub fn trend_label(trend: &str, change_percentage: f64) -> ColoredString {
    let text = format!("{:+.1}%", change_percentage);
    match trend {
        "up" => format!("▲ {}", text).as_str().green(),
        "down" => format!("▼ {}", text).as_str().red(),
        _ => format!("= {}", text).as_str().normal(),
    }
}

/// Text bar for one chart row, scaled so `max` fills `width` cells.
pub fn bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let cells = (value.min(max) as f64 / max as f64 * width as f64).round() as usize;
    "█".repeat(cells.max(1))
}

pub fn percent_label(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}

pub fn heading(title: &str) {
    println!("{}", title.cyan().bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_played_cell_keeps_garbage() {
        assert_eq!(played_cell("soon"), "soon");
    }

    #[test]
    fn test_genres_cell() {
        assert_eq!(genres_cell(&[]), "-");
        let genres: Vec<String> =
            ["shoegaze", "dream pop", "noise pop", "indie"].iter().map(|g| g.to_string()).collect();
        assert_eq!(genres_cell(&genres), "shoegaze, dream pop, noise pop");
    }

    #[test]
    fn test_small_cells() {
        assert_eq!(hour_label(7), "07:00");
        assert_eq!(optional_cell(None::<u32>), "-");
        assert_eq!(optional_cell(Some(55)), "55");
    }

    #[test]
    fn test_bar_scales_to_max() {
        assert_eq!(bar(10, 10, 8), "████████");
        assert_eq!(bar(5, 10, 8), "████");
        assert_eq!(bar(1, 1000, 8), "█");
        assert_eq!(bar(0, 10, 8), "");
        assert_eq!(bar(3, 0, 8), "");
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(12.345), "12.3%");
        assert_eq!(percent_label(0.0), "0.0%");
    }

    #[test]
    fn test_trend_label_sign() {
        colored::control::set_override(false);
        assert_eq!(trend_label("up", 12.345).to_string(), "▲ +12.3%");
        assert_eq!(trend_label("down", -50.0).to_string(), "▼ -50.0%");
        assert_eq!(trend_label("stable", 0.0).to_string(), "= +0.0%");
    }
}
