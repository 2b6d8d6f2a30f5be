use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::HeatmapConfig;
use crate::ir::Contributions;

use super::types::{AxisLabel, HeatmapCell, HeatmapLayout};

pub const DAYS_PER_WEEK: usize = 7;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const DAY_LABELS: [(usize, &str); 3] = [(1, "Mon"), (3, "Wed"), (5, "Fri")];

static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-(\d{2})").unwrap());

/// Buckets a day's count into five intensity levels.
pub fn intensity_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=3 => 1,
        4..=7 => 2,
        8..=11 => 3,
        _ => 4,
    }
}

/// Zero-based month of a `YYYY-MM-DD` date.
fn month_index(date: &str) -> Option<usize> {
    let caps = DATE_RE.captures(date)?;
    let month: usize = caps.get(1)?.as_str().parse().ok()?;
    (1..=12).contains(&month).then(|| month - 1)
}

pub fn heatmap_height(config: &HeatmapConfig) -> f32 {
    config.top_margin + DAYS_PER_WEEK as f32 * pitch(config) + config.bottom_margin
}

fn pitch(config: &HeatmapConfig) -> f32 {
    config.cell_size + config.cell_gap
}

pub fn compute_heatmap_layout(data: &Contributions, config: &HeatmapConfig) -> HeatmapLayout {
    let pitch = pitch(config);

    let mut cells = Vec::new();
    for (col, week) in data.weeks.iter().enumerate() {
        let x = config.left_margin + col as f32 * pitch;
        let delay = col as f32 * config.column_stagger;
        for day in week {
            let row = usize::from(day.weekday.min(DAYS_PER_WEEK as u8 - 1));
            cells.push(HeatmapCell {
                x,
                y: config.top_margin + row as f32 * pitch,
                count: day.count,
                level: intensity_level(day.count),
                delay,
                glow: day.count >= config.glow_threshold,
            });
        }
    }

    let mut months = Vec::new();
    let mut last_month = None;
    for (col, week) in data.weeks.iter().enumerate() {
        let Some(first) = week.first() else {
            continue;
        };
        let Some(month) = month_index(&first.date) else {
            tracing::warn!(date = %first.date, "skipping malformed contribution date");
            continue;
        };
        if last_month != Some(month) {
            last_month = Some(month);
            months.push(AxisLabel {
                x: config.left_margin + col as f32 * pitch,
                y: config.top_margin - 8.0,
                text: MONTH_NAMES[month].to_string(),
            });
        }
    }

    let days = DAY_LABELS
        .iter()
        .map(|(row, text)| AxisLabel {
            x: config.left_margin - 8.0,
            y: config.top_margin + *row as f32 * pitch + config.cell_size / 2.0 + 3.0,
            text: text.to_string(),
        })
        .collect();

    HeatmapLayout {
        cells,
        months,
        days,
        legend_x: config.left_margin,
        legend_y: config.top_margin + DAYS_PER_WEEK as f32 * pitch + 12.0,
        total_count: data.total_count,
    }
}
