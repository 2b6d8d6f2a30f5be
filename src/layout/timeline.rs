use crate::config::TimelineConfig;
use crate::ir::TimelineEntry;

use super::types::{TimelineLayout, TimelineNode, YearMarker};

/// Positions entries along the track by year. Returns `None` when there is
/// nothing to plot. Entries pointing at a missing arm fall back to the first
/// color.
pub fn compute_timeline_layout(
    entries: &[TimelineEntry],
    arm_colors: Vec<String>,
    config: &TimelineConfig,
) -> Option<TimelineLayout> {
    let mut sorted: Vec<&TimelineEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.label.cmp(&b.label)));

    let min_year = sorted.first()?.year;
    let max_year = sorted.last()?.year;
    let span = (i64::from(max_year) - i64::from(min_year)).max(1) as f32;
    let track_width = config.width - config.left_margin - config.right_margin;

    let mut xs: Vec<f32> = sorted
        .iter()
        .map(|entry| {
            let t = (i64::from(entry.year) - i64::from(min_year)) as f32 / span;
            config.left_margin + t * track_width
        })
        .collect();
    // Same-year entries would stack; push each one clear of its predecessor.
    for i in 1..xs.len() {
        if (xs[i] - xs[i - 1]).abs() < config.min_spacing {
            xs[i] = xs[i - 1] + config.min_spacing;
        }
    }

    let nodes: Vec<TimelineNode> = sorted
        .iter()
        .zip(&xs)
        .enumerate()
        .map(|(i, (entry, &x))| {
            let t = (x - config.left_margin) / track_width.max(1.0);
            let above = i % 2 == 0;
            TimelineNode {
                x,
                year: entry.year,
                label: entry.label.clone(),
                arm: if entry.arm < arm_colors.len() { entry.arm } else { 0 },
                above,
                label_y: if above {
                    config.baseline_y - 22.0
                } else {
                    config.baseline_y + 32.0
                },
                connector_y: if above {
                    config.baseline_y - 10.0
                } else {
                    config.baseline_y + 10.0
                },
                delay: t * config.comet_duration,
            }
        })
        .collect();

    let mut years: Vec<YearMarker> = Vec::new();
    for node in &nodes {
        if years.iter().all(|marker| marker.year != node.year) {
            years.push(YearMarker {
                x: node.x,
                year: node.year,
            });
        }
    }

    Some(TimelineLayout {
        baseline_y: config.baseline_y,
        track_x: config.left_margin,
        track_width,
        node_radius: config.node_radius,
        nodes,
        years,
        min_year,
        max_year,
        arm_colors,
        comet_duration: config.comet_duration,
    })
}
