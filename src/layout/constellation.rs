use crate::config::ConstellationConfig;
use crate::error::Result;
use crate::ir::GalaxyArm;
use crate::theme::{resolve_arm_colors, Theme};

use super::chain::connect;
use super::grid::{pack, PackParams};
use super::random::deterministic_random;
use super::ramp::SizeRamp;
use super::types::{AmbientStar, ConstellationGroup, ConstellationLayout};
use super::zone::{partition, Band};

/// Seed prefix for one group's jitter; stable across renders.
pub fn group_seed(index: usize) -> String {
    format!("const-{index}")
}

/// Lays out every group before anything is drawn; a configuration error in
/// any part aborts the whole card.
pub fn compute_constellation_layout(
    arms: &[GalaxyArm],
    theme: &Theme,
    config: &ConstellationConfig,
) -> Result<ConstellationLayout> {
    config.validate()?;
    let band = Band {
        y: config.zone_top,
        height: config.zone_height(),
    };
    let zones = partition(config.width, config.zone_padding, arms.len(), band)?;
    let colors = resolve_arm_colors(arms, theme);
    let params = PackParams {
        inner_padding: config.inner_padding,
        jitter_ratio: config.jitter_ratio,
        ramp: SizeRamp::new(config.star_max_radius, config.star_min_radius),
    };

    let groups: Vec<ConstellationGroup> = arms
        .iter()
        .zip(zones)
        .zip(colors)
        .enumerate()
        .map(|(index, ((arm, zone), color))| {
            let stars = pack(&zone, &arm.items, &group_seed(index), &params);
            let edges = connect(&stars);
            ConstellationGroup {
                index,
                name: arm.name.clone(),
                color,
                zone,
                stars,
                edges,
            }
        })
        .collect();

    let dividers = groups.iter().skip(1).map(|g| g.zone.x).collect();
    let total_items = groups.iter().map(|g| g.stars.len()).sum();

    Ok(ConstellationLayout {
        groups,
        starfield: compute_starfield(config),
        dividers,
        total_items,
    })
}

pub fn compute_starfield(config: &ConstellationConfig) -> Vec<AmbientStar> {
    let count = config.starfield_count;
    let margin = 5.0;
    let xs = deterministic_random("const-bg-x", count, margin, (config.width - margin).max(margin));
    let ys = deterministic_random("const-bg-y", count, margin, (config.height - margin).max(margin));
    let radii = deterministic_random("const-bg-r", count, 0.3, 0.8);
    let opacities = deterministic_random("const-bg-o", count, 0.05, 0.25);
    let durations = deterministic_random("const-bg-d", count, 4.0, 8.0);
    (0..count)
        .map(|i| AmbientStar {
            x: xs[i],
            y: ys[i],
            radius: radii[i],
            opacity: opacities[i],
            duration: durations[i],
        })
        .collect()
}
