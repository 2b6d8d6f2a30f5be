pub mod chain;
pub mod constellation;
pub mod grid;
pub mod heatmap;
mod placeholder;
pub mod random;
pub mod ramp;
pub mod timeline;
pub(crate) mod types;
pub mod zone;
pub use types::*;

pub use chain::{connect, Edge};
pub use grid::{pack, GridShape, PackParams, PlacedItem};
pub use random::deterministic_random;
pub use ramp::SizeRamp;
pub use zone::{partition, Band, Zone};

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::ir::Profile;
use crate::theme::{resolve_arm_colors, Theme};
use constellation::compute_constellation_layout;
use heatmap::{compute_heatmap_layout, heatmap_height};
use placeholder::compute_placeholder_layout;
use timeline::compute_timeline_layout;

pub fn compute_layout(
    kind: CardKind,
    profile: &Profile,
    theme: &Theme,
    config: &LayoutConfig,
) -> Result<Layout> {
    let layout = match kind {
        CardKind::SkillConstellation => {
            let c = &config.constellation;
            if profile.galaxy_arms.is_empty() {
                compute_placeholder_layout(kind, "No skills configured", c.width, c.height)
            } else {
                Layout {
                    kind,
                    width: c.width,
                    height: c.height,
                    card: CardData::Constellation(compute_constellation_layout(
                        &profile.galaxy_arms,
                        theme,
                        c,
                    )?),
                }
            }
        }
        CardKind::ContributionHeatmap => {
            let h = &config.heatmap;
            if profile.contributions.weeks.is_empty() {
                compute_placeholder_layout(
                    kind,
                    "No contribution data available",
                    h.width,
                    h.empty_height,
                )
            } else {
                Layout {
                    kind,
                    width: h.width,
                    height: heatmap_height(h),
                    card: CardData::Heatmap(compute_heatmap_layout(&profile.contributions, h)),
                }
            }
        }
        CardKind::CodingTimeline => {
            let t = &config.timeline;
            let mut arm_colors = resolve_arm_colors(&profile.galaxy_arms, theme);
            if arm_colors.is_empty() {
                arm_colors.push(theme.synapse_cyan.clone());
            }
            match compute_timeline_layout(&profile.timeline, arm_colors, t) {
                Some(timeline) => Layout {
                    kind,
                    width: t.width,
                    height: t.height,
                    card: CardData::Timeline(timeline),
                },
                None => compute_placeholder_layout(kind, "No timeline data", t.width, t.height),
            }
        }
    };
    tracing::debug!(kind = ?layout.kind, width = layout.width, height = layout.height, "computed card layout");
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Contributions, GalaxyArm};

    #[test]
    fn empty_profile_yields_placeholders() {
        let profile = Profile::default();
        let config = LayoutConfig::default();
        for kind in CardKind::ALL {
            let layout = compute_layout(kind, &profile, &Theme::cosmic(), &config).unwrap();
            assert!(matches!(layout.card, CardData::Placeholder { .. }), "{kind:?}");
        }
        let heatmap =
            compute_layout(CardKind::ContributionHeatmap, &profile, &Theme::cosmic(), &config)
                .unwrap();
        assert_eq!(heatmap.height, 120.0);
    }

    #[test]
    fn constellation_errors_propagate() {
        let profile = Profile {
            galaxy_arms: vec![GalaxyArm::new("A", "", &["x"])],
            timeline: Vec::new(),
            contributions: Contributions::default(),
        };
        let mut config = LayoutConfig::default();
        config.constellation.zone_padding = 500.0;
        let err = compute_layout(CardKind::SkillConstellation, &profile, &Theme::cosmic(), &config)
            .unwrap_err();
        assert!(matches!(err, crate::error::LayoutError::CanvasTooNarrow { .. }));
    }
}
