use serde::Serialize;

use super::chain::Edge;
use super::grid::PlacedItem;
use super::zone::Zone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardKind {
    SkillConstellation,
    ContributionHeatmap,
    CodingTimeline,
}

impl CardKind {
    pub const ALL: [CardKind; 3] = [
        CardKind::SkillConstellation,
        CardKind::ContributionHeatmap,
        CardKind::CodingTimeline,
    ];

    pub fn file_stem(self) -> &'static str {
        match self {
            CardKind::SkillConstellation => "skill-constellation",
            CardKind::ContributionHeatmap => "contribution-heatmap",
            CardKind::CodingTimeline => "coding-timeline",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub kind: CardKind,
    pub width: f32,
    pub height: f32,
    pub card: CardData,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CardData {
    /// Drawn when the profile has nothing to show for this card.
    Placeholder { message: String },
    Constellation(ConstellationLayout),
    Heatmap(HeatmapLayout),
    Timeline(TimelineLayout),
}

#[derive(Debug, Clone, Serialize)]
pub struct ConstellationGroup {
    pub index: usize,
    pub name: String,
    pub color: String,
    pub zone: Zone,
    pub stars: Vec<PlacedItem>,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmbientStar {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub opacity: f32,
    pub duration: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConstellationLayout {
    pub groups: Vec<ConstellationGroup>,
    pub starfield: Vec<AmbientStar>,
    /// x positions of the dashed separators between neighbouring zones.
    pub dividers: Vec<f32>,
    pub total_items: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub x: f32,
    pub y: f32,
    pub count: u32,
    /// 0 (no activity) ..= 4 (busiest).
    pub level: u8,
    pub delay: f32,
    pub glow: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapLayout {
    pub cells: Vec<HeatmapCell>,
    pub months: Vec<AxisLabel>,
    pub days: Vec<AxisLabel>,
    pub legend_x: f32,
    pub legend_y: f32,
    pub total_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineNode {
    pub x: f32,
    pub year: i32,
    pub label: String,
    pub arm: usize,
    pub above: bool,
    pub label_y: f32,
    pub connector_y: f32,
    /// Seconds until the comet reaches this node.
    pub delay: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearMarker {
    pub x: f32,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineLayout {
    pub baseline_y: f32,
    pub track_x: f32,
    pub track_width: f32,
    pub node_radius: f32,
    pub nodes: Vec<TimelineNode>,
    pub years: Vec<YearMarker>,
    pub min_year: i32,
    pub max_year: i32,
    /// Resolved arm colors; never empty.
    pub arm_colors: Vec<String>,
    pub comet_duration: f32,
}
