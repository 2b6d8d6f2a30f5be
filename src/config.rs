use crate::error::LayoutError;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstellationConfig {
    pub width: f32,
    pub height: f32,
    pub zone_padding: f32,
    pub inner_padding: f32,
    /// Top of the zone band; the title sits above it.
    pub zone_top: f32,
    /// Space kept free under the zone band for the group labels.
    pub zone_bottom: f32,
    pub star_max_radius: f32,
    pub star_min_radius: f32,
    /// Jitter bound as a fraction of the cell size, applied on both sides.
    pub jitter_ratio: f32,
    pub line_opacity: f32,
    pub line_stagger: f32,
    pub label_offset: f32,
    pub starfield_count: usize,
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        Self {
            width: 850.0,
            height: 500.0,
            zone_padding: 20.0,
            inner_padding: 20.0,
            zone_top: 50.0,
            zone_bottom: 50.0,
            star_max_radius: 6.0,
            star_min_radius: 3.0,
            jitter_ratio: 0.25,
            line_opacity: 0.2,
            line_stagger: 0.4,
            label_offset: 6.0,
            starfield_count: 30,
        }
    }
}

impl ConstellationConfig {
    pub fn zone_height(&self) -> f32 {
        self.height - self.zone_top - self.zone_bottom
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(LayoutError::InvalidCanvas { width: self.width });
        }
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(LayoutError::InvalidCanvasHeight {
                height: self.height,
            });
        }
        let band = self.zone_height();
        if !self.zone_top.is_finite() || !self.zone_bottom.is_finite() || band < 0.0 {
            return Err(LayoutError::InvalidZoneBand {
                top: self.zone_top,
                bottom: self.zone_bottom,
            });
        }
        for padding in [self.zone_padding, self.inner_padding] {
            if !padding.is_finite() || padding < 0.0 {
                return Err(LayoutError::InvalidPadding { padding });
            }
        }
        if !self.jitter_ratio.is_finite() || self.jitter_ratio < 0.0 {
            return Err(LayoutError::InvalidJitterRatio {
                ratio: self.jitter_ratio,
            });
        }
        for radius in [self.star_max_radius, self.star_min_radius] {
            if !radius.is_finite() || radius < 0.0 {
                return Err(LayoutError::InvalidRadius { radius });
            }
        }
        if self.star_max_radius < self.star_min_radius {
            return Err(LayoutError::InvertedRadiusRamp {
                max: self.star_max_radius,
                min: self.star_min_radius,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapConfig {
    pub width: f32,
    pub cell_size: f32,
    pub cell_gap: f32,
    pub cell_radius: f32,
    pub left_margin: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    pub empty_height: f32,
    pub column_stagger: f32,
    /// Days at or above this count glow and pulse.
    pub glow_threshold: u32,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            width: 850.0,
            cell_size: 11.0,
            cell_gap: 3.0,
            cell_radius: 2.0,
            left_margin: 45.0,
            top_margin: 55.0,
            bottom_margin: 35.0,
            empty_height: 120.0,
            column_stagger: 0.015,
            glow_threshold: 12,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineConfig {
    pub width: f32,
    pub height: f32,
    pub baseline_y: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    pub node_radius: f32,
    pub min_spacing: f32,
    pub comet_duration: f32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            width: 850.0,
            height: 200.0,
            baseline_y: 100.0,
            left_margin: 60.0,
            right_margin: 60.0,
            node_radius: 5.0,
            min_spacing: 20.0,
            comet_duration: 6.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub constellation: ConstellationConfig,
    pub heatmap: HeatmapConfig,
    pub timeline: TimelineConfig,
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Raster size used when an SVG carries no intrinsic size.
    pub width: f32,
    pub height: f32,
    pub scale: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 850.0,
            height: 500.0,
            scale: 1.0,
            background: Theme::cosmic().nebula,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::cosmic();
        let render = RenderConfig {
            background: theme.nebula.clone(),
            ..Default::default()
        };
        Self {
            theme,
            layout: LayoutConfig::default(),
            render,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    nebula: Option<String>,
    star_dust: Option<String>,
    text_dim: Option<String>,
    text_faint: Option<String>,
    synapse_cyan: Option<String>,
    dendrite_violet: Option<String>,
    axon_amber: Option<String>,
    neuron_pink: Option<String>,
    myelin_green: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConstellationConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    zone_padding: Option<f32>,
    inner_padding: Option<f32>,
    zone_top: Option<f32>,
    zone_bottom: Option<f32>,
    star_max_radius: Option<f32>,
    star_min_radius: Option<f32>,
    jitter_ratio: Option<f32>,
    line_opacity: Option<f32>,
    line_stagger: Option<f32>,
    label_offset: Option<f32>,
    starfield_count: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct HeatmapConfigFile {
    cell_size: Option<f32>,
    cell_gap: Option<f32>,
    left_margin: Option<f32>,
    top_margin: Option<f32>,
    bottom_margin: Option<f32>,
    glow_threshold: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct TimelineConfigFile {
    height: Option<f32>,
    baseline_y: Option<f32>,
    left_margin: Option<f32>,
    right_margin: Option<f32>,
    min_spacing: Option<f32>,
    comet_duration: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    scale: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    constellation: Option<ConstellationConfigFile>,
    heatmap: Option<HeatmapConfigFile>,
    timeline: Option<TimelineConfigFile>,
    render: Option<RenderConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = json5::from_str(contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        match Theme::by_name(theme_name) {
            Some(theme) => config.theme = theme,
            None => tracing::warn!(theme = theme_name, "unknown theme, keeping default"),
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.nebula {
            config.theme.nebula = v;
        }
        if let Some(v) = vars.star_dust {
            config.theme.star_dust = v;
        }
        if let Some(v) = vars.text_dim {
            config.theme.text_dim = v;
        }
        if let Some(v) = vars.text_faint {
            config.theme.text_faint = v;
        }
        if let Some(v) = vars.synapse_cyan {
            config.theme.synapse_cyan = v;
        }
        if let Some(v) = vars.dendrite_violet {
            config.theme.dendrite_violet = v;
        }
        if let Some(v) = vars.axon_amber {
            config.theme.axon_amber = v;
        }
        if let Some(v) = vars.neuron_pink {
            config.theme.neuron_pink = v;
        }
        if let Some(v) = vars.myelin_green {
            config.theme.myelin_green = v;
        }
    }
    config.render.background = config.theme.nebula.clone();

    if let Some(c) = parsed.constellation {
        let target = &mut config.layout.constellation;
        if let Some(v) = c.width {
            target.width = v;
        }
        if let Some(v) = c.height {
            target.height = v;
        }
        if let Some(v) = c.zone_padding {
            target.zone_padding = v;
        }
        if let Some(v) = c.inner_padding {
            target.inner_padding = v;
        }
        if let Some(v) = c.zone_top {
            target.zone_top = v;
        }
        if let Some(v) = c.zone_bottom {
            target.zone_bottom = v;
        }
        if let Some(v) = c.star_max_radius {
            target.star_max_radius = v;
        }
        if let Some(v) = c.star_min_radius {
            target.star_min_radius = v;
        }
        if let Some(v) = c.jitter_ratio {
            target.jitter_ratio = v;
        }
        if let Some(v) = c.line_opacity {
            target.line_opacity = v;
        }
        if let Some(v) = c.line_stagger {
            target.line_stagger = v;
        }
        if let Some(v) = c.label_offset {
            target.label_offset = v;
        }
        if let Some(v) = c.starfield_count {
            target.starfield_count = v;
        }
        target.validate()?;
        config.render.width = target.width;
        config.render.height = target.height;
    }

    if let Some(h) = parsed.heatmap {
        let target = &mut config.layout.heatmap;
        if let Some(v) = h.cell_size {
            target.cell_size = v;
        }
        if let Some(v) = h.cell_gap {
            target.cell_gap = v;
        }
        if let Some(v) = h.left_margin {
            target.left_margin = v;
        }
        if let Some(v) = h.top_margin {
            target.top_margin = v;
        }
        if let Some(v) = h.bottom_margin {
            target.bottom_margin = v;
        }
        if let Some(v) = h.glow_threshold {
            target.glow_threshold = v;
        }
    }

    if let Some(t) = parsed.timeline {
        let target = &mut config.layout.timeline;
        if let Some(v) = t.height {
            target.height = v;
        }
        if let Some(v) = t.baseline_y {
            target.baseline_y = v;
        }
        if let Some(v) = t.left_margin {
            target.left_margin = v;
        }
        if let Some(v) = t.right_margin {
            target.right_margin = v;
        }
        if let Some(v) = t.min_spacing {
            target.min_spacing = v;
        }
        if let Some(v) = t.comet_duration {
            target.comet_duration = v;
        }
    }

    if let Some(r) = parsed.render {
        if let Some(v) = r.scale {
            config.render.scale = v;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_card_constants() {
        let config = Config::default();
        let c = &config.layout.constellation;
        assert_eq!((c.width, c.height), (850.0, 500.0));
        assert_eq!(c.zone_height(), 400.0);
        assert_eq!(c.jitter_ratio, 0.25);
        assert!(c.validate().is_ok());
        assert_eq!(config.render.background, config.theme.nebula);
    }

    #[test]
    fn overlays_present_fields_only() {
        let config = parse_config(
            r##"{
                theme: "daylight",
                themeVariables: { synapseCyan: "#123456" },
                constellation: { innerPadding: 12, starfieldCount: 0 },
                timeline: { cometDuration: 9 },
            }"##,
        )
        .unwrap();
        assert_eq!(config.theme.synapse_cyan, "#123456");
        assert_eq!(config.theme.nebula, Theme::daylight().nebula);
        assert_eq!(config.layout.constellation.inner_padding, 12.0);
        assert_eq!(config.layout.constellation.starfield_count, 0);
        assert_eq!(config.layout.constellation.zone_padding, 20.0);
        assert_eq!(config.layout.timeline.comet_duration, 9.0);
    }

    #[test]
    fn rejects_negative_canvas_in_config_file() {
        let err = parse_config(r#"{ constellation: { width: -10 } }"#).unwrap_err();
        let layout_err = err.downcast_ref::<LayoutError>().unwrap();
        assert_eq!(layout_err, &LayoutError::InvalidCanvas { width: -10.0 });
    }

    #[test]
    fn overlays_line_pacing_and_label_offset() {
        let config = parse_config("{ constellation: { lineStagger: 0.25, labelOffset: 9 } }").unwrap();
        assert_eq!(config.layout.constellation.line_stagger, 0.25);
        assert_eq!(config.layout.constellation.label_offset, 9.0);
    }

    fn layout_error(input: &str) -> LayoutError {
        let err = parse_config(input).unwrap_err();
        err.downcast_ref::<LayoutError>()
            .cloned()
            .unwrap_or_else(|| panic!("expected a layout error for {input}, got {err}"))
    }

    #[test]
    fn rejects_non_finite_geometry_in_config_file() {
        for value in ["NaN", "Infinity"] {
            let err = layout_error(&format!("{{ constellation: {{ width: {value} }} }}"));
            assert!(matches!(err, LayoutError::InvalidCanvas { .. }), "width {value}: {err}");

            let err = layout_error(&format!("{{ constellation: {{ zoneTop: {value} }} }}"));
            assert!(matches!(err, LayoutError::InvalidZoneBand { .. }), "zoneTop {value}: {err}");

            let err = layout_error(&format!("{{ constellation: {{ jitterRatio: {value} }} }}"));
            assert!(matches!(err, LayoutError::InvalidJitterRatio { .. }), "jitterRatio {value}: {err}");

            let err = layout_error(&format!("{{ constellation: {{ starMaxRadius: {value} }} }}"));
            assert!(matches!(err, LayoutError::InvalidRadius { .. }), "starMaxRadius {value}: {err}");
        }
    }

    #[test]
    fn rejects_negative_jitter_and_oversized_band() {
        let err = layout_error("{ constellation: { jitterRatio: -0.1 } }");
        assert_eq!(err, LayoutError::InvalidJitterRatio { ratio: -0.1 });
        let err = layout_error("{ constellation: { zoneTop: 300, zoneBottom: 300 } }");
        assert_eq!(err, LayoutError::InvalidZoneBand { top: 300.0, bottom: 300.0 });
        let err = layout_error("{ constellation: { starMinRadius: -1 } }");
        assert_eq!(err, LayoutError::InvalidRadius { radius: -1.0 });
    }

    #[test]
    fn rejects_inverted_radius_ramp() {
        let err = parse_config(r#"{ constellation: { starMaxRadius: 2, starMinRadius: 4 } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("inverted"));
    }
}
