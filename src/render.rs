use crate::config::{ConstellationConfig, HeatmapConfig, LayoutConfig, RenderConfig};
use crate::layout::{
    CardData, ConstellationGroup, ConstellationLayout, HeatmapLayout, Layout, TimelineLayout,
};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

const LEVEL_OPACITY: [f32; 5] = [0.3, 0.25, 0.5, 0.75, 1.0];

pub fn render_svg(layout: &Layout, theme: &Theme, config: &LayoutConfig) -> String {
    let width = layout.width;
    let height = layout.height;
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n",
    ));
    match &layout.card {
        CardData::Placeholder { message } => {
            svg.push_str(&card_background(width, height, theme));
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"12\" font-family=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>\n",
                width / 2.0,
                height / 2.0,
                theme.text_faint,
                theme.font_family,
                escape_xml(message)
            ));
        }
        CardData::Constellation(data) => {
            render_constellation(&mut svg, data, width, height, theme, &config.constellation)
        }
        CardData::Heatmap(data) => {
            render_heatmap(&mut svg, data, width, height, theme, &config.heatmap)
        }
        CardData::Timeline(data) => render_timeline(&mut svg, data, width, height, theme),
    }
    svg.push_str("</svg>\n");
    svg
}

fn card_background(width: f32, height: f32, theme: &Theme) -> String {
    format!(
        "  <rect x=\"0.5\" y=\"0.5\" width=\"{}\" height=\"{}\" rx=\"12\" ry=\"12\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
        width - 1.0,
        height - 1.0,
        theme.nebula,
        theme.star_dust
    )
}

fn glow_filter(id: &str, color: &str, spread: f32, std_dev: f32, opacity: f32) -> String {
    let offset = -100.0 * (spread - 1.0) / 2.0;
    let size = 100.0 * spread;
    format!(
        "    <filter id=\"{id}\" x=\"{offset}%\" y=\"{offset}%\" width=\"{size}%\" height=\"{size}%\">\n      <feGaussianBlur stdDeviation=\"{std_dev}\" in=\"SourceGraphic\" result=\"blur\"/>\n      <feFlood flood-color=\"{color}\" flood-opacity=\"{opacity}\" result=\"color\"/>\n      <feComposite in=\"color\" in2=\"blur\" operator=\"in\" result=\"glow\"/>\n      <feMerge>\n        <feMergeNode in=\"glow\"/>\n        <feMergeNode in=\"SourceGraphic\"/>\n      </feMerge>\n    </filter>\n"
    )
}

fn card_title(svg: &mut String, x: f32, y: f32, text: &str, theme: &Theme) {
    svg.push_str(&format!(
        "  <text x=\"{x}\" y=\"{y}\" fill=\"{}\" font-size=\"11\" font-family=\"{}\" letter-spacing=\"3\">{}</text>\n",
        theme.text_faint,
        theme.font_family,
        escape_xml(text)
    ));
}

fn status_dot(svg: &mut String, cx: f32, cy: f32, theme: &Theme) {
    svg.push_str(&format!(
        "  <circle cx=\"{cx}\" cy=\"{cy}\" r=\"3\" fill=\"{}\" opacity=\"0.8\"><animate attributeName=\"opacity\" values=\"0.4;1;0.4\" dur=\"2s\" repeatCount=\"indefinite\"/></circle>\n",
        theme.synapse_cyan
    ));
}

fn render_constellation(
    svg: &mut String,
    data: &ConstellationLayout,
    width: f32,
    height: f32,
    theme: &Theme,
    config: &ConstellationConfig,
) {
    svg.push_str("  <defs>\n");
    for group in &data.groups {
        svg.push_str(&glow_filter(
            &format!("const-glow-{}", group.index),
            &group.color,
            3.0,
            3.0,
            0.5,
        ));
    }
    svg.push_str(concat!(
        "    <style>\n",
        "      @keyframes const-twinkle { 0%, 100% { opacity: 0.7; } 50% { opacity: 1; } }\n",
        "      @keyframes const-line-draw { from { stroke-dashoffset: var(--line-len); } to { stroke-dashoffset: 0; } }\n",
        "      @keyframes const-label-in { from { opacity: 0; } to { opacity: 1; } }\n",
        "    </style>\n",
        "  </defs>\n",
    ));
    svg.push_str(&card_background(width, height, theme));

    for star in &data.starfield {
        svg.push_str(&format!(
            "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"{}\" opacity=\"{:.2}\"><animate attributeName=\"opacity\" values=\"{:.2};{:.2};{:.2}\" dur=\"{:.1}s\" repeatCount=\"indefinite\"/></circle>\n",
            star.x,
            star.y,
            star.radius,
            theme.text_dim,
            star.opacity,
            star.opacity,
            (star.opacity * 3.0).min(0.5),
            star.opacity,
            star.duration
        ));
    }

    card_title(svg, 30.0, 32.0, "SKILL CONSTELLATIONS", theme);
    status_dot(svg, 235.0, 28.0, theme);
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"32\" fill=\"{}\" font-size=\"10\" font-family=\"{}\" text-anchor=\"end\" opacity=\"0.5\">{} SKILLS MAPPED</text>\n",
        width - 30.0,
        theme.text_faint,
        theme.font_family,
        data.total_items
    ));

    let band_top = config.zone_top;
    let band_bottom = config.zone_top + config.zone_height();
    for x in &data.dividers {
        svg.push_str(&format!(
            "  <line x1=\"{x:.1}\" y1=\"{band_top}\" x2=\"{x:.1}\" y2=\"{band_bottom}\" stroke=\"{}\" stroke-width=\"0.5\" stroke-dasharray=\"4,6\" opacity=\"0.15\"/>\n",
            theme.text_faint
        ));
    }

    for group in &data.groups {
        render_constellation_group(svg, group, theme, config);
    }

    let label_y = height - 25.0;
    for group in &data.groups {
        let cx = group.zone.center_x();
        let pill_w = group.name.chars().count() as f32 * 8.0 + 20.0;
        svg.push_str(&format!(
            "  <rect x=\"{:.1}\" y=\"{}\" width=\"{pill_w}\" height=\"20\" rx=\"10\" ry=\"10\" fill=\"{}\" opacity=\"0.1\"/>\n",
            cx - pill_w / 2.0,
            label_y - 12.0,
            group.color
        ));
        svg.push_str(&format!(
            "  <text x=\"{cx:.1}\" y=\"{}\" fill=\"{}\" font-size=\"11\" font-family=\"{}\" text-anchor=\"middle\" font-weight=\"bold\" letter-spacing=\"1\">{}</text>\n",
            label_y + 2.0,
            group.color,
            theme.font_family,
            escape_xml(&group.name)
        ));
    }
}

fn render_constellation_group(
    svg: &mut String,
    group: &ConstellationGroup,
    theme: &Theme,
    config: &ConstellationConfig,
) {
    let n = group.stars.len();
    for edge in &group.edges {
        let a = &group.stars[edge.from];
        let b = &group.stars[edge.to];
        let (stroke_width, opacity, delay) = if edge.closing {
            (0.6, config.line_opacity * 0.6, (n - 1) as f32 * config.line_stagger)
        } else {
            (0.8, config.line_opacity, edge.from as f32 * config.line_stagger)
        };
        let len = edge.length.round();
        svg.push_str(&format!(
            "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"{stroke_width}\" opacity=\"{opacity:.2}\" stroke-dasharray=\"{len}\" stroke-dashoffset=\"{len}\" style=\"--line-len: {len}; animation: const-line-draw 1s ease {delay:.1}s forwards\"/>\n",
            a.x, a.y, b.x, b.y, group.color
        ));
    }

    for (i, star) in group.stars.iter().enumerate() {
        let twinkle_dur = 2.5 + (i % 3) as f32 * 0.5;
        let twinkle_delay = i as f32 * 0.2;
        svg.push_str(&format!(
            "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"{}\" opacity=\"0.08\" filter=\"url(#const-glow-{})\"/>\n",
            star.x,
            star.y,
            star.radius + 3.0,
            group.color,
            group.index
        ));
        svg.push_str(&format!(
            "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"{}\" opacity=\"0.85\" style=\"animation: const-twinkle {twinkle_dur:.1}s ease {twinkle_delay:.1}s infinite\"/>\n",
            star.x, star.y, star.radius, group.color
        ));
        if star.radius > 4.0 {
            svg.push_str(&format!(
                "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"1.5\" fill=\"#ffffff\" opacity=\"0.9\"/>\n",
                star.x, star.y
            ));
        }
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" fill=\"{}\" font-size=\"9\" font-family=\"{}\" text-anchor=\"middle\" opacity=\"0\" style=\"animation: const-label-in 0.5s ease {:.1}s forwards\">{}</text>\n",
            star.x,
            star.y - star.radius - config.label_offset,
            theme.text_dim,
            theme.font_family,
            twinkle_delay + 0.5,
            escape_xml(&star.label)
        ));
    }
}

fn level_style(level: u8, theme: &Theme) -> (&str, f32) {
    let level = usize::from(level.min(4));
    let color = if level == 0 {
        theme.star_dust.as_str()
    } else {
        theme.synapse_cyan.as_str()
    };
    (color, LEVEL_OPACITY[level])
}

fn render_heatmap(
    svg: &mut String,
    data: &HeatmapLayout,
    width: f32,
    height: f32,
    theme: &Theme,
    config: &HeatmapConfig,
) {
    svg.push_str("  <defs>\n");
    svg.push_str(&glow_filter("cell-glow", &theme.synapse_cyan, 3.0, 2.0, 0.5));
    svg.push_str(concat!(
        "    <style>\n",
        "      @keyframes hm-cell-appear { from { opacity: 0; transform: scale(0.5); } to { opacity: var(--cell-op, 0.3); transform: scale(1); } }\n",
        "      @keyframes hm-cell-pulse { 0%, 100% { opacity: var(--cell-op, 1); } 50% { opacity: 1; } }\n",
        "      @keyframes hm-count-glow { 0%, 100% { opacity: 0.8; } 50% { opacity: 1; } }\n",
        "    </style>\n",
        "  </defs>\n",
    ));
    svg.push_str(&card_background(width, height, theme));

    card_title(svg, 30.0, 30.0, "CONTRIBUTION NEBULA", theme);
    status_dot(svg, 240.0, 26.0, theme);
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"30\" fill=\"{}\" font-size=\"12\" font-family=\"{}\" text-anchor=\"end\" font-weight=\"bold\" style=\"animation: hm-count-glow 3s ease infinite\">{} contributions</text>\n",
        width - 30.0,
        theme.synapse_cyan,
        theme.font_family,
        format_number(data.total_count)
    ));

    for month in &data.months {
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"9\" font-family=\"{}\" opacity=\"0.7\">{}</text>\n",
            month.x, month.y, theme.text_faint, theme.font_family, month.text
        ));
    }
    for day in &data.days {
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{:.1}\" fill=\"{}\" font-size=\"9\" font-family=\"{}\" text-anchor=\"end\" opacity=\"0.6\">{}</text>\n",
            day.x, day.y, theme.text_faint, theme.font_family, day.text
        ));
    }

    let size = config.cell_size;
    let radius = config.cell_radius;
    for cell in &data.cells {
        let (fill, opacity) = level_style(cell.level, theme);
        let (filter, pulse) = if cell.glow {
            (
                " filter=\"url(#cell-glow)\"".to_string(),
                format!(" animation: hm-cell-pulse 3s ease {:.2}s infinite;", cell.delay + 1.0),
            )
        } else {
            (String::new(), String::new())
        };
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{size}\" height=\"{size}\" rx=\"{radius}\" ry=\"{radius}\" fill=\"{fill}\"{filter} opacity=\"0\" style=\"--cell-op: {opacity}; animation: hm-cell-appear 0.4s ease {:.2}s forwards;{pulse}\"/>\n",
            cell.x, cell.y, cell.delay
        ));
    }

    let legend_y = data.legend_y;
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"9\" font-family=\"{}\" opacity=\"0.6\">Less</text>\n",
        data.legend_x,
        legend_y + 3.0,
        theme.text_faint,
        theme.font_family
    ));
    let start_x = data.legend_x + 32.0;
    for level in 0..LEVEL_OPACITY.len() {
        let (fill, opacity) = level_style(level as u8, theme);
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{size}\" height=\"{size}\" rx=\"{radius}\" ry=\"{radius}\" fill=\"{fill}\" opacity=\"{opacity}\"/>\n",
            start_x + level as f32 * (size + 2.0),
            legend_y - 5.0
        ));
    }
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"9\" font-family=\"{}\" opacity=\"0.6\">More</text>\n",
        start_x + LEVEL_OPACITY.len() as f32 * (size + 2.0) + 4.0,
        legend_y + 3.0,
        theme.text_faint,
        theme.font_family
    ));
}

fn render_timeline(
    svg: &mut String,
    data: &TimelineLayout,
    width: f32,
    height: f32,
    theme: &Theme,
) {
    let cyan = theme.synapse_cyan.as_str();
    let baseline = data.baseline_y;
    let track_end = data.track_x + data.track_width;

    svg.push_str("  <defs>\n");
    svg.push_str(&format!(
        "    <linearGradient id=\"comet-trail-grad\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"0\">\n      <stop offset=\"0%\" stop-color=\"{cyan}\" stop-opacity=\"0\"/>\n      <stop offset=\"70%\" stop-color=\"{cyan}\" stop-opacity=\"0.3\"/>\n      <stop offset=\"100%\" stop-color=\"#ffffff\" stop-opacity=\"0.8\"/>\n    </linearGradient>\n"
    ));
    for (idx, color) in data.arm_colors.iter().enumerate() {
        svg.push_str(&glow_filter(&format!("tl-glow-{idx}"), color, 3.0, 3.0, 0.6));
    }
    svg.push_str(&glow_filter("comet-glow", cyan, 5.0, 4.0, 0.8));
    svg.push_str(concat!(
        "    <style>\n",
        "      @keyframes tl-node-activate { 0%, 80% { opacity: 0.3; } 85% { opacity: 1; } 100% { opacity: 0.8; } }\n",
        "      @keyframes tl-label-in { from { opacity: 0; } to { opacity: 1; } }\n",
        "      @keyframes tl-pulse { 0%, 100% { opacity: 0.6; } 50% { opacity: 1; } }\n",
        "    </style>\n",
        "  </defs>\n",
    ));
    svg.push_str(&card_background(width, height, theme));

    card_title(svg, 30.0, 28.0, "EVOLUTION TRAIL", theme);
    status_dot(svg, 185.0, 24.0, theme);
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"28\" fill=\"{}\" font-size=\"10\" font-family=\"{}\" text-anchor=\"end\" opacity=\"0.5\">{} &#8212; {}</text>\n",
        width - 30.0,
        theme.text_faint,
        theme.font_family,
        data.min_year,
        data.max_year
    ));

    svg.push_str(&format!(
        "  <line x1=\"{}\" y1=\"{baseline}\" x2=\"{track_end}\" y2=\"{baseline}\" stroke=\"{}\" stroke-width=\"1.5\" opacity=\"0.6\"/>\n",
        data.track_x, theme.star_dust
    ));
    svg.push_str(&format!(
        "  <line x1=\"{}\" y1=\"{baseline}\" x2=\"{track_end}\" y2=\"{baseline}\" stroke=\"{cyan}\" stroke-width=\"0.5\" opacity=\"0.3\"/>\n",
        data.track_x
    ));

    for marker in &data.years {
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{}\" fill=\"{}\" font-size=\"10\" font-family=\"{}\" text-anchor=\"middle\" opacity=\"0.6\">{}</text>\n",
            marker.x,
            baseline - 42.0,
            theme.text_faint,
            theme.font_family,
            marker.year
        ));
        svg.push_str(&format!(
            "  <line x1=\"{:.1}\" y1=\"{}\" x2=\"{:.1}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"1\" opacity=\"0.3\"/>\n",
            marker.x,
            baseline - 5.0,
            marker.x,
            baseline + 5.0,
            theme.text_faint
        ));
    }

    for node in &data.nodes {
        let color = data
            .arm_colors
            .get(node.arm)
            .map(String::as_str)
            .unwrap_or(cyan);
        let activate = format!(
            "style=\"animation: tl-node-activate 1s ease {:.1}s forwards\"",
            node.delay
        );
        svg.push_str(&format!(
            "  <line x1=\"{:.1}\" y1=\"{baseline}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{color}\" stroke-width=\"0.8\" opacity=\"0\" {activate}/>\n",
            node.x, node.x, node.connector_y
        ));
        svg.push_str(&format!(
            "  <circle cx=\"{:.1}\" cy=\"{baseline}\" r=\"{}\" fill=\"{color}\" opacity=\"0\" filter=\"url(#tl-glow-{})\" {activate}/>\n",
            node.x,
            data.node_radius + 4.0,
            node.arm
        ));
        svg.push_str(&format!(
            "  <circle cx=\"{:.1}\" cy=\"{baseline}\" r=\"{}\" fill=\"{color}\" opacity=\"0\" {activate}/>\n",
            node.x, data.node_radius
        ));
        svg.push_str(&format!(
            "  <circle cx=\"{:.1}\" cy=\"{baseline}\" r=\"2\" fill=\"#ffffff\" opacity=\"0\" {activate}/>\n",
            node.x
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" fill=\"{}\" font-size=\"10\" font-family=\"{}\" text-anchor=\"middle\" opacity=\"0\" style=\"animation: tl-label-in 0.6s ease {:.1}s forwards\">{}</text>\n",
            node.x,
            node.label_y,
            theme.text_dim,
            theme.font_family,
            node.delay + 0.3,
            escape_xml(&node.label)
        ));
    }

    let path = format!("M 0,0 L {},0", data.track_width);
    let dur = data.comet_duration;
    svg.push_str(&format!(
        "  <g transform=\"translate({},{baseline})\">\n    <circle r=\"4\" fill=\"#ffffff\" opacity=\"0.9\" filter=\"url(#comet-glow)\">\n      <animateMotion path=\"{path}\" dur=\"{dur}s\" repeatCount=\"indefinite\"/>\n    </circle>\n    <circle r=\"2\" fill=\"{cyan}\" opacity=\"0.6\">\n      <animateMotion path=\"{path}\" dur=\"{dur}s\" repeatCount=\"indefinite\"/>\n    </circle>\n  </g>\n",
        data.track_x
    ));
}

/// Compact count: `999`, `1.8k`, `12k`, `3.4M`.
pub fn format_number(value: u64) -> String {
    fn compact(scaled: f64, suffix: &str) -> String {
        let text = format!("{scaled:.1}");
        let text = text.strip_suffix(".0").unwrap_or(&text);
        format!("{text}{suffix}")
    }
    if value < 1_000 {
        value.to_string()
    } else if value < 1_000_000 {
        compact(value as f64 / 1_000.0, "k")
    } else {
        compact(value as f64 / 1_000_000.0, "M")
    }
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = "monospace".to_string();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .ok_or_else(|| anyhow::anyhow!("Invalid default raster size"))?;

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let scale = render_cfg.scale.max(0.1);
    let size = tree.size().to_int_size().scale_by(scale).ok_or_else(|| {
        anyhow::anyhow!("Invalid raster scale {scale}")
    })?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    if let Some(color) = parse_hex_color(&render_cfg.background) {
        pixmap.fill(color);
    }

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap_mut,
    );
    pixmap.save_png(output)?;
    Ok(())
}

/// `#rgb` or `#rrggbb`; anything else leaves the raster transparent.
#[cfg(feature = "png")]
fn parse_hex_color(value: &str) -> Option<resvg::tiny_skia::Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    let (r, g, b) = match hex.len() {
        3 => {
            let expand = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
            (expand(0)?, expand(1)?, expand(2)?)
        }
        6 => (channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?),
        _ => return None,
    };
    Some(resvg::tiny_skia::Color::from_rgba8(r, g, b, 255))
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig) -> Result<()> {
    Err(anyhow::anyhow!(
        "PNG output requires the `png` feature"
    ))
}

pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::ir::{ContributionDay, Contributions, GalaxyArm, Profile, TimelineEntry};
    use crate::layout::{compute_layout, CardKind};

    fn profile() -> Profile {
        Profile {
            galaxy_arms: vec![
                GalaxyArm::new("Frontend", "synapse_cyan", &["React", "TypeScript", "CSS", "Vite"]),
                GalaxyArm::new("Backend", "dendrite_violet", &["Rust", "Go"]),
            ],
            timeline: vec![TimelineEntry {
                year: 2019,
                label: "Started React".to_string(),
                arm: 0,
            }],
            contributions: Contributions {
                total_count: 1847,
                weeks: vec![vec![ContributionDay {
                    date: "2024-06-02".to_string(),
                    weekday: 0,
                    count: 14,
                }]],
            },
        }
    }

    fn render(kind: CardKind, profile: &Profile) -> String {
        let theme = Theme::cosmic();
        let config = LayoutConfig::default();
        let layout = compute_layout(kind, profile, &theme, &config).unwrap();
        render_svg(&layout, &theme, &config)
    }

    #[test]
    fn constellation_contains_items_and_groups() {
        let svg = render(CardKind::SkillConstellation, &profile());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        for text in ["React", "TypeScript", "Frontend", "Backend", "6 SKILLS MAPPED"] {
            assert!(svg.contains(text), "missing {text}");
        }
        assert_eq!(svg.matches("const-line-draw 1s").count(), 4 + 1);
        assert!(svg.contains("const-glow-1"));
    }

    #[test]
    fn heatmap_formats_total_and_glows() {
        let svg = render(CardKind::ContributionHeatmap, &profile());
        assert!(svg.contains("CONTRIBUTION NEBULA"));
        assert!(svg.contains("1.8k contributions"));
        assert!(svg.contains("@keyframes"));
        assert!(svg.contains("url(#cell-glow)"));
        assert!(svg.contains(">Jun<"));
    }

    #[test]
    fn timeline_has_comet_and_labels() {
        let svg = render(CardKind::CodingTimeline, &profile());
        assert!(svg.contains("Started React"));
        assert!(svg.contains("animateMotion"));
        assert!(svg.contains("tl-glow-1"));
    }

    #[test]
    fn empty_cards_render_placeholders() {
        let empty = Profile::default();
        assert!(render(CardKind::SkillConstellation, &empty).contains("No skills configured"));
        assert!(render(CardKind::ContributionHeatmap, &empty).contains("No contribution data"));
        assert!(render(CardKind::CodingTimeline, &empty).contains("No timeline data"));
    }

    #[test]
    fn labels_are_escaped() {
        let mut p = profile();
        p.galaxy_arms[0].items[0] = "C & <C++>".to_string();
        let svg = render(CardKind::SkillConstellation, &p);
        assert!(svg.contains("C &amp; &lt;C++&gt;"));
        assert!(!svg.contains("<C++>"));
    }

    #[cfg(feature = "png")]
    #[test]
    fn parses_background_colors() {
        let color = parse_hex_color("#0d1117").unwrap();
        assert_eq!(color, resvg::tiny_skia::Color::from_rgba8(0x0d, 0x11, 0x17, 255));
        assert_eq!(
            parse_hex_color("#fff"),
            Some(resvg::tiny_skia::Color::from_rgba8(255, 255, 255, 255))
        );
        assert_eq!(parse_hex_color("transparent"), None);
        assert_eq!(parse_hex_color("#12345"), None);
    }

    #[test]
    fn formats_numbers_compactly() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(342), "342");
        assert_eq!(format_number(1847), "1.8k");
        assert_eq!(format_number(12_000), "12k");
        assert_eq!(format_number(3_400_000), "3.4M");
    }
}
