use crate::config::{load_config, Config};
use crate::ir::{parse_profile, Profile};
use crate::layout::{compute_layout, CardKind};
use crate::layout_dump::write_layout_dump;
use crate::render::{render_svg, write_output_png, write_output_svg};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "galaxy-cards", version, about = "Render animated SVG profile cards")]
pub struct Args {
    /// Profile file (JSON or JSON5) or '-' for stdin
    #[arg(short = 'p', long = "profile")]
    pub profile: PathBuf,

    /// Output directory. Defaults to the current directory.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Which card to render
    #[arg(short = 'k', long = "card", value_enum, default_value = "all")]
    pub card: CardSelection,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config file (JSON5) overriding theme colors and card geometry
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Write the skill constellation layout (zones, placed items, edges) as JSON
    #[arg(long = "dumpLayout")]
    pub dump_layout: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSelection {
    All,
    Constellation,
    Heatmap,
    Timeline,
}

impl CardSelection {
    fn kinds(self) -> Vec<CardKind> {
        match self {
            CardSelection::All => CardKind::ALL.to_vec(),
            CardSelection::Constellation => vec![CardKind::SkillConstellation],
            CardSelection::Heatmap => vec![CardKind::ContributionHeatmap],
            CardSelection::Timeline => vec![CardKind::CodingTimeline],
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

pub fn run() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let profile = parse_profile(&read_input(&args.profile)?)?;
    let out_dir = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)?;

    if let Some(dump_path) = args.dump_layout.as_deref() {
        let layout = compute_layout(
            CardKind::SkillConstellation,
            &profile,
            &config.theme,
            &config.layout,
        )?;
        write_layout_dump(dump_path, &layout)?;
        tracing::info!(path = %dump_path.display(), "wrote layout dump");
    }

    // Lay out every requested card before writing any of them.
    let svgs = render_cards(&profile, &config, &args.card.kinds())?;
    for (kind, svg) in svgs {
        let path = output_path(&out_dir, kind, args.output_format);
        match args.output_format {
            OutputFormat::Svg => write_output_svg(&svg, Some(&path))?,
            OutputFormat::Png => write_output_png(&svg, &path, &config.render)?,
        }
        tracing::info!(card = kind.file_stem(), path = %path.display(), "wrote card");
    }
    Ok(())
}

pub fn render_cards(
    profile: &Profile,
    config: &Config,
    kinds: &[CardKind],
) -> Result<Vec<(CardKind, String)>> {
    let mut out = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        let layout = compute_layout(kind, profile, &config.theme, &config.layout)?;
        out.push((kind, render_svg(&layout, &config.theme, &config.layout)));
    }
    Ok(out)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read_to_string(path)?)
}

fn output_path(dir: &Path, kind: CardKind, format: OutputFormat) -> PathBuf {
    dir.join(format!("{}.{}", kind.file_stem(), format.extension()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::GalaxyArm;

    #[test]
    fn parses_arguments() {
        let args = Args::try_parse_from([
            "galaxy-cards",
            "-p",
            "profile.json5",
            "-k",
            "heatmap",
            "-e",
            "png",
            "--dumpLayout",
            "layout.json",
        ])
        .unwrap();
        assert_eq!(args.card, CardSelection::Heatmap);
        assert!(matches!(args.output_format, OutputFormat::Png));
        assert_eq!(args.dump_layout, Some(PathBuf::from("layout.json")));
    }

    #[test]
    fn output_paths_use_card_stems() {
        let path = output_path(Path::new("out"), CardKind::CodingTimeline, OutputFormat::Svg);
        assert_eq!(path, Path::new("out").join("coding-timeline.svg"));
        assert_eq!(CardSelection::All.kinds().len(), 3);
    }

    #[test]
    fn layout_errors_abort_before_any_card_is_returned() {
        let profile = Profile {
            galaxy_arms: vec![GalaxyArm::new("A", "", &["x"])],
            ..Profile::default()
        };
        let mut config = Config::default();
        config.layout.constellation.width = -1.0;
        let result = render_cards(
            &profile,
            &config,
            &[CardKind::CodingTimeline, CardKind::SkillConstellation],
        );
        assert!(result.is_err());
    }
}
