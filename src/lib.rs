#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod render;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{load_config, Config, LayoutConfig};
pub use error::LayoutError;
pub use ir::{parse_profile, GalaxyArm, Profile};
pub use layout::{compute_layout, CardKind};
pub use render::render_svg;
pub use theme::Theme;
