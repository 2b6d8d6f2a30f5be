use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ir::GalaxyArm;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    /// Card background.
    pub nebula: String,
    /// Card border and empty heatmap cells.
    pub star_dust: String,
    pub text_dim: String,
    pub text_faint: String,
    pub synapse_cyan: String,
    pub dendrite_violet: String,
    pub axon_amber: String,
    pub neuron_pink: String,
    pub myelin_green: String,
}

impl Theme {
    pub fn cosmic() -> Self {
        Self {
            font_family: "monospace".to_string(),
            nebula: "#0d1117".to_string(),
            star_dust: "#30363d".to_string(),
            text_dim: "#a9b1d6".to_string(),
            text_faint: "#565f89".to_string(),
            synapse_cyan: "#00d4ff".to_string(),
            dendrite_violet: "#a855f7".to_string(),
            axon_amber: "#ffb020".to_string(),
            neuron_pink: "#ff4d9d".to_string(),
            myelin_green: "#2ee6a6".to_string(),
        }
    }

    pub fn daylight() -> Self {
        Self {
            font_family: "monospace".to_string(),
            nebula: "#f6f8fa".to_string(),
            star_dust: "#d0d7de".to_string(),
            text_dim: "#424a53".to_string(),
            text_faint: "#6e7781".to_string(),
            synapse_cyan: "#0969da".to_string(),
            dendrite_violet: "#8250df".to_string(),
            axon_amber: "#bf8700".to_string(),
            neuron_pink: "#bf3989".to_string(),
            myelin_green: "#1a7f37".to_string(),
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "cosmic" | "default" | "dark" => Some(Self::cosmic()),
            "daylight" | "light" => Some(Self::daylight()),
            _ => None,
        }
    }

    /// Accent colors in the order used when a group has no usable token.
    pub fn accents(&self) -> [&str; 5] {
        [
            self.synapse_cyan.as_str(),
            self.dendrite_violet.as_str(),
            self.axon_amber.as_str(),
            self.neuron_pink.as_str(),
            self.myelin_green.as_str(),
        ]
    }

    pub fn named(&self, token: &str) -> Option<&str> {
        let color = match token {
            "nebula" => &self.nebula,
            "star_dust" => &self.star_dust,
            "text_dim" => &self.text_dim,
            "text_faint" => &self.text_faint,
            "synapse_cyan" => &self.synapse_cyan,
            "dendrite_violet" => &self.dendrite_violet,
            "axon_amber" => &self.axon_amber,
            "neuron_pink" => &self.neuron_pink,
            "myelin_green" => &self.myelin_green,
            _ => return None,
        };
        Some(color.as_str())
    }

    /// Resolves a group color token: palette name, literal hex, or the accent
    /// at `index` as a fallback.
    pub fn resolve_color(&self, token: &str, index: usize) -> String {
        let token = token.trim();
        if let Some(color) = self.named(token) {
            return color.to_string();
        }
        if HEX_COLOR_RE.is_match(token) {
            return token.to_string();
        }
        let accents = self.accents();
        let fallback = accents[index % accents.len()];
        if !token.is_empty() {
            tracing::warn!(token, fallback, "unknown color token, using accent");
        }
        fallback.to_string()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::cosmic()
    }
}

pub fn resolve_arm_colors(arms: &[GalaxyArm], theme: &Theme) -> Vec<String> {
    arms.iter()
        .enumerate()
        .map(|(idx, arm)| theme.resolve_color(&arm.color, idx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_palette_names_and_hex_literals() {
        let theme = Theme::cosmic();
        assert_eq!(theme.resolve_color("axon_amber", 0), theme.axon_amber);
        assert_eq!(theme.resolve_color("#abc", 0), "#abc");
        assert_eq!(theme.resolve_color(" #A1B2C3 ", 0), "#A1B2C3");
    }

    #[test]
    fn unknown_tokens_cycle_through_accents() {
        let theme = Theme::cosmic();
        assert_eq!(theme.resolve_color("plaid", 0), theme.synapse_cyan);
        assert_eq!(theme.resolve_color("", 1), theme.dendrite_violet);
        assert_eq!(theme.resolve_color("#12345", 5), theme.synapse_cyan);
    }

    #[test]
    fn arm_colors_follow_arm_order() {
        let theme = Theme::daylight();
        let arms = vec![
            GalaxyArm::new("A", "myelin_green", &[]),
            GalaxyArm::new("B", "nope", &[]),
        ];
        let colors = resolve_arm_colors(&arms, &theme);
        assert_eq!(colors, vec![theme.myelin_green.clone(), theme.dendrite_violet.clone()]);
    }
}
