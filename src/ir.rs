use serde::{Deserialize, Serialize};

/// One named group of skills. Item order is significant: earlier items are
/// drawn larger and the constellation path follows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalaxyArm {
    pub name: String,
    /// Palette name (`synapse_cyan`) or a literal `#rrggbb` color.
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl GalaxyArm {
    pub fn new(name: impl Into<String>, color: impl Into<String>, items: &[&str]) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            items: items.iter().map(|item| item.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: i32,
    pub label: String,
    /// Index into the profile's galaxy arms, used for coloring.
    #[serde(default)]
    pub arm: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionDay {
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// 0 = Sunday .. 6 = Saturday.
    #[serde(default)]
    pub weekday: u8,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributions {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub weeks: Vec<Vec<ContributionDay>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub galaxy_arms: Vec<GalaxyArm>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub contributions: Contributions,
}

impl Profile {
    pub fn total_items(&self) -> usize {
        self.galaxy_arms.iter().map(|arm| arm.items.len()).sum()
    }
}

pub fn parse_profile(input: &str) -> anyhow::Result<Profile> {
    let profile: Profile = json5::from_str(input)?;
    Ok(profile)
}
