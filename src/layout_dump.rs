use crate::layout::{CardData, Layout};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub kind: String,
    pub width: f32,
    pub height: f32,
    pub groups: Vec<GroupDump>,
}

#[derive(Debug, Serialize)]
pub struct GroupDump {
    pub index: usize,
    pub name: String,
    pub color: String,
    /// `[x, y, width, height]`.
    pub zone: [f32; 4],
    pub items: Vec<ItemDump>,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Serialize)]
pub struct ItemDump {
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub from: usize,
    pub to: usize,
    pub length: f32,
    pub closing: bool,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        let groups = match &layout.card {
            CardData::Constellation(data) => data
                .groups
                .iter()
                .map(|group| GroupDump {
                    index: group.index,
                    name: group.name.clone(),
                    color: group.color.clone(),
                    zone: [
                        group.zone.x,
                        group.zone.y,
                        group.zone.width,
                        group.zone.height,
                    ],
                    items: group
                        .stars
                        .iter()
                        .map(|star| ItemDump {
                            label: star.label.clone(),
                            x: star.x,
                            y: star.y,
                            radius: star.radius,
                        })
                        .collect(),
                    edges: group
                        .edges
                        .iter()
                        .map(|edge| EdgeDump {
                            from: edge.from,
                            to: edge.to,
                            length: edge.length,
                            closing: edge.closing,
                        })
                        .collect(),
                })
                .collect(),
            _ => Vec::new(),
        };

        LayoutDump {
            kind: layout.kind.file_stem().to_string(),
            width: layout.width,
            height: layout.height,
            groups,
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &Layout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::ir::{GalaxyArm, Profile};
    use crate::layout::{compute_layout, CardKind};
    use crate::theme::Theme;

    #[test]
    fn dumps_constellation_groups_as_json() {
        let profile = Profile {
            galaxy_arms: vec![GalaxyArm::new("Data", "myelin_green", &["SQL", "Spark", "dbt", "Kafka"])],
            ..Profile::default()
        };
        let layout = compute_layout(
            CardKind::SkillConstellation,
            &profile,
            &Theme::cosmic(),
            &LayoutConfig::default(),
        )
        .unwrap();
        let dump = LayoutDump::from_layout(&layout);
        assert_eq!(dump.kind, "skill-constellation");
        assert_eq!(dump.groups[0].items.len(), 4);
        assert_eq!(dump.groups[0].edges.len(), 4);

        let json = serde_json::to_value(&dump).unwrap();
        assert_eq!(json["groups"][0]["name"], "Data");
        assert_eq!(json["groups"][0]["edges"][3]["closing"], true);
        assert_eq!(json["groups"][0]["zone"][2], 810.0);
    }
}
