use serde::Serialize;

use crate::error::{LayoutError, Result};

/// A rectangle of canvas owned by exactly one group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Zone {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Zone {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// Vertical extent shared by every zone; chosen by the card, not the
/// partitioner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub y: f32,
    pub height: f32,
}

/// Splits the canvas width, less `outer_padding` on both sides, into
/// `group_count` equal zones laid out left to right.
pub fn partition(
    canvas_width: f32,
    outer_padding: f32,
    group_count: usize,
    band: Band,
) -> Result<Vec<Zone>> {
    if group_count == 0 {
        return Err(LayoutError::NoGroups);
    }
    if !canvas_width.is_finite() || canvas_width < 0.0 {
        return Err(LayoutError::InvalidCanvas {
            width: canvas_width,
        });
    }
    if !band.height.is_finite() || band.height < 0.0 {
        return Err(LayoutError::InvalidCanvasHeight {
            height: band.height,
        });
    }
    if !outer_padding.is_finite() || outer_padding < 0.0 {
        return Err(LayoutError::InvalidPadding {
            padding: outer_padding,
        });
    }
    let available = canvas_width - outer_padding * 2.0;
    if available <= 0.0 {
        return Err(LayoutError::CanvasTooNarrow {
            width: canvas_width,
            padding: outer_padding,
        });
    }

    let zone_width = available / group_count as f32;
    tracing::debug!(group_count, zone_width, "partitioned canvas");
    Ok((0..group_count)
        .map(|idx| {
            Zone::new(
                outer_padding + idx as f32 * zone_width,
                band.y,
                zone_width,
                band.height,
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAND: Band = Band {
        y: 50.0,
        height: 400.0,
    };

    #[test]
    fn four_groups_on_default_canvas() {
        let zones = partition(850.0, 20.0, 4, BAND).unwrap();
        assert_eq!(zones.len(), 4);
        assert_eq!(zones[0].x, 20.0);
        for zone in &zones {
            assert_eq!(zone.width, 202.5);
            assert_eq!(zone.y, 50.0);
            assert_eq!(zone.height, 400.0);
        }
        for pair in zones.windows(2) {
            assert_eq!(pair[0].right(), pair[1].x);
        }
        assert_eq!(zones[3].right(), 830.0);
    }

    #[test]
    fn single_group_spans_the_padded_canvas() {
        let zones = partition(850.0, 20.0, 1, BAND).unwrap();
        assert_eq!(zones, vec![Zone::new(20.0, 50.0, 810.0, 400.0)]);
    }

    #[test]
    fn zero_groups_is_a_configuration_error() {
        assert_eq!(partition(850.0, 20.0, 0, BAND), Err(LayoutError::NoGroups));
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        assert_eq!(
            partition(-1.0, 20.0, 2, BAND),
            Err(LayoutError::InvalidCanvas { width: -1.0 })
        );
        assert_eq!(
            partition(850.0, -5.0, 2, BAND),
            Err(LayoutError::InvalidPadding { padding: -5.0 })
        );
        assert!(matches!(
            partition(850.0, 20.0, 2, Band { y: 0.0, height: -3.0 }),
            Err(LayoutError::InvalidCanvasHeight { .. })
        ));
        assert!(matches!(
            partition(f32::NAN, 20.0, 2, BAND),
            Err(LayoutError::InvalidCanvas { .. })
        ));
    }

    #[test]
    fn padding_that_eats_the_canvas_is_rejected() {
        assert_eq!(
            partition(40.0, 20.0, 3, BAND),
            Err(LayoutError::CanvasTooNarrow {
                width: 40.0,
                padding: 20.0
            })
        );
    }
}
