use serde::Serialize;

use super::random::deterministic_random;
use super::ramp::SizeRamp;
use super::zone::Zone;

/// Smallest usable extent a zone collapses to when its padding swallows it.
const MIN_USABLE: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedItem {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackParams {
    pub inner_padding: f32,
    /// Jitter bound as a fraction of the cell size.
    pub jitter_ratio: f32,
    pub ramp: SizeRamp,
}

impl Default for PackParams {
    fn default() -> Self {
        Self {
            inner_padding: 20.0,
            jitter_ratio: 0.25,
            ramp: SizeRamp::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    /// Columns follow the rectangle's aspect ratio so cells stay close to
    /// square: `cols = ceil(sqrt(n * w / h))`.
    pub fn for_items(count: usize, usable_width: f32, usable_height: f32) -> Self {
        let ratio = f64::from(usable_width) / f64::from(usable_height.max(MIN_USABLE));
        let cols = ((count as f64 * ratio).sqrt().ceil() as usize).max(1);
        let rows = count.div_ceil(cols);
        Self { rows, cols }
    }
}

/// The zone shrunk by `padding` on every side. A side that would vanish is
/// replaced by a `MIN_USABLE` extent centred in the zone.
pub fn usable_rect(zone: &Zone, padding: f32) -> Zone {
    let (x, width) = shrink_axis(zone.x, zone.width, padding);
    let (y, height) = shrink_axis(zone.y, zone.height, padding);
    Zone::new(x, y, width, height)
}

fn shrink_axis(start: f32, extent: f32, padding: f32) -> (f32, f32) {
    let usable = extent - padding * 2.0;
    if usable > 0.0 {
        (start + padding, usable)
    } else {
        (start + (extent - MIN_USABLE) / 2.0, MIN_USABLE)
    }
}

/// Places every item of one group inside `zone`, in input order.
pub fn pack(zone: &Zone, items: &[String], seed_base: &str, params: &PackParams) -> Vec<PlacedItem> {
    let n = items.len();
    if n == 0 {
        return Vec::new();
    }

    let usable = usable_rect(zone, params.inner_padding);
    let shape = GridShape::for_items(n, usable.width, usable.height);
    let cell_w = usable.width / shape.cols as f32;
    let cell_h = usable.height / shape.rows as f32;
    tracing::debug!(
        seed_base,
        items = n,
        rows = shape.rows,
        cols = shape.cols,
        "packed group grid"
    );

    let jitter_x = cell_w * params.jitter_ratio;
    let jitter_y = cell_h * params.jitter_ratio;
    let jx = deterministic_random(&format!("{seed_base}:jx"), n, -jitter_x, jitter_x);
    let jy = deterministic_random(&format!("{seed_base}:jy"), n, -jitter_y, jitter_y);

    items
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let col = i % shape.cols;
            let row = i / shape.cols;
            let cx = usable.x + (col as f32 + 0.5) * cell_w;
            let cy = usable.y + (row as f32 + 0.5) * cell_h;
            PlacedItem {
                x: (cx + jx[i]).clamp(usable.x, usable.right()),
                y: (cy + jy[i]).clamp(usable.y, usable.bottom()),
                radius: params.ramp.radius_for(i, n),
                label: label.clone(),
            }
        })
        .collect()
}
