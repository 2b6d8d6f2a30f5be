/// Linear radius falloff by position within a group: the first item is the
/// largest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRamp {
    pub max_radius: f32,
    pub min_radius: f32,
}

impl SizeRamp {
    pub fn new(max_radius: f32, min_radius: f32) -> Self {
        Self {
            max_radius,
            min_radius,
        }
    }

    pub fn radius_for(&self, index: usize, total: usize) -> f32 {
        let denom = total.saturating_sub(1).max(1) as f32;
        let t = index as f32 / denom;
        self.max_radius - t * (self.max_radius - self.min_radius)
    }
}

impl Default for SizeRamp {
    fn default() -> Self {
        Self::new(6.0, 3.0)
    }
}
