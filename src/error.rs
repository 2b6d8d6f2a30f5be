#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("cannot partition a canvas into zero groups")]
    NoGroups,
    #[error("canvas width must be a finite, non-negative number (got {width})")]
    InvalidCanvas { width: f32 },
    #[error("canvas height must be a finite, non-negative number (got {height})")]
    InvalidCanvasHeight { height: f32 },
    #[error("padding must be a finite, non-negative number (got {padding})")]
    InvalidPadding { padding: f32 },
    #[error("canvas width {width} leaves no room after {padding} padding on each side")]
    CanvasTooNarrow { width: f32, padding: f32 },
    #[error("zone band must be finite and fit the canvas (top {top}, bottom {bottom})")]
    InvalidZoneBand { top: f32, bottom: f32 },
    #[error("jitter ratio must be a finite, non-negative number (got {ratio})")]
    InvalidJitterRatio { ratio: f32 },
    #[error("star radius must be a finite, non-negative number (got {radius})")]
    InvalidRadius { radius: f32 },
    #[error("star radius ramp is inverted: max {max} is smaller than min {min}")]
    InvertedRadiusRamp { max: f32, min: f32 },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
