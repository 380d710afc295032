pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.2;

const MAX_STEPS: u8 = 10;
// ZOOM_STEP is 1/5; dividing whole numbers keeps every step the closest f64
const STEPS_PER_UNIT: u8 = 5;

/// Multiplicative scale applied to the displayed image's base width.
///
/// Stored as a count of `ZOOM_STEP` increments above `MIN_ZOOM` so that
/// stepping never accumulates floating point drift: five steps up from
/// 1.0 is exactly 2.0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ZoomLevel {
    steps: u8,
}

impl ZoomLevel {
    pub const MIN: ZoomLevel = ZoomLevel { steps: 0 };
    pub const MAX: ZoomLevel = ZoomLevel { steps: MAX_STEPS };

    /// Clamp an arbitrary factor into range and snap it to the step grid.
    pub fn from_factor(factor: f64) -> Self {
        if factor.is_nan() {
            return Self::MIN;
        }
        let clamped = factor.clamp(MIN_ZOOM, MAX_ZOOM);
        let steps = ((clamped - MIN_ZOOM) / ZOOM_STEP).round() as u8;
        Self {
            steps: steps.min(MAX_STEPS),
        }
    }

    pub fn factor(self) -> f64 {
        f64::from(STEPS_PER_UNIT + self.steps) / f64::from(STEPS_PER_UNIT)
    }

    /// One step up, clamped at `MAX_ZOOM`.
    pub fn zoom_in(self) -> Self {
        Self {
            steps: (self.steps + 1).min(MAX_STEPS),
        }
    }

    /// One step down, clamped at `MIN_ZOOM`.
    pub fn zoom_out(self) -> Self {
        Self {
            steps: self.steps.saturating_sub(1),
        }
    }

    pub fn can_zoom_in(self) -> bool {
        self.steps < MAX_STEPS
    }

    pub fn can_zoom_out(self) -> bool {
        self.steps > 0
    }

    /// Label for the control bar, e.g. "140%".
    pub fn percent_label(self) -> String {
        format!("{}%", 100 + u32::from(self.steps) * 20)
    }
}
