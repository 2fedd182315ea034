//! Frame-stepped counter animation for the stats cards.

/// Moves a displayed integer toward a target over a fixed number of frames.
///
/// Every frame covers `1 / frames_remaining` of the distance still left, so
/// the last frame lands exactly on the target.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    current: f64,
    target: i64,
    frames_remaining: u32,
}

impl CounterAnimation {
    pub fn new(from: i64, to: i64, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = if frame_ms == 0 { 0 } else { duration_ms / frame_ms };
        let frames_remaining = if from == to { 0 } else { frames.max(1) };
        Self {
            current: from as f64,
            target: to,
            frames_remaining,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.frames_remaining == 0
    }

    /// Value to render right now
    pub fn displayed(&self) -> i64 {
        if self.is_finished() {
            self.target
        } else {
            self.current.round() as i64
        }
    }

    /// Advance one frame and return the value to render
    pub fn tick(&mut self) -> i64 {
        if self.is_finished() {
            return self.target;
        }

        let target = self.target as f64;
        let step = (target - self.current) / self.frames_remaining as f64;
        self.current += step;
        self.frames_remaining -= 1;

        let overshot = (step > 0.0 && self.current >= target) || (step < 0.0 && self.current <= target);
        if overshot || self.frames_remaining == 0 {
            self.current = target;
            self.frames_remaining = 0;
        }

        self.displayed()
    }
}
