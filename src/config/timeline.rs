use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{ReelError, ReelResult};

/// Fixed dimensions and phase timings shared by every phase and style engine.
///
/// Loaded once when a composition is defined and passed explicitly; nothing in the
/// crate reads these values from ambient state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Output width in pixels.
    pub width: f64,
    /// Output height in pixels.
    pub height: f64,
    /// Frames per second.
    pub fps: u32,
    /// Height of the caption bar across the top of the frame.
    pub bar_height: f64,
    /// Logo phase length in seconds.
    pub static_secs: f64,
    /// Logo-to-content cross-fade length in seconds.
    pub transition_secs: f64,
    /// Logo fade-in length in seconds.
    pub logo_fade_in_secs: f64,
    /// Caption bar gradient stops, left to right (straight RGBA8).
    pub gradient: [[u8; 4]; 3],
    /// Caption shown in the bar before the first subtitle.
    pub welcome_text: String,
    /// Caption font size in pixels.
    pub font_size: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            fps: 60,
            bar_height: 80.0,
            static_secs: 6.5,
            transition_secs: 3.5,
            logo_fade_in_secs: 2.0,
            gradient: [
                [0xC6, 0x16, 0x8D, 0xFF],
                [0x66, 0x2D, 0x91, 0xFF],
                [0x00, 0xA1, 0xC7, 0xFF],
            ],
            welcome_text: "Welcome to 6.390!".to_string(),
            font_size: 40.0,
        }
    }
}

impl TimelineConfig {
    pub fn fps(&self) -> Fps {
        Fps {
            num: self.fps.max(1),
            den: 1,
        }
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width.round() as u32,
            height: self.height.round() as u32,
        }
    }

    /// Height of the photo area below the caption bar.
    pub fn bg_height(&self) -> f64 {
        self.height - self.bar_height
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Content (staff showcase) start, in seconds.
    pub fn dynamic_start_secs(&self) -> f64 {
        self.static_secs + self.transition_secs
    }

    pub fn seconds_to_frames(&self, secs: f64) -> u64 {
        self.fps().secs_to_frames_round(secs)
    }

    pub fn frames_to_seconds(&self, frame: FrameIndex) -> f64 {
        self.fps().frames_to_secs(frame.0)
    }

    pub fn static_frames(&self) -> u64 {
        self.seconds_to_frames(self.static_secs)
    }

    pub fn transition_frames(&self) -> u64 {
        self.seconds_to_frames(self.transition_secs)
    }

    pub fn dynamic_start_frame(&self) -> u64 {
        self.seconds_to_frames(self.dynamic_start_secs())
    }

    pub fn validate(&self) -> ReelResult<()> {
        if self.fps == 0 {
            return Err(ReelError::validation("timeline fps must be > 0"));
        }
        for (name, v) in [("width", self.width), ("height", self.height)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ReelError::validation(format!(
                    "timeline {name} must be finite and > 0"
                )));
            }
        }
        if !self.bar_height.is_finite() || self.bar_height < 0.0 || self.bar_height >= self.height
        {
            return Err(ReelError::validation(
                "timeline bar_height must be in [0, height)",
            ));
        }
        for (name, v) in [
            ("static_secs", self.static_secs),
            ("transition_secs", self.transition_secs),
            ("logo_fade_in_secs", self.logo_fade_in_secs),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ReelError::validation(format!(
                    "timeline {name} must be finite and >= 0"
                )));
            }
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ReelError::validation(
                "timeline font_size must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/timeline.rs"]
mod tests;
