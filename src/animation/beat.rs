use crate::foundation::error::{ReelError, ReelResult};

/// How long a bob lasts after its beat, in seconds.
pub const BOB_DURATION_SECS: f64 = 0.45;
/// Peak bob rotation in degrees.
pub const BOB_MAX_DEG: f64 = 6.0;

/// Ascending beat timestamps in seconds.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct BeatTrack {
    beats: Vec<f64>,
}

impl BeatTrack {
    /// Build a track, sorting the timestamps ascending.
    pub fn new(mut beats: Vec<f64>) -> ReelResult<Self> {
        if let Some(bad) = beats.iter().find(|b| !b.is_finite()) {
            return Err(ReelError::validation(format!(
                "beat timestamp must be finite, got {bad}"
            )));
        }
        beats.sort_by(f64::total_cmp);
        Ok(Self { beats })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.beats
    }

    pub fn len(&self) -> usize {
        self.beats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }

    /// The same beats on a timeline starting at `origin_secs`; earlier beats are dropped.
    pub fn relative_to(&self, origin_secs: f64) -> Self {
        Self {
            beats: self
                .beats
                .iter()
                .map(|b| b - origin_secs)
                .filter(|b| *b >= 0.0)
                .collect(),
        }
    }

    /// Latest beat at or before `t`.
    pub fn last_beat_at_or_before(&self, t: f64) -> Option<f64> {
        let idx = self.beats.partition_point(|b| *b <= t);
        idx.checked_sub(1).map(|i| self.beats[i])
    }

    /// Snap-and-settle rotation (degrees) for element `index` at time `t`.
    pub fn bob(&self, t: f64, index: usize) -> f64 {
        let Some(last) = self.last_beat_at_or_before(t) else {
            return 0.0;
        };
        let elapsed = t - last;
        if elapsed > BOB_DURATION_SECS {
            return 0.0;
        }

        let progress = elapsed / BOB_DURATION_SECS;
        let decay = 1.0 - progress * progress;
        (progress * std::f64::consts::PI).sin() * decay * BOB_MAX_DEG * bob_direction(index)
    }
}

/// `-1`, `0` or `+1` from `index mod 3`, with zero replaced by even/odd alternation.
pub fn bob_direction(index: usize) -> f64 {
    match index % 3 {
        0 => -1.0,
        2 => 1.0,
        _ if index % 2 == 0 => 1.0,
        _ => -1.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/beat.rs"]
mod tests;
