use serde::{Deserialize, Serialize};

/// Clock of an audio player, expressed in the player's native system ticks.
pub trait PlayerClock {
    /// Converts a player timestamp to nanoseconds on the host clock.
    fn nanoseconds(&self, time: PlayerTime) -> u64;
    fn current_system_time(&self) -> PlayerTime;
    fn sample_rate_hz(&self) -> f64;
}

/// Raw system timestamp reported by the audio subsystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTime {
    pub system: u64,
}

/// A point inside an audio buffer: the buffer's timestamp plus a frame offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSampleTimeWithOffset {
    pub player_time: PlayerTime,
    pub sample_offset: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerTimeWithDelay {
    pub player_time: PlayerTime,
    pub delay_seconds: f64,
}

impl PlayerTimeWithDelay {
    /// Schedules playback `extra_delay_seconds` after the frame at `time`.
    pub fn after(
        time: AudioSampleTimeWithOffset,
        sample_rate_hz: f64,
        extra_delay_seconds: f64,
    ) -> Self {
        Self {
            player_time: time.player_time,
            delay_seconds: offset_seconds(time.sample_offset, sample_rate_hz) + extra_delay_seconds,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetStartTime {
    pub nanoseconds: u64,
}

impl TargetStartTime {
    pub fn resolve<C: PlayerClock + ?Sized>(clock: &C, at: PlayerTimeWithDelay) -> Self {
        Self {
            nanoseconds: clock.nanoseconds(at.player_time)
                + seconds_to_nanoseconds(at.delay_seconds),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetPlayerSystemTime {
    pub nanoseconds: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EyeTrackerSystemTime {
    pub microseconds: i64,
}

/// Simultaneous readings of both clocks, used to align gaze samples with audio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EyeTrackerTargetPlayerSynchronization {
    pub eye_tracker_system_time: EyeTrackerSystemTime,
    pub target_player_system_time: TargetPlayerSystemTime,
}

fn offset_seconds(sample_offset: usize, sample_rate_hz: f64) -> f64 {
    if sample_rate_hz > 0.0 {
        sample_offset as f64 / sample_rate_hz
    } else {
        0.0
    }
}

/// Truncates toward zero; negative inputs map to zero.
pub fn seconds_to_nanoseconds(seconds: f64) -> u64 {
    (seconds * 1e9).max(0.0) as u64
}
