pub mod timer;

pub use timer::{
    seconds_to_nanoseconds, AudioSampleTimeWithOffset, EyeTrackerSystemTime,
    EyeTrackerTargetPlayerSynchronization, PlayerClock, PlayerTime, PlayerTimeWithDelay,
    TargetPlayerSystemTime, TargetStartTime,
};
