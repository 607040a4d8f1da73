use avsin_core::{BinocularGazeSample, Record};
use avsin_timing::{EyeTrackerTargetPlayerSynchronization, TargetStartTime};

/// Eye-tracking data gathered during one trial, written with the trial's response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EyeTrackingCapture {
    pub target_start_time: Option<TargetStartTime>,
    pub gaze_samples: Vec<BinocularGazeSample>,
    pub synchronization: Option<EyeTrackerTargetPlayerSynchronization>,
}

impl EyeTrackingCapture {
    /// Recording window covering both fades, the target, and the scheduled target delay.
    pub fn recording_time_seconds(
        target_duration_seconds: f64,
        fade_time_seconds: f64,
        additional_target_delay_seconds: f64,
    ) -> f64 {
        target_duration_seconds + 2.0 * fade_time_seconds + additional_target_delay_seconds
    }

    pub fn into_records(self) -> Vec<Record> {
        let mut records = vec![Record::EyeGazes(self.gaze_samples)];
        if let Some(time) = self.target_start_time {
            records.push(Record::TargetStartTime(time));
        }
        if let Some(sync) = self.synchronization {
            records.push(Record::Synchronization(sync));
        }
        records
    }
}
