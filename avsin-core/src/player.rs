use crate::error::{InvalidAudioDevice, InvalidAudioFile};
use avsin_timing::{PlayerClock, PlayerTimeWithDelay};

/// Plays a single speech target, optionally with its video track.
pub trait TargetPlayer {
    fn load_file(&mut self, path: &str) -> Result<(), InvalidAudioFile>;
    fn set_level_db(&mut self, level_db: f64);
    /// Per-channel RMS of the loaded file.
    fn rms(&self) -> f64;
    fn play(&mut self);
    fn play_at(&mut self, at: PlayerTimeWithDelay);
    fn set_audio_device(&mut self, device: &str) -> Result<(), InvalidAudioDevice>;
    fn duration_seconds(&self) -> f64;
    fn show_video(&mut self);
    fn hide_video(&mut self);
    fn use_all_channels(&mut self);
    fn use_first_channel_only(&mut self);
    fn use_second_channel_only(&mut self);
    /// Asks the player to report `PlaybackComplete` when the target ends.
    fn subscribe_to_playback_completion(&mut self);
}

/// Loops the masking noise, fading it in and out around each trial.
pub trait MaskerPlayer: PlayerClock {
    fn load_file(&mut self, path: &str) -> Result<(), InvalidAudioFile>;
    fn set_level_db(&mut self, level_db: f64);
    fn rms(&self) -> f64;
    fn fade_in(&mut self);
    fn fade_out(&mut self);
    fn playing(&self) -> bool;
    fn set_audio_device(&mut self, device: &str) -> Result<(), InvalidAudioDevice>;
    fn duration_seconds(&self) -> f64;
    fn fade_time_seconds(&self) -> f64;
    fn seek_seconds(&mut self, seconds: f64);
    fn use_all_channels(&mut self);
    fn use_first_channel_only(&mut self);
    fn clear_channel_delays(&mut self);
    fn set_channel_delay_seconds(&mut self, channel: usize, seconds: f64);
    fn output_audio_device_descriptions(&self) -> Vec<String>;
}

/// Decibels of an RMS amplitude relative to full scale.
pub fn db(rms: f64) -> f64 {
    20.0 * rms.log10()
}
