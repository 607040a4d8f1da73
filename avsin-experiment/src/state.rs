use crate::config::EngineConfig;
use crate::method::TestMethod;
use crate::trial::EyeTrackingCapture;
use avsin_core::{
    AdaptiveTestResult, AudioSettings, Calibration, ChannelMode, Condition, ConsonantResponse,
    CoordinateResponse, CorrectKeywords, EyeTracker, FreeResponse, FreeResponseTrial,
    MaskerPlayer, OutputFile, Randomizer, Record, RequestFailure, ResponseEvaluator, Test,
    TargetPlayer, TrialState, db,
};
use avsin_timing::{
    AudioSampleTimeWithOffset, EyeTrackerTargetPlayerSynchronization, PlayerTimeWithDelay,
    TargetPlayerSystemTime, TargetStartTime,
};
use tracing::{debug, info, warn};

/// Notifications raised by the masker and target players.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    FadeInComplete(AudioSampleTimeWithOffset),
    PlaybackComplete,
    FadeOutComplete,
}

pub trait EventListener {
    fn trial_complete(&mut self);
}

/// Runs a test one trial at a time: levels and loads the players, sequences
/// masker and target playback, and routes responses to the test method.
pub struct RecognitionTestModel<T, M, E, O, R, Y>
where
    T: TargetPlayer,
    M: MaskerPlayer,
    E: ResponseEvaluator,
    O: OutputFile,
    R: Randomizer,
    Y: EyeTracker,
{
    pub target_player: T,
    pub masker_player: M,
    pub evaluator: E,
    pub output_file: O,
    pub randomizer: R,
    pub eye_tracker: Y,
    pub config: EngineConfig,
    listener: Option<Box<dyn EventListener>>,
    method: Option<Box<dyn TestMethod>>,
    state: TrialState,
    trial_number: usize,
    masker_level_db: f64,
    condition: Condition,
    eye_tracking: bool,
    capture: EyeTrackingCapture,
}

impl<T, M, E, O, R, Y> RecognitionTestModel<T, M, E, O, R, Y>
where
    T: TargetPlayer,
    M: MaskerPlayer,
    E: ResponseEvaluator,
    O: OutputFile,
    R: Randomizer,
    Y: EyeTracker,
{
    pub fn new(
        target_player: T,
        masker_player: M,
        evaluator: E,
        output_file: O,
        randomizer: R,
        eye_tracker: Y,
        config: EngineConfig,
    ) -> Self {
        Self {
            target_player,
            masker_player,
            evaluator,
            output_file,
            randomizer,
            eye_tracker,
            config,
            listener: None,
            method: None,
            state: TrialState::Idle,
            trial_number: 0,
            masker_level_db: 0.0,
            condition: Condition::AuditoryOnly,
            eye_tracking: false,
            capture: EyeTrackingCapture::default(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn EventListener>) {
        self.listener = Some(listener);
    }

    pub fn initialize(
        &mut self,
        method: Box<dyn TestMethod>,
        test: &Test,
    ) -> Result<(), RequestFailure> {
        self.initialize_(method, test, false)
    }

    pub fn initialize_with_eye_tracking(
        &mut self,
        method: Box<dyn TestMethod>,
        test: &Test,
    ) -> Result<(), RequestFailure> {
        self.initialize_(method, test, true)
    }

    fn initialize_(
        &mut self,
        mut method: Box<dyn TestMethod>,
        test: &Test,
        eye_tracking: bool,
    ) -> Result<(), RequestFailure> {
        self.throw_if_trial_in_progress()?;

        if method.complete() {
            info!("test already complete at initialization");
            self.method = Some(method);
            self.state = TrialState::TestComplete;
            return Ok(());
        }

        self.output_file.close();
        self.output_file.open_new_file(&test.identity)?;
        self.masker_player.load_file(&test.masker_file_path)?;
        let masker_level_db = f64::from(test.masker_level_db_spl - test.full_scale_level_db_spl)
            - db(self.masker_player.rms());

        // Routing and levels stay untouched unless the first target loads.
        self.prepare_next_trial(method.as_mut(), masker_level_db)?;
        self.route_channels(test.channel_mode);
        self.masker_player.set_level_db(masker_level_db);
        self.masker_level_db = masker_level_db;
        self.target_player.hide_video();
        method.write_testing_parameters(&mut self.output_file);

        self.trial_number = 1;
        self.condition = test.condition;
        self.eye_tracking = eye_tracking;
        self.capture = EyeTrackingCapture::default();
        self.method = Some(method);
        self.state = TrialState::ReadyForTrial;
        info!(
            subject = %test.identity.subject_id,
            method = %test.identity.method,
            eye_tracking,
            "test initialized"
        );
        Ok(())
    }

    fn route_channels(&mut self, mode: ChannelMode) {
        self.masker_player.clear_channel_delays();
        match mode {
            ChannelMode::AllChannels => {
                self.target_player.use_all_channels();
                self.masker_player.use_all_channels();
            }
            ChannelMode::SingleSpeaker => {
                self.target_player.use_first_channel_only();
                self.masker_player.use_first_channel_only();
            }
            ChannelMode::DelayedMasker => {
                self.target_player.use_first_channel_only();
                self.masker_player.use_all_channels();
                self.masker_player
                    .set_channel_delay_seconds(0, self.config.masker_channel_delay_seconds);
            }
        }
    }

    fn throw_if_trial_in_progress(&self) -> Result<(), RequestFailure> {
        if self.masker_player.playing() {
            warn!(state = ?self.state, "request rejected while trial in progress");
            return Err(RequestFailure::trial_in_progress());
        }
        Ok(())
    }

    fn prepare_next_trial(
        &mut self,
        method: &mut dyn TestMethod,
        masker_level_db: f64,
    ) -> Result<(), RequestFailure> {
        let target = method.next_target();
        self.target_player.load_file(&target)?;
        let target_level_db =
            masker_level_db + f64::from(method.snr_db()) - db(self.target_player.rms());
        self.target_player.set_level_db(target_level_db);
        self.target_player.subscribe_to_playback_completion();

        let upper_limit = self.masker_player.duration_seconds()
            - 2.0 * self.masker_player.fade_time_seconds()
            - self.target_player.duration_seconds();
        let seek = self.randomizer.between(0.0, upper_limit);
        self.masker_player.seek_seconds(seek);
        debug!(%target, target_level_db, seek, upper_limit, "next trial prepared");
        Ok(())
    }

    pub fn prepare_next_trial_if_needed(&mut self) -> Result<(), RequestFailure> {
        self.throw_if_trial_in_progress()?;
        let Some(mut method) = self.method.take() else {
            return Ok(());
        };
        let result = if method.complete() {
            Ok(())
        } else {
            self.prepare_next_trial(method.as_mut(), self.masker_level_db).map(|()| {
                self.state = TrialState::ReadyForTrial;
            })
        };
        self.method = Some(method);
        result
    }

    /// Resets every track, then readies the next target of the same lists.
    pub fn restart_preserving_targets(&mut self) -> Result<(), RequestFailure> {
        self.throw_if_trial_in_progress()?;
        if let Some(method) = self.method.as_mut() {
            method.reset_tracks();
        }
        self.prepare_next_trial_if_needed()
    }

    pub fn play_trial(&mut self, settings: &AudioSettings) -> Result<(), RequestFailure> {
        self.throw_if_trial_in_progress()?;
        if self.method.is_none() || self.state == TrialState::TestComplete {
            warn!(state = ?self.state, "trial requested with no test in progress");
            return Err(RequestFailure::no_test_in_progress());
        }
        self.masker_player.set_audio_device(&settings.audio_device)?;
        self.target_player.set_audio_device(&settings.audio_device)?;
        if self.condition != Condition::AuditoryOnly {
            self.target_player.show_video();
        }
        self.capture = EyeTrackingCapture::default();
        if self.eye_tracking {
            self.eye_tracker
                .allocate_recording_time_seconds(EyeTrackingCapture::recording_time_seconds(
                    self.target_player.duration_seconds(),
                    self.masker_player.fade_time_seconds(),
                    self.config.additional_target_delay_seconds,
                ));
            self.eye_tracker.start();
        }
        self.masker_player.fade_in();
        self.state = TrialState::MaskerFadingIn;
        info!(trial = self.trial_number, "trial started");
        Ok(())
    }

    pub fn handle_event(&mut self, event: PlayerEvent) {
        match (self.state, event) {
            (TrialState::MaskerFadingIn, PlayerEvent::FadeInComplete(time)) => {
                self.play_target(time);
                self.state = TrialState::TargetPlaying;
            }
            (TrialState::TargetPlaying, PlayerEvent::PlaybackComplete) => {
                self.masker_player.fade_out();
                self.state = TrialState::MaskerFadingOut;
            }
            (TrialState::MaskerFadingOut, PlayerEvent::FadeOutComplete) => {
                self.finish_trial();
                self.state = TrialState::AwaitingResponse;
                if let Some(listener) = self.listener.as_mut() {
                    listener.trial_complete();
                }
            }
            (state, event) => {
                warn!(?state, ?event, "ignoring player event");
            }
        }
    }

    pub fn fade_in_complete(&mut self, time: AudioSampleTimeWithOffset) {
        self.handle_event(PlayerEvent::FadeInComplete(time));
    }

    pub fn playback_complete(&mut self) {
        self.handle_event(PlayerEvent::PlaybackComplete);
    }

    pub fn fade_out_complete(&mut self) {
        self.handle_event(PlayerEvent::FadeOutComplete);
    }

    fn play_target(&mut self, time: AudioSampleTimeWithOffset) {
        if !self.eye_tracking {
            self.target_player.play();
            return;
        }
        let at = PlayerTimeWithDelay::after(
            time,
            self.masker_player.sample_rate_hz(),
            self.config.additional_target_delay_seconds,
        );
        self.target_player.play_at(at);
        self.capture.target_start_time = Some(TargetStartTime::resolve(&self.masker_player, at));
    }

    fn finish_trial(&mut self) {
        self.target_player.hide_video();
        if !self.eye_tracking {
            return;
        }
        self.eye_tracker.stop();
        self.capture.gaze_samples = self.eye_tracker.gaze_samples();
        self.capture.synchronization = Some(EyeTrackerTargetPlayerSynchronization {
            eye_tracker_system_time: self.eye_tracker.current_system_time(),
            target_player_system_time: TargetPlayerSystemTime {
                nanoseconds: self
                    .masker_player
                    .nanoseconds(self.masker_player.current_system_time()),
            },
        });
    }

    pub fn submit_coordinate_response(
        &mut self,
        response: &CoordinateResponse,
    ) -> Result<(), RequestFailure> {
        self.submit(
            |method| method.submit_coordinate_response(response),
            |method, output| method.write_last_coordinate_response(output),
        )
    }

    pub fn submit_free_response(&mut self, response: &FreeResponse) -> Result<(), RequestFailure> {
        let Some(method) = self.method.as_deref() else {
            return Err(RequestFailure::no_test_in_progress());
        };
        let record = FreeResponseTrial {
            target: self.evaluator.file_name(&method.current_target()),
            response: response.response.clone(),
            flagged: response.flagged,
        };
        self.output_file.write(Record::FreeResponseTrial(record));
        self.submit(|method| method.submit_free_response(response), |_, _| {})
    }

    pub fn submit_correct_keywords(
        &mut self,
        keywords: &CorrectKeywords,
    ) -> Result<(), RequestFailure> {
        self.submit(
            |method| method.submit_correct_keywords(keywords),
            |method, output| method.write_last_correct_keywords(output),
        )
    }

    pub fn submit_consonant(&mut self, response: &ConsonantResponse) -> Result<(), RequestFailure> {
        self.submit(
            |method| method.submit_consonant(response),
            |method, output| method.write_last_consonant(output),
        )
    }

    pub fn submit_correct_response(&mut self) -> Result<(), RequestFailure> {
        self.submit(
            |method| method.submit_correct_response(),
            |method, output| method.write_last_correct_response(output),
        )
    }

    pub fn submit_incorrect_response(&mut self) -> Result<(), RequestFailure> {
        self.submit(
            |method| method.submit_incorrect_response(),
            |method, output| method.write_last_incorrect_response(output),
        )
    }

    fn submit(
        &mut self,
        submit: impl FnOnce(&mut dyn TestMethod),
        write_last: impl FnOnce(&dyn TestMethod, &mut dyn OutputFile),
    ) -> Result<(), RequestFailure> {
        let Some(mut method) = self.method.take() else {
            warn!("response submitted with no test in progress");
            return Err(RequestFailure::no_test_in_progress());
        };
        submit(method.as_mut());
        let output: &mut dyn OutputFile = &mut self.output_file;
        write_last(method.as_ref(), output);
        if self.eye_tracking {
            for record in std::mem::take(&mut self.capture).into_records() {
                self.output_file.write(record);
            }
        }
        self.output_file.save();

        let result = if method.complete() {
            method.write_test_result(&mut self.output_file);
            self.output_file.save();
            self.state = TrialState::TestComplete;
            info!(trials = self.trial_number, "test complete");
            Ok(())
        } else {
            self.trial_number += 1;
            self.prepare_next_trial(method.as_mut(), self.masker_level_db).map(|()| {
                self.state = TrialState::ReadyForTrial;
            })
        };
        self.method = Some(method);
        result
    }

    pub fn play_calibration(&mut self, calibration: &Calibration) -> Result<(), RequestFailure> {
        self.play_calibration_(calibration, |player| player.use_all_channels())
    }

    pub fn play_left_speaker_calibration(
        &mut self,
        calibration: &Calibration,
    ) -> Result<(), RequestFailure> {
        self.play_calibration_(calibration, |player| player.use_first_channel_only())
    }

    pub fn play_right_speaker_calibration(
        &mut self,
        calibration: &Calibration,
    ) -> Result<(), RequestFailure> {
        self.play_calibration_(calibration, |player| player.use_second_channel_only())
    }

    fn play_calibration_(
        &mut self,
        calibration: &Calibration,
        route: impl FnOnce(&mut T),
    ) -> Result<(), RequestFailure> {
        self.throw_if_trial_in_progress()?;
        self.target_player
            .set_audio_device(&calibration.audio_device)?;
        self.target_player.load_file(&calibration.file_path)?;
        let level_db = f64::from(calibration.level_db_spl - calibration.full_scale_level_db_spl)
            - db(self.target_player.rms());
        self.target_player.set_level_db(level_db);
        route(&mut self.target_player);
        match calibration.condition {
            Condition::AuditoryOnly => self.target_player.hide_video(),
            Condition::AudioVisual => self.target_player.show_video(),
        }
        self.target_player.play();
        debug!(file = %calibration.file_path, level_db, "calibration playing");
        Ok(())
    }

    pub fn test_complete(&self) -> bool {
        self.method.as_ref().is_some_and(|method| method.complete())
    }

    pub fn trial_number(&self) -> usize {
        self.trial_number
    }

    pub fn target_file_name(&self) -> String {
        self.method
            .as_ref()
            .map(|method| self.evaluator.file_name(&method.current_target()))
            .unwrap_or_default()
    }

    pub fn audio_devices(&self) -> Vec<String> {
        self.masker_player.output_audio_device_descriptions()
    }

    pub fn trial_state(&self) -> TrialState {
        self.state
    }

    pub fn test_results(&self) -> Vec<AdaptiveTestResult> {
        self.method
            .as_ref()
            .map(|method| method.test_results())
            .unwrap_or_default()
    }
}
