#![allow(dead_code)]

use avsin_core::{
    AdaptiveTestResult, BinocularGazeSample, Color, ConsonantResponse, CoordinateResponse,
    CorrectKeywords, EyeTracker, FreeResponse, InvalidAudioDevice, InvalidAudioFile,
    MaskerPlayer, OpenFailure, OutputFile, Randomizer, Record, ResponseEvaluator, TargetList,
    TargetListReader, TargetPlayer, TestIdentity, Track, TrackFactory, TrackSettings,
};
use avsin_experiment::{EventListener, TestMethod};
use avsin_timing::{EyeTrackerSystemTime, PlayerClock, PlayerTime, PlayerTimeWithDelay};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T: Default>() -> Shared<T> {
    Rc::new(RefCell::new(T::default()))
}

// ---- tracks ----

#[derive(Debug, Default)]
pub struct TrackState {
    pub x: i32,
    pub complete: bool,
    pub reversals: i32,
    pub threshold: f64,
    pub pushed_up: bool,
    pub pushed_down: bool,
    pub reset: bool,
    pub threshold_reversals: Option<i32>,
    pub x_when_pushed: Option<i32>,
    pub reversals_when_pushed: Option<i32>,
    pub complete_when_pushed: bool,
}

impl TrackState {
    fn pushed(&mut self) {
        if let Some(x) = self.x_when_pushed {
            self.x = x;
        }
        if let Some(reversals) = self.reversals_when_pushed {
            self.reversals = reversals;
        }
        if self.complete_when_pushed {
            self.complete = true;
        }
    }
}

pub struct TrackStub(pub Shared<TrackState>);

impl Track for TrackStub {
    fn push_up(&mut self) {
        let mut state = self.0.borrow_mut();
        state.pushed_up = true;
        state.pushed();
    }
    fn push_down(&mut self) {
        let mut state = self.0.borrow_mut();
        state.pushed_down = true;
        state.pushed();
    }
    fn x(&self) -> i32 {
        self.0.borrow().x
    }
    fn complete(&self) -> bool {
        self.0.borrow().complete
    }
    fn reversals(&self) -> i32 {
        self.0.borrow().reversals
    }
    fn reset(&mut self) {
        self.0.borrow_mut().reset = true;
    }
    fn threshold(&self, reversals: i32) -> f64 {
        let mut state = self.0.borrow_mut();
        state.threshold_reversals = Some(reversals);
        state.threshold
    }
}

/// Hands out pre-registered tracks in order, then fresh default ones.
#[derive(Default)]
pub struct TrackFactoryStub {
    pub tracks: VecDeque<Shared<TrackState>>,
    pub settings: Vec<TrackSettings>,
}

impl TrackFactoryStub {
    pub fn with_tracks(count: usize) -> (Self, Vec<Shared<TrackState>>) {
        let tracks: Vec<_> = (0..count).map(|_| shared::<TrackState>()).collect();
        let factory = Self {
            tracks: tracks.iter().cloned().collect(),
            settings: Vec::new(),
        };
        (factory, tracks)
    }
}

impl TrackFactory for TrackFactoryStub {
    fn make(&mut self, settings: &TrackSettings) -> Box<dyn Track> {
        self.settings.push(settings.clone());
        let state = self.tracks.pop_front().unwrap_or_else(shared::<TrackState>);
        Box::new(TrackStub(state))
    }
}

// ---- target lists ----

#[derive(Debug, Default)]
pub struct ListState {
    pub next: String,
    pub current: String,
    pub directory: String,
    pub empty: bool,
    pub empty_after_reinsert: Option<bool>,
    pub loaded_from: Option<String>,
    pub next_called: bool,
    pub reinserted: bool,
    pub log: String,
}

pub struct TargetListStub(pub Shared<ListState>);

impl TargetList for TargetListStub {
    fn load_from_directory(&mut self, directory: &str) {
        let mut state = self.0.borrow_mut();
        state.loaded_from = Some(directory.to_string());
        state.log.push_str("loadFromDirectory ");
    }
    fn next(&mut self) -> String {
        let mut state = self.0.borrow_mut();
        state.next_called = true;
        state.log.push_str("next ");
        state.next.clone()
    }
    fn current(&self) -> String {
        self.0.borrow().current.clone()
    }
    fn directory(&self) -> String {
        self.0.borrow().directory.clone()
    }
    fn empty(&self) -> bool {
        let mut state = self.0.borrow_mut();
        state.log.push_str("empty ");
        state.empty
    }
    fn reinsert_current(&mut self) {
        let mut state = self.0.borrow_mut();
        state.reinserted = true;
        state.log.push_str("reinsertCurrent ");
        if let Some(empty) = state.empty_after_reinsert {
            state.empty = empty;
        }
    }
}

pub fn target_lists(count: usize) -> (Vec<Box<dyn TargetList>>, Vec<Shared<ListState>>) {
    let states: Vec<_> = (0..count).map(|_| shared::<ListState>()).collect();
    let lists = states
        .iter()
        .map(|state| Box::new(TargetListStub(Rc::clone(state))) as Box<dyn TargetList>)
        .collect();
    (lists, states)
}

#[derive(Default)]
pub struct TargetListReaderStub {
    pub lists: Vec<Box<dyn TargetList>>,
    pub directory: Option<String>,
}

impl TargetListReader for TargetListReaderStub {
    fn read(&mut self, directory: &str) -> Vec<Box<dyn TargetList>> {
        self.directory = Some(directory.to_string());
        std::mem::take(&mut self.lists)
    }
}

// ---- evaluator / randomizer ----

#[derive(Default)]
pub struct ResponseEvaluatorStub {
    pub correct: bool,
    pub correct_color: Color,
    pub correct_number: i32,
    pub correct_consonant: char,
    pub file_name: String,
    pub correct_target: RefCell<String>,
    pub correct_color_target: RefCell<String>,
    pub correct_number_target: RefCell<String>,
    pub file_name_target: RefCell<String>,
    pub response: Cell<Option<CoordinateResponse>>,
}

impl ResponseEvaluator for ResponseEvaluatorStub {
    fn correct(&self, target: &str, response: &CoordinateResponse) -> bool {
        *self.correct_target.borrow_mut() = target.to_string();
        self.response.set(Some(*response));
        self.correct
    }
    fn correct_color(&self, target: &str) -> Color {
        *self.correct_color_target.borrow_mut() = target.to_string();
        self.correct_color
    }
    fn correct_number(&self, target: &str) -> i32 {
        *self.correct_number_target.borrow_mut() = target.to_string();
        self.correct_number
    }
    fn correct_consonant(&self, _target: &str) -> char {
        self.correct_consonant
    }
    fn file_name(&self, target: &str) -> String {
        *self.file_name_target.borrow_mut() = target.to_string();
        self.file_name.clone()
    }
}

#[derive(Debug, Default)]
pub struct RandomizerStub {
    pub int_result: i32,
    pub float_result: f64,
    pub lower_int: Option<i32>,
    pub upper_int: Option<i32>,
    pub lower_float: Option<f64>,
    pub upper_float: Option<f64>,
}

impl Randomizer for RandomizerStub {
    fn between(&mut self, lower: f64, upper: f64) -> f64 {
        self.lower_float = Some(lower);
        self.upper_float = Some(upper);
        self.float_result
    }
    fn int_between(&mut self, lower: i32, upper: i32) -> i32 {
        self.lower_int = Some(lower);
        self.upper_int = Some(upper);
        self.int_result
    }
}

// ---- output ----

#[derive(Default)]
pub struct OutputFileStub {
    pub log: String,
    pub records: Vec<Record>,
    pub identity: Option<TestIdentity>,
    pub fail_open: bool,
}

impl OutputFileStub {
    pub fn free_response_trial(&self) -> Option<&avsin_core::FreeResponseTrial> {
        self.records.iter().rev().find_map(|record| match record {
            Record::FreeResponseTrial(trial) => Some(trial),
            _ => None,
        })
    }

    pub fn eye_gazes(&self) -> Option<&Vec<BinocularGazeSample>> {
        self.records.iter().rev().find_map(|record| match record {
            Record::EyeGazes(gazes) => Some(gazes),
            _ => None,
        })
    }

    pub fn target_start_time(&self) -> Option<avsin_timing::TargetStartTime> {
        self.records.iter().rev().find_map(|record| match record {
            Record::TargetStartTime(time) => Some(*time),
            _ => None,
        })
    }

    pub fn synchronization(&self) -> Option<avsin_timing::EyeTrackerTargetPlayerSynchronization> {
        self.records.iter().rev().find_map(|record| match record {
            Record::Synchronization(sync) => Some(*sync),
            _ => None,
        })
    }
}

impl OutputFile for OutputFileStub {
    fn open_new_file(&mut self, identity: &TestIdentity) -> Result<(), OpenFailure> {
        self.log.push_str("openNewFile ");
        self.identity = Some(identity.clone());
        if self.fail_open {
            return Err(OpenFailure {
                reason: "stub".into(),
            });
        }
        Ok(())
    }
    fn write(&mut self, record: Record) {
        self.log.push_str("write ");
        self.records.push(record);
    }
    fn save(&mut self) {
        self.log.push_str("save ");
    }
    fn close(&mut self) {
        self.log.push_str("close ");
    }
}

// ---- players ----

#[derive(Debug, Default)]
pub struct TargetPlayerStub {
    pub log: String,
    pub file_path: String,
    pub level_db: Option<f64>,
    pub rms: f64,
    pub played: bool,
    pub played_at: Option<PlayerTimeWithDelay>,
    pub device: Option<String>,
    pub fail_device: bool,
    pub fail_load: bool,
    pub duration_seconds: f64,
    pub video_shown: bool,
    pub video_hidden: bool,
    pub all_channels: bool,
    pub first_channel_only: bool,
    pub second_channel_only: bool,
    pub subscribed_to_playback_completion: bool,
}

impl TargetPlayerStub {
    pub fn new() -> Self {
        Self {
            rms: 1.0,
            ..Self::default()
        }
    }
}

impl TargetPlayer for TargetPlayerStub {
    fn load_file(&mut self, path: &str) -> Result<(), InvalidAudioFile> {
        self.log.push_str("loadFile ");
        if self.fail_load {
            return Err(InvalidAudioFile { path: path.into() });
        }
        self.file_path = path.to_string();
        Ok(())
    }
    fn set_level_db(&mut self, level_db: f64) {
        self.level_db = Some(level_db);
    }
    fn rms(&self) -> f64 {
        self.rms
    }
    fn play(&mut self) {
        self.log.push_str("play ");
        self.played = true;
    }
    fn play_at(&mut self, at: PlayerTimeWithDelay) {
        self.log.push_str("playAt ");
        self.played_at = Some(at);
    }
    fn set_audio_device(&mut self, device: &str) -> Result<(), InvalidAudioDevice> {
        if self.fail_device {
            return Err(InvalidAudioDevice {
                device: device.into(),
            });
        }
        self.device = Some(device.to_string());
        Ok(())
    }
    fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }
    fn show_video(&mut self) {
        self.video_shown = true;
    }
    fn hide_video(&mut self) {
        self.video_hidden = true;
    }
    fn use_all_channels(&mut self) {
        self.all_channels = true;
    }
    fn use_first_channel_only(&mut self) {
        self.first_channel_only = true;
    }
    fn use_second_channel_only(&mut self) {
        self.second_channel_only = true;
    }
    fn subscribe_to_playback_completion(&mut self) {
        self.subscribed_to_playback_completion = true;
    }
}

#[derive(Debug, Default)]
pub struct MaskerPlayerStub {
    pub log: String,
    pub file_path: String,
    pub level_db: Option<f64>,
    pub rms: f64,
    pub faded_in: bool,
    pub faded_out: bool,
    pub playing: bool,
    pub device: Option<String>,
    pub fail_device: bool,
    pub fail_load: bool,
    pub duration_seconds: f64,
    pub fade_time_seconds: f64,
    pub seeked: Option<f64>,
    pub all_channels: bool,
    pub first_channel_only: bool,
    pub channel_delays_cleared: bool,
    pub channel_delay: Option<(usize, f64)>,
    pub devices: Vec<String>,
    pub sample_rate_hz: f64,
    pub nanoseconds_offset: u64,
    pub current_system_time: PlayerTime,
    pub nanoseconds_requests: RefCell<Vec<PlayerTime>>,
}

impl MaskerPlayerStub {
    pub fn new() -> Self {
        Self {
            rms: 1.0,
            ..Self::default()
        }
    }
}

impl PlayerClock for MaskerPlayerStub {
    fn nanoseconds(&self, time: PlayerTime) -> u64 {
        self.nanoseconds_requests.borrow_mut().push(time);
        self.nanoseconds_offset + time.system
    }
    fn current_system_time(&self) -> PlayerTime {
        self.current_system_time
    }
    fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }
}

impl MaskerPlayer for MaskerPlayerStub {
    fn load_file(&mut self, path: &str) -> Result<(), InvalidAudioFile> {
        if self.fail_load {
            return Err(InvalidAudioFile { path: path.into() });
        }
        self.file_path = path.to_string();
        Ok(())
    }
    fn set_level_db(&mut self, level_db: f64) {
        self.level_db = Some(level_db);
    }
    fn rms(&self) -> f64 {
        self.rms
    }
    fn fade_in(&mut self) {
        self.log.push_str("fadeIn ");
        self.faded_in = true;
    }
    fn fade_out(&mut self) {
        self.log.push_str("fadeOut ");
        self.faded_out = true;
    }
    fn playing(&self) -> bool {
        self.playing
    }
    fn set_audio_device(&mut self, device: &str) -> Result<(), InvalidAudioDevice> {
        if self.fail_device {
            return Err(InvalidAudioDevice {
                device: device.into(),
            });
        }
        self.device = Some(device.to_string());
        Ok(())
    }
    fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }
    fn fade_time_seconds(&self) -> f64 {
        self.fade_time_seconds
    }
    fn seek_seconds(&mut self, seconds: f64) {
        self.seeked = Some(seconds);
    }
    fn use_all_channels(&mut self) {
        self.all_channels = true;
    }
    fn use_first_channel_only(&mut self) {
        self.first_channel_only = true;
    }
    fn clear_channel_delays(&mut self) {
        self.channel_delays_cleared = true;
        self.channel_delay = None;
    }
    fn set_channel_delay_seconds(&mut self, channel: usize, seconds: f64) {
        self.channel_delay = Some((channel, seconds));
    }
    fn output_audio_device_descriptions(&self) -> Vec<String> {
        self.devices.clone()
    }
}

#[derive(Debug, Default)]
pub struct EyeTrackerStub {
    pub log: String,
    pub recording_time_seconds: Option<f64>,
    pub gazes: Vec<BinocularGazeSample>,
    pub system_time: EyeTrackerSystemTime,
}

impl EyeTracker for EyeTrackerStub {
    fn allocate_recording_time_seconds(&mut self, seconds: f64) {
        self.log.push_str("allocateRecordingTimeSeconds ");
        self.recording_time_seconds = Some(seconds);
    }
    fn start(&mut self) {
        self.log.push_str("start ");
    }
    fn stop(&mut self) {
        self.log.push_str("stop ");
    }
    fn gaze_samples(&self) -> Vec<BinocularGazeSample> {
        self.gazes.clone()
    }
    fn current_system_time(&self) -> EyeTrackerSystemTime {
        self.system_time
    }
}

// ---- test method / listener ----

#[derive(Debug, Default)]
pub struct MethodState {
    pub complete: bool,
    pub complete_after_submit: bool,
    pub next: String,
    pub current: String,
    pub snr_db: i32,
    pub log: String,
    pub coordinate_response: Option<CoordinateResponse>,
    pub free_response: Option<FreeResponse>,
    pub correct_keywords: Option<CorrectKeywords>,
    pub consonant: Option<ConsonantResponse>,
    pub test_results: Vec<AdaptiveTestResult>,
    pub tracks_reset: bool,
}

pub struct TestMethodStub(pub Shared<MethodState>);

impl TestMethodStub {
    pub fn new() -> (Box<dyn TestMethod>, Shared<MethodState>) {
        let state = shared::<MethodState>();
        (Box::new(TestMethodStub(Rc::clone(&state))), state)
    }

    fn submitted(&self, entry: &str) {
        let mut state = self.0.borrow_mut();
        state.log.push_str(entry);
        if state.complete_after_submit {
            state.complete = true;
        }
    }

    fn wrote(&self, entry: &str) {
        self.0.borrow_mut().log.push_str(entry);
    }
}

impl TestMethod for TestMethodStub {
    fn complete(&self) -> bool {
        self.0.borrow().complete
    }
    fn next_target(&mut self) -> String {
        let mut state = self.0.borrow_mut();
        state.log.push_str("next ");
        state.current = state.next.clone();
        state.next.clone()
    }
    fn current_target(&self) -> String {
        self.0.borrow().current.clone()
    }
    fn snr_db(&self) -> i32 {
        self.0.borrow().snr_db
    }
    fn write_testing_parameters(&self, output: &mut dyn OutputFile) {
        self.wrote("writeTestingParameters ");
        output.write(Record::FixedLevelTest(Default::default()));
    }
    fn submit_coordinate_response(&mut self, response: &CoordinateResponse) {
        self.0.borrow_mut().coordinate_response = Some(*response);
        self.submitted("submitCoordinateResponse ");
    }
    fn submit_free_response(&mut self, response: &FreeResponse) {
        self.0.borrow_mut().free_response = Some(response.clone());
        self.submitted("submitFreeResponse ");
    }
    fn write_last_coordinate_response(&self, _output: &mut dyn OutputFile) {
        self.wrote("writeLastCoordinateResponse ");
    }
    fn submit_correct_keywords(&mut self, keywords: &CorrectKeywords) {
        self.0.borrow_mut().correct_keywords = Some(*keywords);
        self.submitted("submitCorrectKeywords ");
    }
    fn submit_consonant(&mut self, response: &ConsonantResponse) {
        self.0.borrow_mut().consonant = Some(*response);
        self.submitted("submitConsonant ");
    }
    fn submit_correct_response(&mut self) {
        self.submitted("submitCorrectResponse ");
    }
    fn submit_incorrect_response(&mut self) {
        self.submitted("submitIncorrectResponse ");
    }
    fn write_last_correct_response(&self, _output: &mut dyn OutputFile) {
        self.wrote("writeLastCorrectResponse ");
    }
    fn write_last_incorrect_response(&self, _output: &mut dyn OutputFile) {
        self.wrote("writeLastIncorrectResponse ");
    }
    fn write_last_correct_keywords(&self, _output: &mut dyn OutputFile) {
        self.wrote("writeLastCorrectKeywords ");
    }
    fn write_last_consonant(&self, _output: &mut dyn OutputFile) {
        self.wrote("writeLastConsonant ");
    }
    fn write_test_result(&self, _output: &mut dyn OutputFile) {
        self.wrote("writeTestResult ");
    }
    fn test_results(&self) -> Vec<AdaptiveTestResult> {
        self.0.borrow().test_results.clone()
    }
    fn reset_tracks(&mut self) {
        self.0.borrow_mut().tracks_reset = true;
    }
}

#[derive(Default)]
pub struct ListenerStub {
    pub notifications: Rc<Cell<usize>>,
}

impl EventListener for ListenerStub {
    fn trial_complete(&mut self) {
        self.notifications.set(self.notifications.get() + 1);
    }
}
