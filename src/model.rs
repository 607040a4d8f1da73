use avsin_core::{
    AdaptiveTest, AdaptiveTestResult, AudioSettings, Calibration, ChannelMode, ConsonantResponse,
    CoordinateResponse, CorrectKeywords, EyeTracker, FixedLevelTest, FreeResponse, MaskerPlayer,
    OutputFile, RequestFailure, TargetList, TargetListReader, TargetPlayer, Test, TrackFactory,
    TrialState,
};
use avsin_experiment::{
    AdaptiveMethod, EmptyTargetListTestConcluder, EngineConfig, EventListener,
    FixedLevelMethod, FixedTrialTestConcluder, PlayerEvent, RandomizerImpl,
    RecognitionTestModel, ResponseEvaluatorImpl, TestConcluder, TestMethod,
};
use avsin_playlist::{
    CyclicRandomizedTargetList, EachTargetPlayedOnceThenShuffleAndRepeat, FileExtensionFilter,
    FileSystemDirectoryReader, RandomShuffle, RandomizedTargetListWithReplacement,
    RandomizedTargetListWithoutReplacement, SubdirectoryTargetListReader,
};
use avsin_timing::AudioSampleTimeWithOffset;
use tracing::info;

/// Builds the target lists each kind of test draws from.
pub trait PlaylistFactory {
    /// One endless, reshuffling list per subdirectory.
    fn targets_with_replacement_reader(&self) -> Box<dyn TargetListReader>;
    /// One endless, rotating list per subdirectory.
    fn cyclic_targets_reader(&self) -> Box<dyn TargetListReader>;
    fn targets_with_replacement(&self) -> Box<dyn TargetList>;
    fn silent_interval_targets(&self) -> Box<dyn TargetList>;
    fn every_target_once(&self) -> Box<dyn TargetList>;
    fn each_target_n_times(&self, repeats: usize) -> Box<dyn TargetList>;
}

type FilteredReader = FileExtensionFilter<FileSystemDirectoryReader>;

/// Playlists read from stimulus directories on disk.
#[derive(Debug, Clone)]
pub struct FileSystemPlaylists {
    reader: FilteredReader,
}

impl FileSystemPlaylists {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reader: FileExtensionFilter::new(FileSystemDirectoryReader, extensions),
        }
    }
}

impl Default for FileSystemPlaylists {
    fn default() -> Self {
        Self::new([".wav", ".mov", ".avi", ".mp4"])
    }
}

impl PlaylistFactory for FileSystemPlaylists {
    fn targets_with_replacement_reader(&self) -> Box<dyn TargetListReader> {
        let lists = self.reader.clone();
        Box::new(SubdirectoryTargetListReader::new(
            self.reader.clone(),
            move || -> Box<dyn TargetList> {
                Box::new(RandomizedTargetListWithReplacement::new(
                    lists.clone(),
                    RandomShuffle::default(),
                ))
            },
        ))
    }

    fn cyclic_targets_reader(&self) -> Box<dyn TargetListReader> {
        let lists = self.reader.clone();
        Box::new(SubdirectoryTargetListReader::new(
            self.reader.clone(),
            move || -> Box<dyn TargetList> {
                Box::new(CyclicRandomizedTargetList::new(
                    lists.clone(),
                    RandomShuffle::default(),
                ))
            },
        ))
    }

    fn targets_with_replacement(&self) -> Box<dyn TargetList> {
        Box::new(RandomizedTargetListWithReplacement::new(
            self.reader.clone(),
            RandomShuffle::default(),
        ))
    }

    fn silent_interval_targets(&self) -> Box<dyn TargetList> {
        Box::new(RandomizedTargetListWithoutReplacement::new(
            self.reader.clone(),
            RandomShuffle::default(),
        ))
    }

    fn every_target_once(&self) -> Box<dyn TargetList> {
        Box::new(RandomizedTargetListWithoutReplacement::new(
            self.reader.clone(),
            RandomShuffle::default(),
        ))
    }

    fn each_target_n_times(&self, repeats: usize) -> Box<dyn TargetList> {
        let mut list = EachTargetPlayedOnceThenShuffleAndRepeat::new(
            self.reader.clone(),
            RandomShuffle::default(),
        );
        list.set_repeats(repeats);
        Box::new(list)
    }
}

type Engine<T, M, O, Y> = RecognitionTestModel<T, M, ResponseEvaluatorImpl, O, RandomizerImpl, Y>;

/// Entry point for a test session. Each `initialize_*` call picks a method and a
/// playlist for one kind of test and hands them to the trial engine.
pub struct Model<T, M, O, Y, F>
where
    T: TargetPlayer,
    M: MaskerPlayer,
    O: OutputFile,
    Y: EyeTracker,
    F: TrackFactory + Clone + 'static,
{
    engine: Engine<T, M, O, Y>,
    track_factory: F,
    playlists: Box<dyn PlaylistFactory>,
}

impl<T, M, O, Y, F> Model<T, M, O, Y, F>
where
    T: TargetPlayer,
    M: MaskerPlayer,
    O: OutputFile,
    Y: EyeTracker,
    F: TrackFactory + Clone + 'static,
{
    pub fn new(
        target_player: T,
        masker_player: M,
        output_file: O,
        eye_tracker: Y,
        track_factory: F,
        playlists: Box<dyn PlaylistFactory>,
        config: EngineConfig,
    ) -> Self {
        Self {
            engine: RecognitionTestModel::new(
                target_player,
                masker_player,
                ResponseEvaluatorImpl,
                output_file,
                RandomizerImpl::default(),
                eye_tracker,
                config,
            ),
            track_factory,
            playlists,
        }
    }

    pub fn engine(&self) -> &Engine<T, M, O, Y> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine<T, M, O, Y> {
        &mut self.engine
    }

    pub fn subscribe(&mut self, listener: Box<dyn EventListener>) {
        self.engine.subscribe(listener);
    }

    // ---- adaptive ----

    pub fn initialize_adaptive(&mut self, test: &AdaptiveTest) -> Result<(), RequestFailure> {
        let reader = self.playlists.targets_with_replacement_reader();
        self.initialize_adaptive_(test, reader, false)
    }

    pub fn initialize_adaptive_with_single_speaker(
        &mut self,
        test: &AdaptiveTest,
    ) -> Result<(), RequestFailure> {
        let test = with_channel_mode(test, ChannelMode::SingleSpeaker);
        let reader = self.playlists.targets_with_replacement_reader();
        self.initialize_adaptive_(&test, reader, false)
    }

    pub fn initialize_adaptive_with_delayed_masker(
        &mut self,
        test: &AdaptiveTest,
    ) -> Result<(), RequestFailure> {
        let test = with_channel_mode(test, ChannelMode::DelayedMasker);
        let reader = self.playlists.targets_with_replacement_reader();
        self.initialize_adaptive_(&test, reader, false)
    }

    pub fn initialize_adaptive_with_eye_tracking(
        &mut self,
        test: &AdaptiveTest,
    ) -> Result<(), RequestFailure> {
        let reader = self.playlists.targets_with_replacement_reader();
        self.initialize_adaptive_(test, reader, true)
    }

    pub fn initialize_adaptive_with_cyclic_targets(
        &mut self,
        test: &AdaptiveTest,
    ) -> Result<(), RequestFailure> {
        let reader = self.playlists.cyclic_targets_reader();
        self.initialize_adaptive_(test, reader, false)
    }

    fn initialize_adaptive_(
        &mut self,
        test: &AdaptiveTest,
        mut reader: Box<dyn TargetListReader>,
        eye_tracking: bool,
    ) -> Result<(), RequestFailure> {
        let mut method = AdaptiveMethod::new(
            self.track_factory.clone(),
            ResponseEvaluatorImpl,
            RandomizerImpl::default(),
        );
        method.keyword_correct_threshold = self.engine.config.keyword_correct_threshold;
        method.initialize(test, &mut *reader);
        info!(
            directory = %test.test.target_list_directory,
            lists = method.tracks().count(),
            "adaptive test prepared"
        );
        self.start(Box::new(method), &test.test, eye_tracking)
    }

    // ---- fixed level ----

    pub fn initialize_fixed_level_with_target_replacement(
        &mut self,
        test: &FixedLevelTest,
    ) -> Result<(), RequestFailure> {
        let targets = self.playlists.targets_with_replacement();
        self.initialize_fixed_level_(
            test,
            targets,
            Box::new(FixedTrialTestConcluder::default()),
            false,
        )
    }

    pub fn initialize_fixed_level_with_silent_interval_targets(
        &mut self,
        test: &FixedLevelTest,
    ) -> Result<(), RequestFailure> {
        let targets = self.playlists.silent_interval_targets();
        self.initialize_fixed_level_(test, targets, Box::new(EmptyTargetListTestConcluder), false)
    }

    pub fn initialize_fixed_level_with_silent_interval_targets_and_eye_tracking(
        &mut self,
        test: &FixedLevelTest,
    ) -> Result<(), RequestFailure> {
        let targets = self.playlists.silent_interval_targets();
        self.initialize_fixed_level_(test, targets, Box::new(EmptyTargetListTestConcluder), true)
    }

    pub fn initialize_fixed_level_with_all_targets(
        &mut self,
        test: &FixedLevelTest,
    ) -> Result<(), RequestFailure> {
        let targets = self.playlists.every_target_once();
        self.initialize_fixed_level_(test, targets, Box::new(EmptyTargetListTestConcluder), false)
    }

    pub fn initialize_fixed_level_with_all_targets_and_eye_tracking(
        &mut self,
        test: &FixedLevelTest,
    ) -> Result<(), RequestFailure> {
        let targets = self.playlists.every_target_once();
        self.initialize_fixed_level_(test, targets, Box::new(EmptyTargetListTestConcluder), true)
    }

    pub fn initialize_fixed_level_with_each_target_n_times(
        &mut self,
        test: &FixedLevelTest,
    ) -> Result<(), RequestFailure> {
        let targets = self.playlists.each_target_n_times(test.target_repeats);
        self.initialize_fixed_level_(test, targets, Box::new(EmptyTargetListTestConcluder), false)
    }

    pub fn initialize_fixed_level_with_each_target_n_times_and_eye_tracking(
        &mut self,
        test: &FixedLevelTest,
    ) -> Result<(), RequestFailure> {
        let targets = self.playlists.each_target_n_times(test.target_repeats);
        self.initialize_fixed_level_(test, targets, Box::new(EmptyTargetListTestConcluder), true)
    }

    fn initialize_fixed_level_(
        &mut self,
        test: &FixedLevelTest,
        targets: Box<dyn TargetList>,
        concluder: Box<dyn TestConcluder>,
        eye_tracking: bool,
    ) -> Result<(), RequestFailure> {
        let mut method = FixedLevelMethod::new(ResponseEvaluatorImpl);
        method.initialize(test, targets, concluder);
        self.start(Box::new(method), &test.test, eye_tracking)
    }

    fn start(
        &mut self,
        method: Box<dyn TestMethod>,
        test: &Test,
        eye_tracking: bool,
    ) -> Result<(), RequestFailure> {
        if eye_tracking {
            self.engine.initialize_with_eye_tracking(method, test)
        } else {
            self.engine.initialize(method, test)
        }
    }

    // ---- trials ----

    pub fn play_trial(&mut self, settings: &AudioSettings) -> Result<(), RequestFailure> {
        self.engine.play_trial(settings)
    }

    pub fn handle_event(&mut self, event: PlayerEvent) {
        self.engine.handle_event(event);
    }

    pub fn fade_in_complete(&mut self, time: AudioSampleTimeWithOffset) {
        self.engine.fade_in_complete(time);
    }

    pub fn playback_complete(&mut self) {
        self.engine.playback_complete();
    }

    pub fn fade_out_complete(&mut self) {
        self.engine.fade_out_complete();
    }

    pub fn submit_coordinate_response(
        &mut self,
        response: &CoordinateResponse,
    ) -> Result<(), RequestFailure> {
        self.engine.submit_coordinate_response(response)
    }

    pub fn submit_free_response(&mut self, response: &FreeResponse) -> Result<(), RequestFailure> {
        self.engine.submit_free_response(response)
    }

    pub fn submit_correct_keywords(
        &mut self,
        keywords: &CorrectKeywords,
    ) -> Result<(), RequestFailure> {
        self.engine.submit_correct_keywords(keywords)
    }

    pub fn submit_consonant(&mut self, response: &ConsonantResponse) -> Result<(), RequestFailure> {
        self.engine.submit_consonant(response)
    }

    pub fn submit_correct_response(&mut self) -> Result<(), RequestFailure> {
        self.engine.submit_correct_response()
    }

    pub fn submit_incorrect_response(&mut self) -> Result<(), RequestFailure> {
        self.engine.submit_incorrect_response()
    }

    // ---- calibration ----

    pub fn play_calibration(&mut self, calibration: &Calibration) -> Result<(), RequestFailure> {
        self.engine.play_calibration(calibration)
    }

    pub fn play_left_speaker_calibration(
        &mut self,
        calibration: &Calibration,
    ) -> Result<(), RequestFailure> {
        self.engine.play_left_speaker_calibration(calibration)
    }

    pub fn play_right_speaker_calibration(
        &mut self,
        calibration: &Calibration,
    ) -> Result<(), RequestFailure> {
        self.engine.play_right_speaker_calibration(calibration)
    }

    // ---- queries ----

    pub fn test_complete(&self) -> bool {
        self.engine.test_complete()
    }

    pub fn trial_number(&self) -> usize {
        self.engine.trial_number()
    }

    pub fn trial_state(&self) -> TrialState {
        self.engine.trial_state()
    }

    pub fn target_file_name(&self) -> String {
        self.engine.target_file_name()
    }

    pub fn audio_devices(&self) -> Vec<String> {
        self.engine.audio_devices()
    }

    pub fn adaptive_test_results(&self) -> Vec<AdaptiveTestResult> {
        self.engine.test_results()
    }

    /// Resets every track to its starting level and keeps the loaded lists.
    pub fn restart_adaptive_test_while_preserving_targets(
        &mut self,
    ) -> Result<(), RequestFailure> {
        self.engine.restart_preserving_targets()
    }
}

fn with_channel_mode(test: &AdaptiveTest, channel_mode: ChannelMode) -> AdaptiveTest {
    let mut test = test.clone();
    test.test.channel_mode = channel_mode;
    test
}
