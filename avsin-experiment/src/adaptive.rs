use crate::method::TestMethod;
use avsin_core::{
    AdaptiveCoordinateResponseTrial, AdaptiveTest, AdaptiveTestResult, CoordinateResponse,
    CorrectKeywords, CorrectKeywordsTrial, FreeResponse, OpenSetAdaptiveTrial, OutputFile,
    Randomizer, Record, ResponseEvaluator, TargetList, TargetListReader, Track, TrackFactory,
    TrackSettings,
};
use tracing::debug;

pub struct TargetListWithTrack {
    pub list: Box<dyn TargetList>,
    pub track: Box<dyn Track>,
}

/// Interleaves one staircase per target list, picking an unfinished list at
/// random after every scored trial.
pub struct AdaptiveMethod<F, E, R>
where
    F: TrackFactory,
    E: ResponseEvaluator,
    R: Randomizer,
{
    pub track_factory: F,
    pub evaluator: E,
    pub randomizer: R,
    pub keyword_correct_threshold: i32,
    test: Option<AdaptiveTest>,
    lists: Vec<TargetListWithTrack>,
    current: Option<usize>,
    last_coordinate_trial: AdaptiveCoordinateResponseTrial,
    last_open_set_trial: OpenSetAdaptiveTrial,
    last_correct_keywords_trial: CorrectKeywordsTrial,
}

impl<F, E, R> AdaptiveMethod<F, E, R>
where
    F: TrackFactory,
    E: ResponseEvaluator,
    R: Randomizer,
{
    pub fn new(track_factory: F, evaluator: E, randomizer: R) -> Self {
        Self {
            track_factory,
            evaluator,
            randomizer,
            keyword_correct_threshold: 2,
            test: None,
            lists: Vec::new(),
            current: None,
            last_coordinate_trial: AdaptiveCoordinateResponseTrial::default(),
            last_open_set_trial: OpenSetAdaptiveTrial::default(),
            last_correct_keywords_trial: CorrectKeywordsTrial::default(),
        }
    }

    pub fn initialize(&mut self, test: &AdaptiveTest, reader: &mut dyn TargetListReader) {
        let settings = TrackSettings {
            rule: test.tracking_rule.clone(),
            starting_x: test.starting_snr_db,
            ceiling: test.ceiling_snr_db,
            floor: test.floor_snr_db,
            bump_limit: test.track_bump_limit,
        };
        self.lists = reader
            .read(&test.test.target_list_directory)
            .into_iter()
            .map(|list| TargetListWithTrack {
                list,
                track: self.track_factory.make(&settings),
            })
            .collect();
        self.test = Some(test.clone());
        self.current = None;
        debug!(lists = self.lists.len(), "adaptive tracks built");
        self.select_next_list();
    }

    pub fn tracks(&self) -> impl Iterator<Item = &dyn Track> {
        self.lists.iter().map(|pair| &*pair.track)
    }

    /// Makes a random unfinished pair current. When every track is complete the
    /// previous pair stays current.
    fn select_next_list(&mut self) {
        let in_progress: Vec<usize> = self
            .lists
            .iter()
            .enumerate()
            .filter(|(_, pair)| !pair.track.complete())
            .map(|(index, _)| index)
            .collect();
        if in_progress.is_empty() {
            return;
        }
        let upper = i32::try_from(in_progress.len() - 1).unwrap_or(i32::MAX);
        let drawn = self.randomizer.int_between(0, upper);
        if let Some(&index) = usize::try_from(drawn)
            .ok()
            .and_then(|drawn| in_progress.get(drawn))
        {
            self.current = Some(index);
        }
    }

    fn current_track_reversals(&self) -> i32 {
        self.current
            .map(|index| self.lists[index].track.reversals())
            .unwrap_or_default()
    }

    fn push_current(&mut self, correct: bool) {
        if let Some(index) = self.current {
            let track = &mut self.lists[index].track;
            if correct {
                track.push_down();
            } else {
                track.push_up();
            }
        }
    }

    fn submit_open_set(&mut self, correct: bool) {
        let target = self.current_target();
        let snr_db = self.snr_db();
        self.push_current(correct);
        self.last_open_set_trial = OpenSetAdaptiveTrial {
            target: self.evaluator.file_name(&target),
            correct,
            snr_db,
            reversals: self.current_track_reversals(),
        };
        self.select_next_list();
    }
}

impl<F, E, R> TestMethod for AdaptiveMethod<F, E, R>
where
    F: TrackFactory,
    E: ResponseEvaluator,
    R: Randomizer,
{
    fn complete(&self) -> bool {
        self.lists.iter().all(|pair| pair.track.complete())
    }

    fn next_target(&mut self) -> String {
        match self.current {
            Some(index) => self.lists[index].list.next(),
            None => String::new(),
        }
    }

    fn current_target(&self) -> String {
        self.current
            .map(|index| self.lists[index].list.current())
            .unwrap_or_default()
    }

    fn snr_db(&self) -> i32 {
        self.current
            .map(|index| self.lists[index].track.x())
            .unwrap_or_default()
    }

    fn write_testing_parameters(&self, output: &mut dyn OutputFile) {
        if let Some(test) = &self.test {
            output.write(Record::AdaptiveTest(test.clone()));
        }
    }

    fn submit_coordinate_response(&mut self, response: &CoordinateResponse) {
        let target = self.current_target();
        let snr_db = self.snr_db();
        let correct = self.evaluator.correct(&target, response);
        self.push_current(correct);
        self.last_coordinate_trial = AdaptiveCoordinateResponseTrial {
            target: self.evaluator.file_name(&target),
            subject_color: response.color,
            correct_color: self.evaluator.correct_color(&target),
            subject_number: response.number,
            correct_number: self.evaluator.correct_number(&target),
            correct,
            snr_db,
            reversals: self.current_track_reversals(),
        };
        self.select_next_list();
    }

    fn submit_free_response(&mut self, _response: &FreeResponse) {
        self.select_next_list();
    }

    fn write_last_coordinate_response(&self, output: &mut dyn OutputFile) {
        output.write(Record::AdaptiveCoordinateResponseTrial(
            self.last_coordinate_trial.clone(),
        ));
    }

    fn submit_correct_keywords(&mut self, keywords: &CorrectKeywords) {
        let target = self.current_target();
        self.last_correct_keywords_trial = CorrectKeywordsTrial {
            target: self.evaluator.file_name(&target),
            count: keywords.count,
            correct: keywords.count >= self.keyword_correct_threshold,
            snr_db: self.snr_db(),
            reversals: self.current_track_reversals(),
        };
    }

    fn submit_correct_response(&mut self) {
        self.submit_open_set(true);
    }

    fn submit_incorrect_response(&mut self) {
        self.submit_open_set(false);
    }

    fn write_last_correct_response(&self, output: &mut dyn OutputFile) {
        output.write(Record::OpenSetAdaptiveTrial(self.last_open_set_trial.clone()));
    }

    fn write_last_incorrect_response(&self, output: &mut dyn OutputFile) {
        output.write(Record::OpenSetAdaptiveTrial(self.last_open_set_trial.clone()));
    }

    fn write_last_correct_keywords(&self, output: &mut dyn OutputFile) {
        output.write(Record::CorrectKeywordsTrial(
            self.last_correct_keywords_trial.clone(),
        ));
    }

    fn write_test_result(&self, output: &mut dyn OutputFile) {
        output.write(Record::AdaptiveTestResults(self.test_results()));
    }

    fn test_results(&self) -> Vec<AdaptiveTestResult> {
        let reversals = self
            .test
            .as_ref()
            .map(|test| test.threshold_reversals)
            .unwrap_or_default();
        self.lists
            .iter()
            .map(|pair| AdaptiveTestResult {
                targets_directory: pair.list.directory(),
                threshold: pair.track.threshold(reversals),
            })
            .collect()
    }

    fn reset_tracks(&mut self) {
        for pair in &mut self.lists {
            pair.track.reset();
        }
        self.select_next_list();
    }
}
