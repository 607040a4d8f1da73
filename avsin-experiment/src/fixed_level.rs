use crate::concluder::TestConcluder;
use crate::method::TestMethod;
use avsin_core::{
    ConsonantResponse, ConsonantTrial, CoordinateResponse, FixedLevelCoordinateResponseTrial,
    FixedLevelTest, FreeResponse, OutputFile, Record, ResponseEvaluator, TargetList,
};

/// Presents one target list at a constant SNR until its concluder says stop.
pub struct FixedLevelMethod<E: ResponseEvaluator> {
    pub evaluator: E,
    test: Option<FixedLevelTest>,
    targets: Option<Box<dyn TargetList>>,
    concluder: Option<Box<dyn TestConcluder>>,
    snr_db: i32,
    complete: bool,
    last_coordinate_trial: FixedLevelCoordinateResponseTrial,
    last_consonant_trial: ConsonantTrial,
}

impl<E: ResponseEvaluator> FixedLevelMethod<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            test: None,
            targets: None,
            concluder: None,
            snr_db: 0,
            complete: false,
            last_coordinate_trial: FixedLevelCoordinateResponseTrial::default(),
            last_consonant_trial: ConsonantTrial::default(),
        }
    }

    pub fn initialize(
        &mut self,
        test: &FixedLevelTest,
        mut targets: Box<dyn TargetList>,
        mut concluder: Box<dyn TestConcluder>,
    ) {
        targets.load_from_directory(&test.test.target_list_directory);
        self.snr_db = test.snr_db;
        concluder.initialize(test);
        self.complete = concluder.complete(&*targets);
        self.test = Some(test.clone());
        self.targets = Some(targets);
        self.concluder = Some(concluder);
    }

    fn conclude_response(&mut self, reinsert_current: bool) {
        let (Some(targets), Some(concluder)) = (self.targets.as_mut(), self.concluder.as_mut())
        else {
            return;
        };
        concluder.submit_response();
        if reinsert_current {
            targets.reinsert_current();
        }
        self.complete = concluder.complete(&**targets);
    }
}

impl<E: ResponseEvaluator> TestMethod for FixedLevelMethod<E> {
    fn complete(&self) -> bool {
        self.complete
    }

    fn next_target(&mut self) -> String {
        self.targets
            .as_mut()
            .map(|targets| targets.next())
            .unwrap_or_default()
    }

    fn current_target(&self) -> String {
        self.targets
            .as_ref()
            .map(|targets| targets.current())
            .unwrap_or_default()
    }

    fn snr_db(&self) -> i32 {
        self.snr_db
    }

    fn write_testing_parameters(&self, output: &mut dyn OutputFile) {
        if let Some(test) = &self.test {
            output.write(Record::FixedLevelTest(test.clone()));
        }
    }

    fn submit_coordinate_response(&mut self, response: &CoordinateResponse) {
        let target = self.current_target();
        self.last_coordinate_trial = FixedLevelCoordinateResponseTrial {
            target: self.evaluator.file_name(&target),
            subject_color: response.color,
            correct_color: self.evaluator.correct_color(&target),
            subject_number: response.number,
            correct_number: self.evaluator.correct_number(&target),
            correct: self.evaluator.correct(&target, response),
        };
        self.conclude_response(false);
    }

    fn submit_free_response(&mut self, response: &FreeResponse) {
        self.conclude_response(response.flagged);
    }

    fn write_last_coordinate_response(&self, output: &mut dyn OutputFile) {
        output.write(Record::FixedLevelCoordinateResponseTrial(
            self.last_coordinate_trial.clone(),
        ));
    }

    fn submit_consonant(&mut self, response: &ConsonantResponse) {
        let target = self.current_target();
        let correct_consonant = self.evaluator.correct_consonant(&target);
        self.last_consonant_trial = ConsonantTrial {
            target: self.evaluator.file_name(&target),
            subject_consonant: response.consonant,
            correct_consonant,
            correct: response.consonant == correct_consonant,
        };
        self.conclude_response(false);
    }

    fn write_last_consonant(&self, output: &mut dyn OutputFile) {
        output.write(Record::ConsonantTrial(self.last_consonant_trial.clone()));
    }
}
