use avsin_core::{
    AdaptiveTestResult, ConsonantResponse, CoordinateResponse, CorrectKeywords, FreeResponse,
    OutputFile,
};

/// Schedule of targets and SNRs for one test.
///
/// `submit_*` advances the schedule and captures a record of the trial; the
/// matching `write_last_*` then writes that record. Responses a method does not
/// score are accepted and ignored.
pub trait TestMethod {
    fn complete(&self) -> bool;
    fn next_target(&mut self) -> String;
    fn current_target(&self) -> String;
    fn snr_db(&self) -> i32;
    fn write_testing_parameters(&self, output: &mut dyn OutputFile);

    fn submit_coordinate_response(&mut self, response: &CoordinateResponse);
    fn submit_free_response(&mut self, response: &FreeResponse);
    fn write_last_coordinate_response(&self, output: &mut dyn OutputFile);

    fn submit_correct_keywords(&mut self, _keywords: &CorrectKeywords) {}
    fn submit_consonant(&mut self, _response: &ConsonantResponse) {}
    fn submit_correct_response(&mut self) {}
    fn submit_incorrect_response(&mut self) {}

    fn write_last_correct_response(&self, _output: &mut dyn OutputFile) {}
    fn write_last_incorrect_response(&self, _output: &mut dyn OutputFile) {}
    fn write_last_correct_keywords(&self, _output: &mut dyn OutputFile) {}
    fn write_last_consonant(&self, _output: &mut dyn OutputFile) {}
    fn write_test_result(&self, _output: &mut dyn OutputFile) {}

    fn test_results(&self) -> Vec<AdaptiveTestResult> {
        Vec::new()
    }

    fn reset_tracks(&mut self) {}
}
