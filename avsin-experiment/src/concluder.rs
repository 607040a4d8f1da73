use avsin_core::{FixedLevelTest, TargetList};

/// Decides when a fixed-level test has run its course.
pub trait TestConcluder {
    fn initialize(&mut self, test: &FixedLevelTest);
    fn submit_response(&mut self);
    fn complete(&self, targets: &dyn TargetList) -> bool;
}

/// Complete after `FixedLevelTest::trials` responses.
#[derive(Debug, Default)]
pub struct FixedTrialTestConcluder {
    trials_remaining: usize,
}

impl TestConcluder for FixedTrialTestConcluder {
    fn initialize(&mut self, test: &FixedLevelTest) {
        self.trials_remaining = test.trials;
    }

    fn submit_response(&mut self) {
        self.trials_remaining = self.trials_remaining.saturating_sub(1);
    }

    fn complete(&self, _targets: &dyn TargetList) -> bool {
        self.trials_remaining == 0
    }
}

/// Complete once a finite target list runs dry.
#[derive(Debug, Default)]
pub struct EmptyTargetListTestConcluder;

impl TestConcluder for EmptyTargetListTestConcluder {
    fn initialize(&mut self, _test: &FixedLevelTest) {}

    fn submit_response(&mut self) {}

    fn complete(&self, targets: &dyn TargetList) -> bool {
        targets.empty()
    }
}
