pub mod adaptive;
pub mod concluder;
pub mod config;
pub mod evaluator;
pub mod fixed_level;
pub mod method;
pub mod random;
pub mod state;
pub mod trial;

pub use adaptive::{AdaptiveMethod, TargetListWithTrack};
pub use concluder::{EmptyTargetListTestConcluder, FixedTrialTestConcluder, TestConcluder};
pub use config::EngineConfig;
pub use evaluator::ResponseEvaluatorImpl;
pub use fixed_level::FixedLevelMethod;
pub use method::TestMethod;
pub use random::RandomizerImpl;
pub use state::{EventListener, PlayerEvent, RecognitionTestModel};
pub use trial::EyeTrackingCapture;
