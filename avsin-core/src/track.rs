use crate::settings::TrackingRule;

/// A single up/down staircase over an integer level.
pub trait Track {
    fn push_up(&mut self);
    fn push_down(&mut self);
    fn x(&self) -> i32;
    fn complete(&self) -> bool;
    fn reversals(&self) -> i32;
    fn reset(&mut self);
    /// Mean level over the last `reversals` reversals.
    fn threshold(&self, reversals: i32) -> f64;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackSettings {
    pub rule: TrackingRule,
    pub starting_x: i32,
    pub ceiling: i32,
    pub floor: i32,
    pub bump_limit: i32,
}

pub trait TrackFactory {
    fn make(&mut self, settings: &TrackSettings) -> Box<dyn Track>;
}
