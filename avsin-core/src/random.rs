pub trait Randomizer {
    /// Uniform real in `[lower, upper]`.
    fn between(&mut self, lower: f64, upper: f64) -> f64;
    /// Uniform integer in `[lower, upper]`.
    fn int_between(&mut self, lower: i32, upper: i32) -> i32;
}
