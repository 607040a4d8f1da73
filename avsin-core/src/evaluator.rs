use crate::response::{Color, CoordinateResponse};

/// Scores responses against the answer encoded in a target's file name.
pub trait ResponseEvaluator {
    fn correct(&self, target: &str, response: &CoordinateResponse) -> bool;
    fn correct_color(&self, target: &str) -> Color;
    fn correct_number(&self, target: &str) -> i32;
    fn correct_consonant(&self, target: &str) -> char;
    fn file_name(&self, target: &str) -> String;
}
