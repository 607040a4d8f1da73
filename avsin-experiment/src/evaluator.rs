use avsin_core::{Color, CoordinateResponse, ResponseEvaluator};
use std::path::Path;

/// Reads the answer out of target file names such as `blue1.mov`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseEvaluatorImpl;

impl ResponseEvaluatorImpl {
    fn stem(target: &str) -> &str {
        Path::new(target)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("")
    }

    fn color_part(stem: &str) -> &str {
        let end = stem
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(stem.len());
        &stem[..end]
    }
}

impl ResponseEvaluator for ResponseEvaluatorImpl {
    fn correct(&self, target: &str, response: &CoordinateResponse) -> bool {
        self.correct_color(target) == response.color
            && self.correct_number(target) == response.number
    }

    fn correct_color(&self, target: &str) -> Color {
        let color = Self::color_part(Self::stem(target));
        color.parse().unwrap_or_default()
    }

    /// -1 when no number follows the color.
    fn correct_number(&self, target: &str) -> i32 {
        let stem = Self::stem(target);
        let digits: String = stem[Self::color_part(stem).len()..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().unwrap_or(-1)
    }

    fn correct_consonant(&self, target: &str) -> char {
        Self::stem(target).chars().next().unwrap_or_default()
    }

    fn file_name(&self, target: &str) -> String {
        Path::new(target)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(target)
            .to_string()
    }
}
