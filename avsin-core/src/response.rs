use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Closed set of coordinate-response-measure colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Green,
    Red,
    Blue,
    White,
    #[default]
    NotAColor,
}

impl FromStr for Color {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "green" => Color::Green,
            "red" => Color::Red,
            "blue" => Color::Blue,
            "white" => Color::White,
            _ => Color::NotAColor,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateResponse {
    pub number: i32,
    pub color: Color,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeResponse {
    pub response: String,
    pub flagged: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectKeywords {
    pub count: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsonantResponse {
    pub consonant: char,
}
