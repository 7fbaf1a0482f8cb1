//! Shared types used across modules
//!
//! The bit input, the feedback labels and the record the experience log
//! stores. Kept here so the pipeline stages don't depend on each other.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a form field cannot become a bit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("bit out of range: {0} (expected 0 or 1)")]
    OutOfRange(i64),
}

/// Parse a single form field into a bit
pub fn parse_bit(field: &str) -> Result<u8, InputError> {
    let trimmed = field.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    match value {
        0 | 1 => Ok(value as u8),
        other => Err(InputError::OutOfRange(other)),
    }
}

/// Two bits entered by the user.
///
/// Serialized as a two-element JSON array so the experience file stays
/// `{"input": [0, 1], ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[i64; 2]", into = "[u8; 2]")]
pub struct BitPair {
    a: u8,
    b: u8,
}

impl BitPair {
    pub fn new(a: u8, b: u8) -> Result<Self, InputError> {
        for bit in [a, b] {
            if bit > 1 {
                return Err(InputError::OutOfRange(bit as i64));
            }
        }
        Ok(Self { a, b })
    }

    /// Parse both form fields, failing on the first bad one
    pub fn parse(first: &str, second: &str) -> Result<Self, InputError> {
        Ok(Self {
            a: parse_bit(first)?,
            b: parse_bit(second)?,
        })
    }

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    /// The pair as an activation input vector
    pub fn to_vector(&self) -> [f64; 2] {
        [self.a as f64, self.b as f64]
    }
}

impl TryFrom<[i64; 2]> for BitPair {
    type Error = InputError;

    fn try_from(value: [i64; 2]) -> Result<Self, Self::Error> {
        let to_bit = |v: i64| match v {
            0 | 1 => Ok(v as u8),
            other => Err(InputError::OutOfRange(other)),
        };
        Ok(Self {
            a: to_bit(value[0])?,
            b: to_bit(value[1])?,
        })
    }
}

impl From<BitPair> for [u8; 2] {
    fn from(pair: BitPair) -> Self {
        [pair.a, pair.b]
    }
}

impl std::fmt::Display for BitPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.a, self.b)
    }
}

/// Outcome label attached to each experience record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    /// The preferred label was chosen
    #[serde(rename = "удачный выбор")]
    Success,
    #[serde(rename = "нужна корректировка")]
    NeedsAdjustment,
}

impl Feedback {
    /// Feedback for a decision given the preferred label
    pub fn for_choice(choice: &str, preferred: &str) -> Self {
        if choice == preferred {
            Feedback::Success
        } else {
            Feedback::NeedsAdjustment
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Feedback::Success => "удачный выбор",
            Feedback::NeedsAdjustment => "нужна корректировка",
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single (input, feedback) entry in the experience log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub input: BitPair,
    pub feedback: Feedback,
}

impl ExperienceRecord {
    pub fn new(input: BitPair, feedback: Feedback) -> Self {
        Self { input, feedback }
    }
}

impl std::fmt::Display for ExperienceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ввод: {}, Обратная связь: {}", self.input, self.feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bit() {
        assert_eq!(parse_bit("0"), Ok(0));
        assert_eq!(parse_bit(" 1 "), Ok(1));
        assert_eq!(parse_bit("2"), Err(InputError::OutOfRange(2)));
        assert_eq!(parse_bit("-1"), Err(InputError::OutOfRange(-1)));
        assert!(matches!(parse_bit("x"), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_bit(""), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_bit("0.5"), Err(InputError::NotANumber(_))));
    }

    #[test]
    fn test_bit_pair_rejects_out_of_range() {
        assert!(BitPair::new(0, 1).is_ok());
        assert_eq!(BitPair::new(0, 2), Err(InputError::OutOfRange(2)));
    }

    #[test]
    fn test_record_json_shape() {
        let record = ExperienceRecord::new(BitPair::new(0, 1).unwrap(), Feedback::Success);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"input": [0, 1], "feedback": "удачный выбор"}));
    }

    #[test]
    fn test_record_rejects_non_bit_input() {
        let raw = r#"{"input": [0, 3], "feedback": "удачный выбор"}"#;
        assert!(serde_json::from_str::<ExperienceRecord>(raw).is_err());
    }

    #[test]
    fn test_feedback_for_choice() {
        assert_eq!(Feedback::for_choice("ответ A", "ответ A"), Feedback::Success);
        assert_eq!(Feedback::for_choice("ответ B", "ответ A"), Feedback::NeedsAdjustment);
    }

    #[test]
    fn test_record_display() {
        let record = ExperienceRecord::new(BitPair::new(1, 0).unwrap(), Feedback::NeedsAdjustment);
        assert_eq!(record.to_string(), "Ввод: [1, 0], Обратная связь: нужна корректировка");
    }
}
