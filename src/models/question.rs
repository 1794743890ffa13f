use serde::Deserialize;

pub const NUM_OPTIONS: usize = 3;

/// A single multiple-choice question.
///
/// `correct_answer` is compared against the option text verbatim, so a row
/// whose answer matches none of its options can never be scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: [String; NUM_OPTIONS],
    pub correct_answer: String,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        self.options
            .get(option)
            .is_some_and(|text| *text == self.correct_answer)
    }

    /// Index of the first option whose text equals the correct answer.
    pub fn correct_option(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|text| *text == self.correct_answer)
    }
}

/// One row of the question source, as laid out in the CSV header.
#[derive(Debug, Deserialize)]
pub(crate) struct QuestionRow {
    question: String,
    #[serde(rename = "optionA")]
    option_a: String,
    #[serde(rename = "optionB")]
    option_b: String,
    #[serde(rename = "optionC")]
    option_c: String,
    correct_answer: String,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            prompt: row.question,
            options: [row.option_a, row.option_b, row.option_c],
            correct_answer: row.correct_answer,
        }
    }
}
