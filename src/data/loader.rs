use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Question;
use crate::models::question::QuestionRow;

pub const DEFAULT_QUESTIONS_PATH: &str = "assets/questions.csv";

/// The question source is missing, unreadable or empty.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed question table: {0}")]
    Malformed(#[from] csv::Error),
    #[error("question table has no rows")]
    Empty,
}

pub fn load_questions_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    load_questions_from_reader(file)
}

/// Parse a header-first CSV table. Rows keep their source order and cell
/// text is kept verbatim.
pub fn load_questions_from_reader<R: Read>(reader: R) -> Result<Vec<Question>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let mut questions = Vec::new();
    for row in csv_reader.deserialize() {
        let row: QuestionRow = row?;
        questions.push(row.into());
    }

    if questions.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(questions)
}
