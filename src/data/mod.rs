mod loader;

pub use loader::{
    DEFAULT_QUESTIONS_PATH, LoadError, load_questions_from_csv, load_questions_from_reader,
};
