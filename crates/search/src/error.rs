use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("Empty word at position {index} of the word list")]
    EmptyWord { index: usize },
}
