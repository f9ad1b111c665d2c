use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Invalid tag name '{tag}': tag names must be non-empty, start with a letter or underscore, and contain only letters, digits, '-', '_' or '.'")]
    InvalidTagName { tag: String },
}
