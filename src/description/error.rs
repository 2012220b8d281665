use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("No tag helper or attribute descriptions to render")]
    NoContent,
}
