#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("book not found: {0}")]
    BookNotFound(String),

    #[error("invalid search field: {0}")]
    InvalidSearchField(String),
}
