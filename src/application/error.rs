use crate::domain::error::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl AppError {
    /// タイトル不一致による失敗か。
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(DomainError::BookNotFound(_)))
    }
}
