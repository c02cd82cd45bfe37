use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error occurred: {0}")]
    DomainError(#[from] DomainError), // ドメインエラーをラップ

    #[error("Infrastructure error occurred: {0}")]
    InfrastructureError(#[from] InfrastructureError), // InfrastructureError をラップ

    #[error("Underlying error: {source:?}")]
    AnyhowError {
        #[from]
        source: anyhow::Error,
    },
}
