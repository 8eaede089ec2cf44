#[derive(Debug, thiserror::Error)]
pub enum StockError {
    #[error("stock.save_failed")]
    SaveFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
