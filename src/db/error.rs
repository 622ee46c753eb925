use thiserror::Error;

#[derive(Error, Debug)]
pub enum DBError {
    #[error("sqlite error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
