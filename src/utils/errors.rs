use crate::db::error::DBError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InternalError {
    #[error("db error: {0}")]
    DBError(#[from] DBError),
    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),
}
