pub mod catalogue;
pub mod error;
pub mod models;
mod schema;

pub use catalogue::{Catalogue, CatalogueConfig};
