//! State containers behind the catalog screens.

mod catalog_store;
mod screen;

pub use catalog_store::CatalogStore;
pub use screen::{CatalogForm, CatalogScreen, CatalogScreenError};
