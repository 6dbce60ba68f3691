mod catalog;
mod haversine;
#[allow(clippy::module_inception)]
mod locator;
mod locator_error;
mod nearest;

pub use catalog::{Catalog, load_catalog_from};
pub use locator::NearestLocator;
pub use locator_error::LocatorError;
