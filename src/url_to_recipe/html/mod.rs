pub mod extractors;
pub mod locator;
