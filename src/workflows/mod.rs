pub mod artifact;
pub mod dataset;
pub mod impact;
pub mod plot;
pub mod summary;
