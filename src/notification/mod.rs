pub mod fixtures;
pub mod model;
