pub mod brands;
pub mod estimate;
pub mod listings;
pub mod trends;
