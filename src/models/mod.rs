pub mod estimate;
pub mod listing;
pub mod trend;

pub use estimate::*;
pub use listing::*;
pub use trend::*;
