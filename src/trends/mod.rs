//! Trend comparison: selection management and synthetic series generation.

pub mod generator;
pub mod selections;

pub use generator::{year_range, BaseDraw, SeriesGenerator};
pub use selections::{add_selection, remove_selection, SelectionIds, TrendComparison};
