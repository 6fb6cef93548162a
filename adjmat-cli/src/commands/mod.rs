pub mod dense;
pub mod sparse;
pub mod stats;
