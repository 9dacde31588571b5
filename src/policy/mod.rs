//! Classification policy definitions.

pub mod marker;

pub use marker::MarkerPolicy;
