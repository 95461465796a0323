pub mod coordinates;
pub mod datasets;
pub mod extract;
pub mod fetch;
pub mod filter;
pub mod merge;
