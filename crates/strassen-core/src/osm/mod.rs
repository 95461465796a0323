pub mod coordinates;
pub mod fetch;
pub mod filter;
