pub mod audit;
pub mod pages;

pub use audit::{audit_handler, landing_handler, loading_handler};
