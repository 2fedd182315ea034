pub mod common;
pub mod orders;
