pub mod emit;
pub mod error;
