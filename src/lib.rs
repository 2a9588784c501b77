pub mod generate;
pub mod png;

pub use png::{encode, Rgba};
