pub mod approaches;
pub mod config;
pub mod traits;
pub mod transfer_entropy;
pub mod utils;

pub use traits::{GlobalValue, LocalValues, OptionalLocalValues};
