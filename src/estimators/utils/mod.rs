pub mod te_slicing;
pub mod windows;
