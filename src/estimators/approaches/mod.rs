pub mod discrete;

// Unified re-exports so tests and users can import
// windowed_te::estimators::approaches::* ergonomically.
pub use discrete::binned_te::BinnedTransferEntropy;
pub use discrete::discrete_utils::{JointHistogram, ProbabilityTables};
