/*!
 * Core Module
 * Fundamental record types, limits and error handling
 */

pub mod data_structures;
pub mod errors;
pub mod limits;
pub mod types;

// Re-export for convenience
pub use data_structures::BoundedString;
pub use errors::*;
pub use types::*;
