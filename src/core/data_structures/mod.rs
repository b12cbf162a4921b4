/*!
 * Data Structures
 *
 * Specialized value types for record fields:
 * - Bounded strings that cap free text at a fixed byte length
 */

mod bounded_string;

pub use bounded_string::BoundedString;
