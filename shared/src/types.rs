//! Common types for the shared crate

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Monetary amount in cents
///
/// All prices, costs and totals are integer cents. Display formatting
/// is the presentation layer's job.
pub type Cents = i64;
