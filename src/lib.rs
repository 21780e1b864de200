//! Success/failure value with combinators, plus the `#[settled]` attribute
//! for turning `Result`-returning functions into `Outcome`-returning ones.
//!
//! ```rust
//! use outcome::{settled, Outcome};
//!
//! #[settled]
//! fn parse(raw: &str) -> Result<i32, std::num::ParseIntError> {
//!     let value = raw.parse::<i32>()?;
//!     Ok(value)
//! }
//!
//! assert_eq!(parse("2").and_then(|x| parse("3").map(|y| x + y)), Outcome::success(5));
//! assert!(parse("two").is_failure());
//! ```

pub use outcome_core::*;
pub use outcome_macros::settled;
