//! Two-variant success/failure value and combinators for composing fallible
//! computations without panics as control flow.

pub mod outcome;
pub mod settle;
pub mod testing;
pub mod unit;

pub use crate::outcome::{IntoOutcome, Outcome};
pub use crate::settle::{block_on_settled, catch, settle, settle_future, settle_with};
pub use crate::unit::Unit;
