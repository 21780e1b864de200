use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker for operations that succeed without producing anything meaningful,
/// used as `Outcome<Unit, E>`.
///
/// Every Unit is equal to every other Unit and they all hash the same.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Unit;

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

impl From<()> for Unit {
    fn from(_: ()) -> Self {
        Unit
    }
}

impl From<Unit> for () {
    fn from(_: Unit) -> Self {}
}
