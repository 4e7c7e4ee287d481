//! Duration display utilities.

use std::fmt;

/// Formats a duration in minutes the way craft cards show it.
///
/// - under an hour: `45 min`
/// - whole hours: `2 hr`
/// - otherwise: `1 hr 30 min`
pub struct Minutes(pub u32);

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.0;
        if minutes < 60 {
            return write!(f, "{minutes} min");
        }
        let hours = minutes / 60;
        match minutes % 60 {
            0 => write!(f, "{hours} hr"),
            rest => write!(f, "{hours} hr {rest} min"),
        }
    }
}
