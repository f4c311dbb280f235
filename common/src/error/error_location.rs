//! Source-location capture for error values.
//!
//! Every error enum in the workspace carries one of these, filled in via
//! `#[track_caller]` constructors, so a rendered error line points at the
//! call site that produced it rather than at the `From` impl.

use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location as PanicLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorLocation {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl ErrorLocation {
    pub const fn from(location: &'static PanicLocation<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl Display for ErrorLocation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "[{}:{}:{}]", self.file, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorLocation;
    use std::panic::Location;

    #[test]
    fn given_tracked_caller_when_captured_then_points_at_this_file() {
        let location = ErrorLocation::from(Location::caller());
        assert!(location.file.ends_with("error_location.rs"));
        assert!(location.line > 0);
    }

    #[test]
    fn given_location_when_displayed_then_bracketed_triple() {
        let location = ErrorLocation {
            file: "src/x.rs",
            line: 7,
            column: 3,
        };
        assert_eq!(location.to_string(), "[src/x.rs:7:3]");
        assert_eq!(location, location);
    }
}
