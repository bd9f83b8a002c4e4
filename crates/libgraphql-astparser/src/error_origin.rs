use std::fmt;
use std::panic::Location;

/// The grammar-rule call site that recorded an internal diagnostic.
///
/// Captured through `#[track_caller]`, so it costs a copy of a
/// `&'static Location` and no stack walking.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ErrorOrigin {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl ErrorOrigin {
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
