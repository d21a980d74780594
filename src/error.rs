use thiserror::Error;

/// Rejected grid construction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The visible field is narrower than the widest supported pattern allows.
    #[error("visible width {width} is below the minimum of {min}")]
    TooNarrow { width: usize, min: usize },
    /// The visible field is shorter than the tallest supported pattern allows.
    #[error("visible height {height} is below the minimum of {min}")]
    TooShort { height: usize, min: usize },
    /// The field plus its margin cannot be addressed or allocated.
    #[error("visible field {width}x{height} is too large")]
    TooLarge { width: usize, height: usize },
}

/// Failure to resolve a pattern identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unknown pattern {0:?}, expected one of o, g, u, oscillator, glider, gun")]
    Unknown(String),
}
