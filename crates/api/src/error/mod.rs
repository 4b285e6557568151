//! Error handling for the ecsign ecosystem
//!
//! Errors fall into two classes. Arithmetic and structural violations inside
//! the trusted field/curve layer (`InvalidFieldElement`) and a failing random
//! source (`InsufficientRandomness`) are fatal: they are propagated to the
//! caller and indicate a broken precondition or environment. Everything else
//! describes malformed caller input and is expected on attacker-controlled data.


/// Primary error type for ecsign operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A multiplicative inverse was requested for a value with none
    /// (congruent to zero, or sharing a factor with the modulus)
    #[error("Invalid field element in {context}: {message}")]
    InvalidFieldElement {
        context: &'static str,
        message: String,
    },

    /// Signature component `r` or `s` outside `[1, n-1]`
    #[error("Signature component out of range in {context}: {message}")]
    InvalidSignatureRange {
        context: &'static str,
        message: String,
    },

    /// A point does not satisfy the curve equation
    #[error("Point not on curve in {context}")]
    PointNotOnCurve { context: &'static str },

    /// The random source failed or could not produce an in-range value
    #[error("Insufficient randomness in {context}: {message}")]
    InsufficientRandomness {
        context: &'static str,
        message: String,
    },

    /// Invalid key error
    #[error("Invalid key in {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Signature rejected during verification
    #[error("Invalid signature in {context}: {message}")]
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("Invalid parameter in {context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for ecsign operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Returns `true` for errors that signal a violated internal precondition
    /// or an unusable environment rather than bad input.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InvalidFieldElement { .. } | Error::InsufficientRandomness { .. }
        )
    }

    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidFieldElement { message, .. } => {
                Self::InvalidFieldElement { context, message }
            }
            Self::InvalidSignatureRange { message, .. } => {
                Self::InvalidSignatureRange { context, message }
            }
            Self::PointNotOnCurve { .. } => Self::PointNotOnCurve { context },
            Self::InsufficientRandomness { message, .. } => {
                Self::InsufficientRandomness { context, message }
            }
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
        }
    }
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Self::InsufficientRandomness {
            context: "random source",
            message: e.to_string(),
        }
    }
}
