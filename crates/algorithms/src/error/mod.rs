//! Error handling for the arithmetic layer

use std::borrow::Cow;

use ecsign_api::{Error as ApiError, Result as ApiResult};

/// The error type for field and curve arithmetic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Inverse requested for a value that has none modulo the field prime
    #[error("No multiplicative inverse in {context}")]
    NoInverse {
        /// Operation that requested the inverse
        context: &'static str,
    },

    /// Coordinates do not satisfy the curve equation
    #[error("Point not on curve: {context}")]
    NotOnCurve {
        /// What was being validated
        context: &'static str,
    },

    /// The random source failed or produced no usable value
    #[error("Randomness failure in {context}: {details}")]
    Randomness {
        /// Operation that consumed randomness
        context: &'static str,
        /// Additional details about the failure
        details: String,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for arithmetic operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => ApiError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => ApiError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::NoInverse { context } => ApiError::InvalidFieldElement {
                context,
                message: "value has no multiplicative inverse".to_string(),
            },
            Error::NotOnCurve { context } => ApiError::PointNotOnCurve { context },
            Error::Randomness { context, details } => ApiError::InsufficientRandomness {
                context,
                message: details,
            },
        }
    }
}

/// Convert an arithmetic result to an API result with additional context
#[inline]
pub fn to_api_result<T>(r: Result<T>, ctx: &'static str) -> ApiResult<T> {
    r.map_err(|e| ApiError::from(e).with_context(ctx))
}

// Include the validation submodule
pub mod validate;
