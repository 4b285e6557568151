//! Validation utilities for the arithmetic layer

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::Length {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate that a point satisfies its curve equation
#[inline(always)]
pub fn on_curve(is_on_curve: bool, context: &'static str) -> Result<()> {
    if !is_on_curve {
        return Err(Error::NotOnCurve { context });
    }
    Ok(())
}
