//! Construction-time checks and the error type for option sets.

use crate::options::{Options, keys};
use crate::values::LimitZoom;
use thiserror::Error;

/// Errors that can occur when building, parsing or encoding options.
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("invalid JSON options: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid RON options: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("failed to encode options as JSON: {0}")]
    JsonEncode(#[source] serde_json::Error),
    #[error("failed to encode options as RON: {0}")]
    RonEncode(#[from] ron::Error),
    #[error("malformed override `{0}`, expected KEY=VALUE")]
    MalformedOverride(String),
    #[error("invalid value for `{key}`: {constraint}")]
    InvalidValue {
        key: &'static str,
        constraint: Constraint,
    },
}

/// The range rule a rejected value broke.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    #[error("must be a finite number")]
    Finite,
    #[error("must be zero or greater")]
    NonNegative,
    #[error("must be greater than zero")]
    Positive,
    #[error("must not be blank")]
    NotBlank,
}

impl Options {
    /// Checks numeric ranges and string contents.
    ///
    /// Enumerated fields need no check here; their closed sets are enforced
    /// while parsing.
    pub fn validate(&self) -> Result<(), OptionsError> {
        non_negative(keys::TRANSITION_DURATION, self.transition_duration)?;
        positive(keys::DOUBLE_TAP_SCALE, self.double_tap_scale)?;
        if let Some(LimitZoom::Scale(scale)) = self.limit_zoom {
            positive(keys::LIMIT_ZOOM, Some(scale))?;
        }
        finite(keys::DISABLED, self.disabled)?;
        positive(keys::ZOOM_CONTROL_SCALE, self.zoom_control_scale)?;
        if let Some(color) = &self.background_color
            && color.trim().is_empty()
        {
            return Err(invalid(keys::BACKGROUND_COLOR, Constraint::NotBlank));
        }
        non_negative(keys::MIN_SCALE, self.min_scale)?;
        positive(keys::WHEEL_ZOOM_FACTOR, self.wheel_zoom_factor)?;
        Ok(())
    }

    /// Validates and returns `self`, for use at the end of a struct literal.
    pub fn validated(self) -> Result<Self, OptionsError> {
        self.validate()?;
        Ok(self)
    }
}

fn invalid(key: &'static str, constraint: Constraint) -> OptionsError {
    OptionsError::InvalidValue { key, constraint }
}

fn finite(key: &'static str, value: Option<f64>) -> Result<(), OptionsError> {
    match value {
        Some(v) if !v.is_finite() => Err(invalid(key, Constraint::Finite)),
        _ => Ok(()),
    }
}

fn non_negative(key: &'static str, value: Option<f64>) -> Result<(), OptionsError> {
    finite(key, value)?;
    match value {
        Some(v) if v < 0.0 => Err(invalid(key, Constraint::NonNegative)),
        _ => Ok(()),
    }
}

fn positive(key: &'static str, value: Option<f64>) -> Result<(), OptionsError> {
    finite(key, value)?;
    match value {
        Some(v) if v <= 0.0 => Err(invalid(key, Constraint::Positive)),
        _ => Ok(()),
    }
}
