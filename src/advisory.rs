//! Cross-field observations that are worth a warning but never an error.

use crate::options::{Options, keys};
use std::fmt;

/// A non-fatal note about how set options interact.
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// The minimum scale is above the numeric zoom limit.
    MinScaleAboveLimit { min_scale: f64, limit_zoom: f64 },
    /// `double-tap-scale` has no effect with double-tap turned off.
    DoubleTapScaleUnused,
    /// `wheelZoomFactor` has no effect with wheel zoom turned off.
    WheelZoomFactorUnused,
    /// The widget is disabled while panning is explicitly left enabled.
    DisabledWithPan { disabled: f64 },
}

impl Advisory {
    /// Wire keys involved, for reporting.
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            Advisory::MinScaleAboveLimit { .. } => &[keys::MIN_SCALE, keys::LIMIT_ZOOM],
            Advisory::DoubleTapScaleUnused => &[keys::DOUBLE_TAP_SCALE, keys::DOUBLE_TAP],
            Advisory::WheelZoomFactorUnused => &[keys::WHEEL_ZOOM_FACTOR, keys::WHEEL],
            Advisory::DisabledWithPan { .. } => &[keys::DISABLED, keys::DISABLE_PAN],
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::MinScaleAboveLimit {
                min_scale,
                limit_zoom,
            } => write!(
                f,
                "`minScale` ({min_scale}) is above `limit-zoom` ({limit_zoom})"
            ),
            Advisory::DoubleTapScaleUnused => {
                f.write_str("`double-tap-scale` is set but `double-tap` is false")
            }
            Advisory::WheelZoomFactorUnused => {
                f.write_str("`wheelZoomFactor` is set but `wheel` is false")
            }
            Advisory::DisabledWithPan { disabled } => write!(
                f,
                "`disabled` is {disabled} but `disablePan` is explicitly false"
            ),
        }
    }
}

impl Options {
    /// Lists cross-field observations. Only explicitly set keys are considered.
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut advisories = Vec::new();

        if let (Some(min_scale), Some(limit_zoom)) =
            (self.min_scale, self.limit_zoom.and_then(|l| l.scale()))
            && min_scale > limit_zoom
        {
            advisories.push(Advisory::MinScaleAboveLimit {
                min_scale,
                limit_zoom,
            });
        }

        if self.double_tap == Some(false) && self.double_tap_scale.is_some() {
            advisories.push(Advisory::DoubleTapScaleUnused);
        }

        if self.wheel == Some(false) && self.wheel_zoom_factor.is_some() {
            advisories.push(Advisory::WheelZoomFactorUnused);
        }

        if let Some(disabled) = self.disabled
            && self.is_disabled()
            && self.disable_pan == Some(false)
        {
            advisories.push(Advisory::DisabledWithPan { disabled });
        }

        advisories
    }
}
