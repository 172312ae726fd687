//! Defaults the reference pan/zoom viewer applies to absent options, and the
//! fully resolved record.

use crate::color::{Rgba, parse_color};
use crate::options::{Options, to_json_pretty, to_ron_pretty};
use crate::validate::OptionsError;
use crate::values::{Handle, LimitZoom, Listeners, Overflow, ZoomControl};
use serde::Serialize;

/// Transition duration, in milliseconds.
pub const TRANSITION_DURATION: f64 = 200.0;

pub const DOUBLE_TAP: bool = true;

/// Zoom scale reached by a double-tap.
pub const DOUBLE_TAP_SCALE: f64 = 2.0;

pub const AUTO_ZOOM_OUT: bool = false;

pub const LIMIT_ZOOM: LimitZoom = LimitZoom::OriginalImageSize;

pub const DISABLE_PAN: bool = false;

pub const OVERFLOW: Overflow = Overflow::Hidden;

pub const DISABLE_ZOOM_CONTROL: ZoomControl = ZoomControl::Auto;

pub const ZOOM_CONTROL_SCALE: f64 = 1.0;

/// Translucent black backdrop.
pub const BACKGROUND_COLOR: &str = "rgba(0,0,0,0.85)";

pub const LIMIT_PAN: bool = false;

/// Minimum zoom scale (0 = no lower bound beyond fitting the image).
pub const MIN_SCALE: f64 = 0.0;

pub const LISTENERS: Listeners = Listeners::MouseAndTouch;

pub const WHEEL: bool = true;

pub const AUTO_HEIGHT: bool = false;

/// Zoom increment per wheel step.
pub const WHEEL_ZOOM_FACTOR: f64 = 0.2;

pub const DRAGGABLE_IMAGE: bool = false;

const _: () = {
    assert!(TRANSITION_DURATION >= 0.0);
    assert!(DOUBLE_TAP_SCALE > 0.0);
    assert!(ZOOM_CONTROL_SCALE > 0.0);
    assert!(MIN_SCALE >= 0.0);
    assert!(WHEEL_ZOOM_FACTOR > 0.0);
};

/// Options with every defaultable key filled in.
///
/// `disabled`, `element` and `eventHandler` have no default and stay optional.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedOptions {
    #[serde(rename = "transition-duration")]
    pub transition_duration: f64,
    #[serde(rename = "double-tap")]
    pub double_tap: bool,
    #[serde(rename = "double-tap-scale")]
    pub double_tap_scale: f64,
    #[serde(rename = "auto-zoom-out")]
    pub auto_zoom_out: bool,
    #[serde(rename = "limit-zoom")]
    pub limit_zoom: LimitZoom,
    pub disabled: Option<f64>,
    pub element: Option<Handle>,
    #[serde(rename = "disablePan")]
    pub disable_pan: bool,
    pub overflow: Overflow,
    #[serde(rename = "disableZoomControl")]
    pub disable_zoom_control: ZoomControl,
    #[serde(rename = "zoomControlScale")]
    pub zoom_control_scale: f64,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
    #[serde(rename = "limitPan")]
    pub limit_pan: bool,
    #[serde(rename = "minScale")]
    pub min_scale: f64,
    #[serde(rename = "eventHandler")]
    pub event_handler: Option<Handle>,
    pub listeners: Listeners,
    pub wheel: bool,
    #[serde(rename = "autoHeight")]
    pub auto_height: bool,
    #[serde(rename = "wheelZoomFactor")]
    pub wheel_zoom_factor: f64,
    #[serde(rename = "draggableImage")]
    pub draggable_image: bool,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Options::default().resolve()
    }
}

impl ResolvedOptions {
    /// Decodes `backgroundColor`, if it is in a syntax this crate understands.
    pub fn background_rgba(&self) -> Option<Rgba> {
        parse_color(&self.background_color)
    }

    pub fn to_json_pretty(&self) -> Result<String, OptionsError> {
        to_json_pretty(self)
    }

    pub fn to_ron_pretty(&self) -> Result<String, OptionsError> {
        to_ron_pretty(self)
    }
}

impl Options {
    /// Fills every absent key with the viewer's default.
    pub fn resolve(&self) -> ResolvedOptions {
        let resolved = ResolvedOptions {
            transition_duration: self.transition_duration.unwrap_or(TRANSITION_DURATION),
            double_tap: self.double_tap.unwrap_or(DOUBLE_TAP),
            double_tap_scale: self.double_tap_scale.unwrap_or(DOUBLE_TAP_SCALE),
            auto_zoom_out: self.auto_zoom_out.unwrap_or(AUTO_ZOOM_OUT),
            limit_zoom: self.limit_zoom.unwrap_or(LIMIT_ZOOM),
            disabled: self.disabled,
            element: self.element.clone(),
            disable_pan: self.disable_pan.unwrap_or(DISABLE_PAN),
            overflow: self.overflow.unwrap_or(OVERFLOW),
            disable_zoom_control: self.disable_zoom_control.unwrap_or(DISABLE_ZOOM_CONTROL),
            zoom_control_scale: self.zoom_control_scale.unwrap_or(ZOOM_CONTROL_SCALE),
            background_color: self
                .background_color
                .clone()
                .unwrap_or_else(|| BACKGROUND_COLOR.to_owned()),
            limit_pan: self.limit_pan.unwrap_or(LIMIT_PAN),
            min_scale: self.min_scale.unwrap_or(MIN_SCALE),
            event_handler: self.event_handler.clone(),
            listeners: self.listeners.unwrap_or(LISTENERS),
            wheel: self.wheel.unwrap_or(WHEEL),
            auto_height: self.auto_height.unwrap_or(AUTO_HEIGHT),
            wheel_zoom_factor: self.wheel_zoom_factor.unwrap_or(WHEEL_ZOOM_FACTOR),
            draggable_image: self.draggable_image.unwrap_or(DRAGGABLE_IMAGE),
        };
        log::debug!("resolved pan/zoom options: {resolved:?}");
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_options_resolve_to_defaults() {
        let resolved = Options::default().resolve();
        assert_eq!(resolved.transition_duration, 200.0);
        assert!(resolved.double_tap);
        assert_eq!(resolved.double_tap_scale, 2.0);
        assert_eq!(resolved.limit_zoom, LimitZoom::OriginalImageSize);
        assert_eq!(resolved.overflow, Overflow::Hidden);
        assert_eq!(resolved.disable_zoom_control, ZoomControl::Auto);
        assert_eq!(resolved.listeners, Listeners::MouseAndTouch);
        assert_eq!(resolved.wheel_zoom_factor, 0.2);
        assert_eq!(resolved.disabled, None);
        assert_eq!(resolved.element, None);
    }

    #[test]
    fn set_values_win_over_defaults() {
        let options = Options {
            wheel: Some(false),
            limit_zoom: Some(LimitZoom::Scale(5.0)),
            background_color: Some("white".to_owned()),
            disabled: Some(1.0),
            ..Default::default()
        };
        let resolved = options.resolve();
        assert!(!resolved.wheel);
        assert_eq!(resolved.limit_zoom, LimitZoom::Scale(5.0));
        assert_eq!(resolved.background_color, "white");
        assert_eq!(resolved.disabled, Some(1.0));
        assert!(!resolved.draggable_image);
    }

    #[test]
    fn resolved_json_uses_wire_keys_and_skips_unset_handles() {
        let value = serde_json::to_value(ResolvedOptions::default()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 17);
        assert_eq!(object["limit-zoom"], json!("original image size"));
        assert_eq!(object["listeners"], json!("mouse and touch"));
        assert_eq!(object["backgroundColor"], json!("rgba(0,0,0,0.85)"));
        assert!(!object.contains_key("disabled"));
        assert!(!object.contains_key("element"));
        assert!(!object.contains_key("eventHandler"));
    }

    #[test]
    fn default_background_decodes() {
        let rgba = ResolvedOptions::default().background_rgba().unwrap();
        assert_eq!((rgba.r, rgba.g, rgba.b), (0, 0, 0));
        assert!((rgba.a - 0.85).abs() < f32::EPSILON);
    }

    #[test]
    fn resolved_ron_is_readable_as_options() {
        let text = ResolvedOptions::default().to_ron_pretty().unwrap();
        let options = Options::from_ron(&text).unwrap();
        assert_eq!(options.resolve(), ResolvedOptions::default());
    }
}
