//! The options record accepted when constructing a pan/zoom viewer.

use crate::validate::OptionsError;
use crate::values::{Handle, LimitZoom, Listeners, Overflow, ZoomControl};
use ron::extensions::Extensions;
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};

/// Wire keys, exactly as existing callers spell them.
pub mod keys {
    pub const TRANSITION_DURATION: &str = "transition-duration";
    pub const DOUBLE_TAP: &str = "double-tap";
    pub const DOUBLE_TAP_SCALE: &str = "double-tap-scale";
    pub const AUTO_ZOOM_OUT: &str = "auto-zoom-out";
    pub const LIMIT_ZOOM: &str = "limit-zoom";
    pub const DISABLED: &str = "disabled";
    pub const ELEMENT: &str = "element";
    pub const DISABLE_PAN: &str = "disablePan";
    pub const OVERFLOW: &str = "overflow";
    pub const DISABLE_ZOOM_CONTROL: &str = "disableZoomControl";
    pub const ZOOM_CONTROL_SCALE: &str = "zoomControlScale";
    pub const BACKGROUND_COLOR: &str = "backgroundColor";
    pub const LIMIT_PAN: &str = "limitPan";
    pub const MIN_SCALE: &str = "minScale";
    pub const EVENT_HANDLER: &str = "eventHandler";
    pub const LISTENERS: &str = "listeners";
    pub const WHEEL: &str = "wheel";
    pub const AUTO_HEIGHT: &str = "autoHeight";
    pub const WHEEL_ZOOM_FACTOR: &str = "wheelZoomFactor";
    pub const DRAGGABLE_IMAGE: &str = "draggableImage";
}

/// Caller-tunable settings for a pan/zoom viewer instance.
///
/// Every field is optional; an absent field defers to the viewer's default
/// (see [`Options::resolve`]). No cross-field constraint is enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Options {
    /// Duration of zoom and pan transitions
    #[serde(
        rename = "transition-duration",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_duration: Option<f64>,
    /// Double-tap to zoom
    #[serde(rename = "double-tap", default, skip_serializing_if = "Option::is_none")]
    pub double_tap: Option<bool>,
    /// Zoom scale applied on double-tap
    #[serde(
        rename = "double-tap-scale",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_scale: Option<f64>,
    /// Zoom back out after an interaction ends
    #[serde(rename = "auto-zoom-out", default, skip_serializing_if = "Option::is_none")]
    pub auto_zoom_out: Option<bool>,
    /// Maximum zoom scale
    #[serde(rename = "limit-zoom", default, skip_serializing_if = "Option::is_none")]
    pub limit_zoom: Option<LimitZoom>,
    /// Disables the widget. Numeric, unlike every other flag in the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<f64>,
    /// Element the viewer attaches to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<Handle>,
    #[serde(rename = "disablePan", default, skip_serializing_if = "Option::is_none")]
    pub disable_pan: Option<bool>,
    /// Clipping of content outside the viewport
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,
    /// Visibility of the on-screen zoom control
    #[serde(
        rename = "disableZoomControl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub disable_zoom_control: Option<ZoomControl>,
    /// Size factor of the zoom control
    #[serde(
        rename = "zoomControlScale",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub zoom_control_scale: Option<f64>,
    /// Background behind the image, in CSS color syntax for the reference viewer
    #[serde(
        rename = "backgroundColor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
    /// Keep the image bounds inside the viewport while panning
    #[serde(rename = "limitPan", default, skip_serializing_if = "Option::is_none")]
    pub limit_pan: Option<bool>,
    /// Minimum zoom scale
    #[serde(rename = "minScale", default, skip_serializing_if = "Option::is_none")]
    pub min_scale: Option<f64>,
    /// Handler for viewer events
    #[serde(rename = "eventHandler", default, skip_serializing_if = "Option::is_none")]
    pub event_handler: Option<Handle>,
    /// Input modalities the viewer listens to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listeners: Option<Listeners>,
    /// Mouse-wheel zoom
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wheel: Option<bool>,
    #[serde(rename = "autoHeight", default, skip_serializing_if = "Option::is_none")]
    pub auto_height: Option<bool>,
    /// Zoom increment per wheel step
    #[serde(
        rename = "wheelZoomFactor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub wheel_zoom_factor: Option<f64>,
    /// Drag the image itself to pan
    #[serde(
        rename = "draggableImage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub draggable_image: Option<bool>,
}

impl Options {
    /// Parses and validates options from JSON.
    pub fn from_json(input: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(input)?;
        options.validate()?;
        Ok(options)
    }

    /// Parses and validates options from RON.
    ///
    /// Optional values may be written bare (`wheel: true`) or wrapped
    /// (`wheel: Some(true)`). Hyphenated keys use raw identifiers, e.g.
    /// `r#double-tap: true`.
    pub fn from_ron(input: &str) -> Result<Self, OptionsError> {
        let options: Self = ron_options().from_str(input)?;
        options.validate()?;
        Ok(options)
    }

    /// Builds options from an already-decoded structured value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_value(value)?;
        options.validate()?;
        Ok(options)
    }

    /// Builds options from `KEY=VALUE` pairs using wire key names.
    ///
    /// Each value is read as a JSON literal when it parses as one, otherwise
    /// as a plain string, so `wheel=true`, `minScale=0.5` and
    /// `listeners=mouse and touch` all work.
    pub fn from_overrides<I, S>(pairs: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = serde_json::Map::new();

        for pair in pairs {
            let pair = pair.as_ref();
            let Some((key, raw)) = pair.split_once('=') else {
                return Err(OptionsError::MalformedOverride(pair.to_owned()));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(OptionsError::MalformedOverride(pair.to_owned()));
            }

            let raw = raw.trim();
            let value = serde_json::from_str(raw)
                .unwrap_or_else(|_| serde_json::Value::String(raw.to_owned()));
            map.insert(key.to_owned(), value);
        }

        Self::from_value(serde_json::Value::Object(map))
    }

    pub fn to_json_pretty(&self) -> Result<String, OptionsError> {
        to_json_pretty(self)
    }

    pub fn to_ron_pretty(&self) -> Result<String, OptionsError> {
        to_ron_pretty(self)
    }

    /// Returns `true` when no option is set.
    pub fn is_empty(&self) -> bool {
        *self == Options::default()
    }

    /// Wire keys of the options that are set, in declaration order.
    pub fn set_keys(&self) -> Vec<&'static str> {
        let presence = [
            (keys::TRANSITION_DURATION, self.transition_duration.is_some()),
            (keys::DOUBLE_TAP, self.double_tap.is_some()),
            (keys::DOUBLE_TAP_SCALE, self.double_tap_scale.is_some()),
            (keys::AUTO_ZOOM_OUT, self.auto_zoom_out.is_some()),
            (keys::LIMIT_ZOOM, self.limit_zoom.is_some()),
            (keys::DISABLED, self.disabled.is_some()),
            (keys::ELEMENT, self.element.is_some()),
            (keys::DISABLE_PAN, self.disable_pan.is_some()),
            (keys::OVERFLOW, self.overflow.is_some()),
            (keys::DISABLE_ZOOM_CONTROL, self.disable_zoom_control.is_some()),
            (keys::ZOOM_CONTROL_SCALE, self.zoom_control_scale.is_some()),
            (keys::BACKGROUND_COLOR, self.background_color.is_some()),
            (keys::LIMIT_PAN, self.limit_pan.is_some()),
            (keys::MIN_SCALE, self.min_scale.is_some()),
            (keys::EVENT_HANDLER, self.event_handler.is_some()),
            (keys::LISTENERS, self.listeners.is_some()),
            (keys::WHEEL, self.wheel.is_some()),
            (keys::AUTO_HEIGHT, self.auto_height.is_some()),
            (keys::WHEEL_ZOOM_FACTOR, self.wheel_zoom_factor.is_some()),
            (keys::DRAGGABLE_IMAGE, self.draggable_image.is_some()),
        ];
        presence
            .into_iter()
            .filter_map(|(key, set)| set.then_some(key))
            .collect()
    }

    /// Layers `over` on top of `self`; each key set in `over` wins.
    pub fn layer(self, over: Options) -> Options {
        Options {
            transition_duration: over.transition_duration.or(self.transition_duration),
            double_tap: over.double_tap.or(self.double_tap),
            double_tap_scale: over.double_tap_scale.or(self.double_tap_scale),
            auto_zoom_out: over.auto_zoom_out.or(self.auto_zoom_out),
            limit_zoom: over.limit_zoom.or(self.limit_zoom),
            disabled: over.disabled.or(self.disabled),
            element: over.element.or(self.element),
            disable_pan: over.disable_pan.or(self.disable_pan),
            overflow: over.overflow.or(self.overflow),
            disable_zoom_control: over.disable_zoom_control.or(self.disable_zoom_control),
            zoom_control_scale: over.zoom_control_scale.or(self.zoom_control_scale),
            background_color: over.background_color.or(self.background_color),
            limit_pan: over.limit_pan.or(self.limit_pan),
            min_scale: over.min_scale.or(self.min_scale),
            event_handler: over.event_handler.or(self.event_handler),
            listeners: over.listeners.or(self.listeners),
            wheel: over.wheel.or(self.wheel),
            auto_height: over.auto_height.or(self.auto_height),
            wheel_zoom_factor: over.wheel_zoom_factor.or(self.wheel_zoom_factor),
            draggable_image: over.draggable_image.or(self.draggable_image),
        }
    }

    /// Whether `disabled` is truthy: present, non-zero and not NaN.
    pub fn is_disabled(&self) -> bool {
        self.disabled.is_some_and(|d| d != 0.0 && !d.is_nan())
    }
}

/// RON settings shared by reading and writing option files.
pub(crate) fn ron_options() -> ron::Options {
    ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
}

pub(crate) fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, OptionsError> {
    serde_json::to_string_pretty(value).map_err(OptionsError::JsonEncode)
}

pub(crate) fn to_ron_pretty<T: Serialize>(value: &T) -> Result<String, OptionsError> {
    let pretty = PrettyConfig::new().extensions(Extensions::IMPLICIT_SOME);
    Ok(ron_options().to_string_pretty(value, pretty)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_is_valid() {
        let options = Options::from_json("{}").unwrap();
        assert!(options.is_empty());
    }

    #[test]
    fn hyphenated_keys_map_to_fields() {
        let options = Options::from_json(
            r#"{
                "transition-duration": 350,
                "double-tap": false,
                "double-tap-scale": 3,
                "auto-zoom-out": true,
                "limit-zoom": 4
            }"#,
        )
        .unwrap();

        assert_eq!(options.transition_duration, Some(350.0));
        assert_eq!(options.double_tap, Some(false));
        assert_eq!(options.double_tap_scale, Some(3.0));
        assert_eq!(options.auto_zoom_out, Some(true));
        assert_eq!(options.limit_zoom, Some(LimitZoom::Scale(4.0)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Options::from_json(r#"{ "doubleTap": true }"#).unwrap_err();
        assert!(err.to_string().contains("doubleTap"));
    }

    #[test]
    fn serialization_omits_absent_keys() {
        let options = Options {
            wheel: Some(true),
            min_scale: Some(0.5),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({ "wheel": true, "minScale": 0.5 })
        );
    }

    #[test]
    fn json_output_reads_back() {
        let options = Options {
            limit_zoom: Some(LimitZoom::OriginalImageSize),
            listeners: Some(Listeners::MouseAndTouch),
            element: Some(Handle::new(json!({ "id": "viewer" }))),
            ..Default::default()
        };
        let text = options.to_json_pretty().unwrap();
        assert!(text.contains("\"limit-zoom\": \"original image size\""));
        assert_eq!(Options::from_json(&text).unwrap(), options);
    }

    #[test]
    fn ron_accepts_bare_and_wrapped_optionals() {
        let options = Options::from_ron(
            r#"(
                wheel: true,
                wheelZoomFactor: Some(0.4),
                overflow: "visible",
                r#limit-zoom: "original image size",
            )"#,
        )
        .unwrap();

        assert_eq!(options.wheel, Some(true));
        assert_eq!(options.wheel_zoom_factor, Some(0.4));
        assert_eq!(options.overflow, Some(Overflow::Visible));
        assert_eq!(options.limit_zoom, Some(LimitZoom::OriginalImageSize));
    }

    #[test]
    fn ron_output_reads_back() {
        let options = Options {
            transition_duration: Some(120.0),
            disable_zoom_control: Some(ZoomControl::Never),
            background_color: Some("#202020".to_owned()),
            ..Default::default()
        };
        let text = options.to_ron_pretty().unwrap();
        assert_eq!(Options::from_ron(&text).unwrap(), options);
    }

    #[test]
    fn overrides_parse_literals_and_plain_strings() {
        let options = Options::from_overrides([
            "wheel=true",
            "minScale = 0.5",
            "listeners=mouse and touch",
            "backgroundColor=#fff",
            "limit-zoom=original image size",
        ])
        .unwrap();

        assert_eq!(options.wheel, Some(true));
        assert_eq!(options.min_scale, Some(0.5));
        assert_eq!(options.listeners, Some(Listeners::MouseAndTouch));
        assert_eq!(options.background_color.as_deref(), Some("#fff"));
        assert_eq!(options.limit_zoom, Some(LimitZoom::OriginalImageSize));
    }

    #[test]
    fn overrides_without_separator_are_rejected() {
        assert!(matches!(
            Options::from_overrides(["wheel"]),
            Err(OptionsError::MalformedOverride(_))
        ));
        assert!(matches!(
            Options::from_overrides(["=1"]),
            Err(OptionsError::MalformedOverride(_))
        ));
    }

    #[test]
    fn overrides_still_type_check() {
        assert!(Options::from_overrides(["disabled=true"]).is_err());
        assert!(Options::from_overrides(["wheel=yes"]).is_err());
    }

    #[test]
    fn set_keys_lists_wire_names() {
        let options =
            Options::from_json(r#"{ "wheel": false, "double-tap-scale": 1.5 }"#).unwrap();
        assert_eq!(options.set_keys(), vec!["double-tap-scale", "wheel"]);
        assert!(Options::default().set_keys().is_empty());
    }

    #[test]
    fn layer_prefers_upper_values() {
        let base = Options {
            wheel: Some(true),
            min_scale: Some(0.5),
            ..Default::default()
        };
        let over = Options {
            wheel: Some(false),
            overflow: Some(Overflow::Visible),
            ..Default::default()
        };

        let merged = base.layer(over);
        assert_eq!(merged.wheel, Some(false));
        assert_eq!(merged.min_scale, Some(0.5));
        assert_eq!(merged.overflow, Some(Overflow::Visible));
    }

    #[test]
    fn disabled_truthiness() {
        let with = |disabled| Options {
            disabled,
            ..Default::default()
        };
        assert!(!with(None).is_disabled());
        assert!(!with(Some(0.0)).is_disabled());
        assert!(!with(Some(f64::NAN)).is_disabled());
        assert!(with(Some(1.0)).is_disabled());
        assert!(with(Some(-2.0)).is_disabled());
    }
}
