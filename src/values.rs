//! Value types for the enumerated, union-typed and opaque options.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Literal accepted by `limit-zoom` to bound zooming at the image's native resolution.
pub const ORIGINAL_IMAGE_SIZE: &str = "original image size";

/// A string that is not one of an enumerated field's literals.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {field} value `{value}`, expected one of: {}", expected.join(", "))]
pub struct UnknownLiteral {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

/// Declares a closed set of string literals.
///
/// The literals are the wire representation in every format, so RON files use
/// `"mouse and touch"` exactly like JSON does.
macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident for $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every accepted literal, in declaration order.
            pub const LITERALS: &'static [&'static str] = &[$($lit),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $lit, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLiteral;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $lit => Ok($name::$variant), )+
                    _ => Err(UnknownLiteral {
                        field: $field,
                        value: s.to_owned(),
                        expected: Self::LITERALS,
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct LiteralVisitor;

                impl Visitor<'_> for LiteralVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        write!(f, "one of {:?}", $name::LITERALS)
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<$name, E> {
                        v.parse()
                            .map_err(|_| E::unknown_variant(v, $name::LITERALS))
                    }
                }

                deserializer.deserialize_str(LiteralVisitor)
            }
        }
    };
}

literal_enum! {
    /// Clipping of content outside the viewport (`overflow`).
    pub enum Overflow for "overflow" {
        Hidden => "hidden",
        Visible => "visible",
    }
}

literal_enum! {
    /// Visibility of the on-screen zoom control (`disableZoomControl`).
    pub enum ZoomControl for "disableZoomControl" {
        /// Never show the control.
        Disable => "disable",
        /// Always show the control.
        Never => "never",
        /// Show the control only on devices with a pointer.
        Auto => "auto",
    }
}

literal_enum! {
    /// Input modalities the viewer listens to (`listeners`).
    pub enum Listeners for "listeners" {
        Auto => "auto",
        MouseAndTouch => "mouse and touch",
    }
}

/// Upper zoom bound (`limit-zoom`): a numeric scale or the image's native size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LimitZoom {
    Scale(f64),
    OriginalImageSize,
}

impl LimitZoom {
    /// The numeric bound, if one was given.
    pub fn scale(self) -> Option<f64> {
        match self {
            LimitZoom::Scale(scale) => Some(scale),
            LimitZoom::OriginalImageSize => None,
        }
    }
}

impl From<f64> for LimitZoom {
    fn from(scale: f64) -> Self {
        LimitZoom::Scale(scale)
    }
}

impl fmt::Display for LimitZoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitZoom::Scale(scale) => write!(f, "{scale}"),
            LimitZoom::OriginalImageSize => f.write_str(ORIGINAL_IMAGE_SIZE),
        }
    }
}

impl Serialize for LimitZoom {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LimitZoom::Scale(scale) => serializer.serialize_f64(*scale),
            LimitZoom::OriginalImageSize => serializer.serialize_str(ORIGINAL_IMAGE_SIZE),
        }
    }
}

impl<'de> Deserialize<'de> for LimitZoom {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LimitZoomVisitor;

        impl Visitor<'_> for LimitZoomVisitor {
            type Value = LimitZoom;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a number or \"{ORIGINAL_IMAGE_SIZE}\"")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<LimitZoom, E> {
                Ok(LimitZoom::Scale(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<LimitZoom, E> {
                Ok(LimitZoom::Scale(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<LimitZoom, E> {
                Ok(LimitZoom::Scale(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<LimitZoom, E> {
                if v == ORIGINAL_IMAGE_SIZE {
                    Ok(LimitZoom::OriginalImageSize)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(LimitZoomVisitor)
    }
}

/// An opaque, caller-supplied reference (`element`, `eventHandler`).
///
/// Any structured value is accepted and passed through untouched; nothing in
/// this crate looks inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(serde_json::Value);

impl Handle {
    pub fn new(value: impl Into<serde_json::Value>) -> Self {
        Handle(value.into())
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for Handle {
    fn from(value: serde_json::Value) -> Self {
        Handle(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn literals_round_trip_through_from_str() {
        for literal in Listeners::LITERALS {
            let parsed: Listeners = literal.parse().unwrap();
            assert_eq!(parsed.as_str(), *literal);
        }
        assert_eq!(
            "mouse and touch".parse::<Listeners>(),
            Ok(Listeners::MouseAndTouch)
        );
    }

    #[test]
    fn unknown_literal_names_field_and_choices() {
        let err = "scroll".parse::<Overflow>().unwrap_err();
        assert_eq!(err.field, "overflow");
        assert_eq!(
            err.to_string(),
            "unknown overflow value `scroll`, expected one of: hidden, visible"
        );
    }

    #[test]
    fn literals_are_case_sensitive() {
        assert!("Hidden".parse::<Overflow>().is_err());
        assert!("AUTO".parse::<ZoomControl>().is_err());
    }

    #[test]
    fn zoom_control_accepts_all_three_modes() {
        let modes: Vec<ZoomControl> =
            serde_json::from_value(json!(["disable", "never", "auto"])).unwrap();
        assert_eq!(
            modes,
            vec![ZoomControl::Disable, ZoomControl::Never, ZoomControl::Auto]
        );
    }

    #[test]
    fn enum_rejects_non_string() {
        assert!(serde_json::from_value::<Overflow>(json!(true)).is_err());
        assert!(serde_json::from_value::<Listeners>(json!(1)).is_err());
    }

    #[test]
    fn limit_zoom_accepts_numbers_and_native_size() {
        assert_eq!(
            serde_json::from_value::<LimitZoom>(json!(3)).unwrap(),
            LimitZoom::Scale(3.0)
        );
        assert_eq!(
            serde_json::from_value::<LimitZoom>(json!(2.5)).unwrap(),
            LimitZoom::Scale(2.5)
        );
        assert_eq!(
            serde_json::from_value::<LimitZoom>(json!("original image size")).unwrap(),
            LimitZoom::OriginalImageSize
        );
    }

    #[test]
    fn limit_zoom_rejects_other_strings_and_types() {
        let err = serde_json::from_value::<LimitZoom>(json!("max")).unwrap_err();
        assert!(err.to_string().contains("original image size"));
        assert!(serde_json::from_value::<LimitZoom>(json!(true)).is_err());
        assert!(serde_json::from_value::<LimitZoom>(json!([1])).is_err());
    }

    #[test]
    fn limit_zoom_serializes_back_to_wire_form() {
        assert_eq!(
            serde_json::to_value(LimitZoom::OriginalImageSize).unwrap(),
            json!("original image size")
        );
        assert_eq!(serde_json::to_value(LimitZoom::Scale(4.0)).unwrap(), json!(4.0));
    }

    #[test]
    fn handle_passes_any_value_through() {
        let raw = json!({ "selector": "#viewer", "nested": [1, 2, { "x": null }] });
        let handle: Handle = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(handle.as_value(), &raw);
        assert_eq!(serde_json::to_value(&handle).unwrap(), raw);
    }
}
