//! Options contract for a pan/zoom image viewer.
//!
//! [`Options`] is the record a caller hands to a viewer at construction time.
//! Every key is optional and keeps the exact wire spelling existing callers
//! use (`"double-tap-scale"`, `"disableZoomControl"`, ...). Parsing enforces
//! each key's type and closed literal sets; [`Options::validate`] adds range
//! checks; [`Options::resolve`] fills absent keys with the viewer's defaults.
//!
//! ```
//! use pinch_zoom_options::{Listeners, Options};
//!
//! let options = Options::from_json(r#"{ "listeners": "mouse and touch", "wheel": true }"#)?;
//! assert_eq!(options.listeners, Some(Listeners::MouseAndTouch));
//! assert_eq!(options.resolve().wheel_zoom_factor, 0.2);
//! # Ok::<(), pinch_zoom_options::OptionsError>(())
//! ```

pub mod advisory;
pub mod color;
pub mod defaults;
pub mod loader;
pub mod options;
pub mod validate;
pub mod values;

pub use advisory::Advisory;
pub use color::{Rgba, parse_color};
pub use defaults::ResolvedOptions;
pub use loader::{Format, LoadError, load_file};
pub use options::Options;
pub use validate::{Constraint, OptionsError};
pub use values::{
    Handle, LimitZoom, Listeners, ORIGINAL_IMAGE_SIZE, Overflow, UnknownLiteral, ZoomControl,
};
