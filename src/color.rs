//! Best-effort decoding of `backgroundColor` strings.
//!
//! The viewer treats the value as opaque CSS; this only understands the common
//! hex and `rgb()`/`rgba()` forms plus a few names. Anything else is left to the
//! consumer.

use regex::Regex;
use std::sync::OnceLock;

/// An 8-bit RGB color with a unit alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

fn hex_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#(?<digits>[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").ok()
    })
    .as_ref()
}

fn functional_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^rgba?\(\s*(?<r>\d{1,3})\s*,\s*(?<g>\d{1,3})\s*,\s*(?<b>\d{1,3})\s*(?:,\s*(?<a>\d*\.?\d+)\s*)?\)$",
        )
        .ok()
    })
    .as_ref()
}

/// Parses a CSS color string.
pub fn parse_color(input: &str) -> Option<Rgba> {
    let input = input.trim();

    if let Some(caps) = hex_regex()?.captures(input) {
        return parse_hex(caps.name("digits")?.as_str());
    }

    if let Some(caps) = functional_regex()?.captures(input) {
        let r: u8 = caps.name("r")?.as_str().parse().ok()?;
        let g: u8 = caps.name("g")?.as_str().parse().ok()?;
        let b: u8 = caps.name("b")?.as_str().parse().ok()?;
        let a = match caps.name("a") {
            Some(alpha) => alpha.as_str().parse::<f32>().ok()?.clamp(0.0, 1.0),
            None => 1.0,
        };
        return Some(Rgba { r, g, b, a });
    }

    named_color(input)
}

fn parse_hex(digits: &str) -> Option<Rgba> {
    let channel = |i: usize, width: usize| -> Option<u8> {
        let value = u8::from_str_radix(digits.get(i * width..(i + 1) * width)?, 16).ok()?;
        // #abc is shorthand for #aabbcc
        Some(if width == 1 { value * 17 } else { value })
    };

    let width = if digits.len() <= 4 { 1 } else { 2 };
    let count = digits.len() / width;

    let a = if count == 4 {
        f32::from(channel(3, width)?) / 255.0
    } else {
        1.0
    };

    Some(Rgba {
        r: channel(0, width)?,
        g: channel(1, width)?,
        b: channel(2, width)?,
        a,
    })
}

fn named_color(name: &str) -> Option<Rgba> {
    let rgba = match name.to_ascii_lowercase().as_str() {
        "transparent" => Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: 0.0,
        },
        "black" => Rgba::opaque(0, 0, 0),
        "white" => Rgba::opaque(255, 255, 255),
        "gray" | "grey" => Rgba::opaque(128, 128, 128),
        "red" => Rgba::opaque(255, 0, 0),
        "green" => Rgba::opaque(0, 128, 0),
        "blue" => Rgba::opaque(0, 0, 255),
        _ => return None,
    };
    Some(rgba)
}
