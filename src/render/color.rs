//! Color string handling.
//!
//! Style colors are written as `#RRGGBB`, `#AARRGGBB` or as one of a few
//! color names. Derived colors are always written back as `#aarrggbb`.

use rgb::RGBA8;
use std::collections::HashMap;
use std::fmt;

/// Errors that can occur while parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Starts with `#` but is not 6 or 8 hex digits.
    InvalidHex(String),
    /// Neither a hex color nor a known color name.
    UnknownName(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHex(s) => write!(f, "Invalid hex color: {}", s),
            ColorError::UnknownName(s) => write!(f, "Unknown color name: {}", s),
        }
    }
}

impl std::error::Error for ColorError {}

const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0xFF000000),
    ("darkgray", 0xFF444444),
    ("darkgrey", 0xFF444444),
    ("gray", 0xFF888888),
    ("grey", 0xFF888888),
    ("lightgray", 0xFFCCCCCC),
    ("lightgrey", 0xFFCCCCCC),
    ("white", 0xFFFFFFFF),
    ("red", 0xFFFF0000),
    ("green", 0xFF00FF00),
    ("blue", 0xFF0000FF),
    ("yellow", 0xFFFFFF00),
    ("cyan", 0xFF00FFFF),
    ("magenta", 0xFFFF00FF),
    ("aqua", 0xFF00FFFF),
    ("fuchsia", 0xFFFF00FF),
    ("lime", 0xFF00FF00),
    ("maroon", 0xFF800000),
    ("navy", 0xFF000080),
    ("olive", 0xFF808000),
    ("purple", 0xFF800080),
    ("silver", 0xFFC0C0C0),
    ("teal", 0xFF008080),
];

fn from_argb(argb: u32) -> RGBA8 {
    RGBA8::new(
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
        (argb >> 24) as u8,
    )
}

/// Parses a color string.
pub fn parse_color(s: &str) -> Result<RGBA8, ColorError> {
    if let Some(hex) = s.strip_prefix('#') {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }
        let value =
            u32::from_str_radix(hex, 16).map_err(|_| ColorError::InvalidHex(s.to_string()))?;
        return match hex.len() {
            6 => Ok(from_argb(0xFF00_0000 | value)),
            8 => Ok(from_argb(value)),
            _ => Err(ColorError::InvalidHex(s.to_string())),
        };
    }
    let name = s.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, argb)| from_argb(*argb))
        .ok_or_else(|| ColorError::UnknownName(s.to_string()))
}

/// Formats a color as `#aarrggbb`.
pub fn to_argb_string(color: RGBA8) -> String {
    format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        color.a, color.r, color.g, color.b
    )
}

/// Darkens a color by scaling its brightness with `factor` (0..=1).
///
/// Hue and saturation are unchanged, which for RGB means scaling every color
/// channel by the same factor. Alpha is kept.
pub fn darken(color: RGBA8, factor: f32) -> RGBA8 {
    let scale = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
    RGBA8::new(scale(color.r), scale(color.g), scale(color.b), color.a)
}

/// Makes a color more transparent: `transparency` of 0 keeps it as is, 1 makes
/// it fully transparent.
pub fn add_transparency(color: RGBA8, transparency: f32) -> RGBA8 {
    let opacity = (1.0 - transparency).clamp(0.0, 1.0);
    let alpha = (color.a as f32 * opacity).round() as u8;
    RGBA8 { a: alpha, ..color }
}

/// Scales the alpha channel, saturating at fully opaque.
pub fn scale_alpha(color: RGBA8, factor: f32) -> RGBA8 {
    let alpha = (color.a as f32 * factor).round().clamp(0.0, 255.0) as u8;
    RGBA8 { a: alpha, ..color }
}

/// Memoizes derived color strings by their input string.
///
/// Entries are never invalidated; the set of style colors in use is small and
/// stable.
#[derive(Debug, Default)]
pub struct ColorCache {
    entries: HashMap<String, String>,
    hits: u64,
    misses: u64,
}

impl ColorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `color`, computing it with `derive` on the
    /// first request.
    pub fn get_or_insert_with<F>(&mut self, color: &str, derive: F) -> String
    where
        F: FnOnce(&str) -> String,
    {
        if let Some(cached) = self.entries.get(color) {
            self.hits += 1;
            return cached.clone();
        }
        self.misses += 1;
        let derived = derive(color);
        self.entries.insert(color.to_string(), derived.clone());
        derived
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that had to compute the value.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
