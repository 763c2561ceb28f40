use std::collections::HashMap;

use crate::error::SceneError;

/// Named lookup table mapping symbolic names to concrete colors.
pub type Palette = HashMap<String, Color>;

/// Straight-alpha RGBA color, one byte per channel.
///
/// The layout matches the canvas pixel buffer, so a color can be written
/// into it byte-for-byte.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Resolves a color token against a palette.
    ///
    /// Resolution order:
    /// 1. palette key (takes precedence over any literal syntax),
    /// 2. `"(r,g,b)"` triple,
    /// 3. named color or `#`-prefixed hex literal.
    pub fn resolve(token: &str, palette: &Palette) -> Result<Color, SceneError> {
        if let Some(&color) = palette.get(token) {
            return Ok(color);
        }
        if let Some(triple) = parse_triple(token) {
            return triple;
        }
        Self::from_literal(token)
    }

    /// Parses a named color or a hex literal (`#rgb`, `#rgba`, `#rrggbb`,
    /// `#rrggbbaa`).
    pub fn from_literal(token: &str) -> Result<Color, SceneError> {
        if let Some(hex) = token.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| SceneError::InvalidColor(token.to_string()));
        }

        let color = match token.to_ascii_lowercase().as_str() {
            "black" => Color::rgb(0, 0, 0),
            "white" => Color::rgb(255, 255, 255),
            "red" => Color::rgb(255, 0, 0),
            "green" => Color::rgb(0, 255, 0),
            "blue" => Color::rgb(0, 0, 255),
            "yellow" => Color::rgb(255, 255, 0),
            "cyan" | "aqua" => Color::rgb(0, 255, 255),
            "magenta" | "fuchsia" => Color::rgb(255, 0, 255),
            "orange" => Color::rgb(255, 165, 0),
            "gray" | "grey" => Color::rgb(128, 128, 128),
            "transparent" => Color::rgba(0, 0, 0, 0),
            _ => return Err(SceneError::InvalidColor(token.to_string())),
        };
        Ok(color)
    }
}

/// Matches `"(<int>,<int>,<int>)"`: three non-negative base-10 integers,
/// comma-separated, parenthesized, no whitespace.
///
/// Returns `None` when the token does not match the pattern at all (it then
/// falls through to literal resolution). A token that matches the pattern but
/// carries a channel above 255 is an error, not a fall-through.
fn parse_triple(token: &str) -> Option<Result<Color, SceneError>> {
    let inner = token.strip_prefix('(')?.strip_suffix(')')?;
    let fields: Vec<&str> = inner.split(',').collect();
    if fields.len() != 3 {
        return None;
    }
    if !fields
        .iter()
        .all(|f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let mut channels = [0u8; 3];
    for (slot, field) in channels.iter_mut().zip(&fields) {
        match field.parse::<u8>() {
            Ok(value) => *slot = value,
            Err(_) => return Some(Err(SceneError::InvalidColor(token.to_string()))),
        }
    }
    Some(Ok(Color::rgb(channels[0], channels[1], channels[2])))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let expand = |n: u8| n << 4 | n;

    let color = match hex.len() {
        3 => Color::rgb(expand(nibble(0)?), expand(nibble(1)?), expand(nibble(2)?)),
        4 => Color::rgba(
            expand(nibble(0)?),
            expand(nibble(1)?),
            expand(nibble(2)?),
            expand(nibble(3)?),
        ),
        6 => Color::rgb(byte(0)?, byte(2)?, byte(4)?),
        8 => Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?),
        _ => return None,
    };
    Some(color)
}
