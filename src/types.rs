//! Shared resource types: colors and the document font/color tables.

use crate::control::{push_control_param, push_control_word, push_indent};
use crate::error::{Result, RtfError};
use crate::font::Font;
use serde::{Deserialize, Serialize};
use std::fmt;

/// RTF color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0-255)
    pub red: u8,
    /// Green component (0-255)
    pub green: u8,
    /// Blue component (0-255)
    pub blue: u8,
}

impl Color {
    /// Create a new color.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Black color.
    #[inline]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// White color.
    #[inline]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Create a color from a hex string such as `"FF0000"` or `"#FF0000"`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(red, green, blue))
    }

    /// Convert to hex string (without `#` prefix).
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Color table entry body: `\redR\greenG\blueB`.
    pub fn to_rtf(&self) -> String {
        let mut out = String::with_capacity(24);
        push_control_param(&mut out, "red", self.red);
        push_control_param(&mut out, "green", self.green);
        push_control_param(&mut out, "blue", self.blue);
        out
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Color table containing document colors.
///
/// Entry 0 of a rendered RTF color table is the reader's automatic color, so
/// stored colors are numbered from 1. Adding a color twice returns the index
/// it already has.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTable {
    colors: Vec<Color>,
}

impl ColorTable {
    /// Create a new color table.
    #[inline]
    pub const fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Add a color to the table and return its index.
    pub fn add(&mut self, color: Color) -> usize {
        if let Some(index) = self.index_of(&color) {
            return index;
        }
        self.colors.push(color);
        self.colors.len()
    }

    /// Index of a color, or `None` if the table does not contain it.
    #[inline]
    pub fn index_of(&self, color: &Color) -> Option<usize> {
        self.colors.iter().position(|c| c == color).map(|pos| pos + 1)
    }

    /// Index of a color, failing with [`RtfError::UnresolvedReference`] when absent.
    pub(crate) fn resolve(&self, color: &Color) -> Result<usize> {
        self.index_of(color).ok_or_else(|| {
            RtfError::UnresolvedReference(format!("color {color} is not in the color table"))
        })
    }

    /// Get a color by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Color> {
        index.checked_sub(1).and_then(|pos| self.colors.get(pos))
    }

    /// Number of stored colors (the automatic color is not counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no colors have been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get all colors in the table.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Generate the `{\colortbl ...}` group.
    pub fn to_rtf(&self, indent: usize) -> String {
        let mut out = String::new();
        push_indent(&mut out, indent);
        out.push('{');
        push_control_word(&mut out, "colortbl");
        out.push('\n');
        push_indent(&mut out, indent);
        out.push(';');
        for color in &self.colors {
            out.push('\n');
            push_indent(&mut out, indent);
            out.push_str(&color.to_rtf());
            out.push(';');
        }
        out.push('\n');
        push_indent(&mut out, indent);
        out.push('}');
        out
    }
}

/// Font table containing document fonts.
///
/// Fonts are numbered from 0 in insertion order. Adding a font twice returns
/// the index it already has.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontTable {
    fonts: Vec<Font>,
}

impl FontTable {
    /// Create a new font table.
    #[inline]
    pub const fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Add a font to the table and return its index.
    pub fn add(&mut self, font: Font) -> usize {
        if let Some(index) = self.index_of(&font) {
            return index;
        }
        self.fonts.push(font);
        self.fonts.len() - 1
    }

    /// Index of a font, or `None` if the table does not contain it.
    #[inline]
    pub fn index_of(&self, font: &Font) -> Option<usize> {
        self.fonts.iter().position(|f| f == font)
    }

    /// Index of a font, failing with [`RtfError::UnresolvedReference`] when absent.
    pub(crate) fn resolve(&self, font: &Font) -> Result<usize> {
        self.index_of(font).ok_or_else(|| {
            RtfError::UnresolvedReference(format!("font ({font}) is not in the font table"))
        })
    }

    /// Get a font by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Font> {
        self.fonts.get(index)
    }

    /// Number of fonts.
    #[inline]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Whether no fonts have been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Get all fonts in the table.
    #[inline]
    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }

    /// Generate the `{\fonttbl ...}` group.
    pub fn to_rtf(&self, indent: usize) -> String {
        let mut out = String::new();
        push_indent(&mut out, indent);
        out.push('{');
        push_control_word(&mut out, "fonttbl");
        for (index, font) in self.fonts.iter().enumerate() {
            out.push('\n');
            push_indent(&mut out, indent);
            out.push('{');
            push_control_param(&mut out, "f", index);
            out.push_str(&font.to_rtf(0));
            out.push('}');
        }
        out.push('\n');
        push_indent(&mut out, indent);
        out.push('}');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::from_hex("#FF8000"), Some(Color::new(255, 128, 0)));
        assert_eq!(Color::from_hex("0000ff"), Some(Color::new(0, 0, 255)));
        assert_eq!(Color::from_hex("FFF"), None);
        assert_eq!(Color::from_hex("GG0000"), None);
        assert_eq!(Color::new(255, 128, 0).to_string(), "#FF8000");
    }

    #[test]
    fn test_color_table_indices() {
        let mut table = ColorTable::new();
        assert!(table.is_empty());
        assert_eq!(table.add(Color::black()), 1);
        assert_eq!(table.add(Color::white()), 2);
        assert_eq!(table.add(Color::black()), 1);
        assert_eq!(table.len(), 2);

        assert_eq!(table.index_of(&Color::white()), Some(2));
        assert_eq!(table.index_of(&Color::new(1, 2, 3)), None);
        assert_eq!(table.get(0), None);
        assert_eq!(table.get(2), Some(&Color::white()));
        assert!(matches!(
            table.resolve(&Color::new(1, 2, 3)),
            Err(RtfError::UnresolvedReference(_))
        ));
    }

    #[test]
    fn test_color_table_rtf() {
        let mut table = ColorTable::new();
        table.add(Color::new(255, 0, 0));
        table.add(Color::new(0, 0, 255));
        assert_eq!(
            table.to_rtf(0),
            "{\\colortbl\n;\n\\red255\\green0\\blue0;\n\\red0\\green0\\blue255;\n}"
        );
        assert_eq!(ColorTable::new().to_rtf(1), " {\\colortbl\n ;\n }");
    }

    #[test]
    fn test_font_table() {
        let mut table = FontTable::new();
        let times = Font::new("roman", "Times New Roman").unwrap();
        let courier = Font::new("modern", "Courier New").unwrap();

        assert_eq!(table.add(times.clone()), 0);
        assert_eq!(table.add(courier.clone()), 1);
        assert_eq!(table.add(times.clone()), 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.index_of(&courier), Some(1));
        assert_eq!(table.get(1), Some(&courier));
        assert_eq!(table.index_of(&Font::new("swiss", "Arial").unwrap()), None);

        assert_eq!(
            table.to_rtf(0),
            "{\\fonttbl\n{\\f0\\froman Times New Roman;}\n{\\f1\\fmodern Courier New;}\n}"
        );
    }
}
