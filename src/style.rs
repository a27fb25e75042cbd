//! Text styles.
//!
//! A style is a bag of formatting attributes that renders to a prefix of RTF
//! control words. Font and color references are resolved against tables
//! passed in by the caller at render time; styles never hold on to a table.

use crate::control::{push_control_param, push_control_word};
use crate::error::Result;
use crate::font::Font;
use crate::types::{Color, ColorTable, FontTable};
use serde::{Deserialize, Serialize};

/// Text flow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlowDirection {
    /// Left-to-right text (the RTF default, emits nothing)
    #[default]
    LeftToRight,
    /// Right-to-left text
    RightToLeft,
}

/// Common interface of all style kinds.
pub trait Style {
    /// Check if this is a character style
    fn is_character_style(&self) -> bool {
        false
    }

    /// Control words that switch this style on.
    ///
    /// Returns `Ok(None)` when the style contributes nothing, which callers
    /// can tell apart from an empty prefix.
    fn prefix(&self, fonts: &FontTable, colors: &ColorTable) -> Result<Option<String>>;

    /// Control words written after the styled content, before the group closes.
    fn suffix(&self, _fonts: &FontTable, _colors: &ColorTable) -> Option<String> {
        None
    }
}

/// Character-level formatting.
///
/// # Examples
///
/// ```rust
/// use litchi_rtf::{CharacterStyle, Color, ColorTable, FontTable, Style};
///
/// let mut colors = ColorTable::new();
/// colors.add(Color::new(255, 0, 0));
///
/// let style = CharacterStyle::new()
///     .bold()
///     .foreground(Color::new(255, 0, 0));
/// let prefix = style.prefix(&FontTable::new(), &colors)?;
/// assert_eq!(prefix.as_deref(), Some("\\b\\cf1"));
/// # Ok::<(), litchi_rtf::RtfError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CharacterStyle {
    /// Bold (`\b`)
    pub bold: bool,
    /// Italic (`\i`)
    pub italic: bool,
    /// Continuous underline (`\ul`)
    pub underline: bool,
    /// Raised, reduced-size text (`\super`)
    pub superscript: bool,
    /// All capitals (`\caps`)
    pub capitalize: bool,
    /// Small capitals (`\scaps`)
    pub small_caps: bool,
    /// Single strikethrough (`\strike`)
    pub strike: bool,
    /// Lowered, reduced-size text (`\sub`)
    pub subscript: bool,
    /// Hidden text (`\v`)
    pub hidden: bool,
    /// Text color, looked up in the color table (`\cfN`)
    pub foreground: Option<Color>,
    /// Highlight color, looked up in the color table (`\cbN`)
    pub background: Option<Color>,
    /// Font, looked up in the font table (`\fN`)
    pub font: Option<Font>,
    /// Font size in half-points, truncated toward zero when rendered (`\fsN`)
    pub font_size: Option<f64>,
    /// Text direction; right-to-left emits `\rtlch`
    pub flow: FlowDirection,
}

impl CharacterStyle {
    /// Create a style with every attribute unset.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set underline.
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Set the text color.
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Set the highlight color.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the font.
    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the font size in half-points.
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set the flow direction.
    pub fn flow(mut self, flow: FlowDirection) -> Self {
        self.flow = flow;
        self
    }
}

impl Style for CharacterStyle {
    fn is_character_style(&self) -> bool {
        true
    }

    fn prefix(&self, fonts: &FontTable, colors: &ColorTable) -> Result<Option<String>> {
        let mut text = String::new();

        let toggles = [
            (self.bold, "b"),
            (self.italic, "i"),
            (self.underline, "ul"),
            (self.superscript, "super"),
            (self.capitalize, "caps"),
            (self.small_caps, "scaps"),
            (self.strike, "strike"),
            (self.subscript, "sub"),
            (self.hidden, "v"),
        ];
        for (enabled, word) in toggles {
            if enabled {
                push_control_word(&mut text, word);
            }
        }

        if let Some(color) = &self.foreground {
            push_control_param(&mut text, "cf", colors.resolve(color)?);
        }
        if let Some(color) = &self.background {
            push_control_param(&mut text, "cb", colors.resolve(color)?);
        }
        if let Some(font) = &self.font {
            push_control_param(&mut text, "f", fonts.resolve(font)?);
        }
        if let Some(size) = self.font_size {
            push_control_param(&mut text, "fs", size.trunc() as i64);
        }
        if self.flow == FlowDirection::RightToLeft {
            push_control_word(&mut text, "rtlch");
        }

        Ok((!text.is_empty()).then_some(text))
    }
}
