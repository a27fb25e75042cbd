//! Font descriptors.
//!
//! A [`Font`] names one font by its RTF family classification and display
//! name. Fonts are immutable values; styles and the document font table hold
//! their own clones and compare them structurally.

use crate::control::{push_control_word, push_indent};
use crate::error::{Result, RtfError};
use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Font family categories accepted in a font table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Monospaced fonts (e.g. Courier New)
    Modern,
    /// Proportionally spaced serif fonts (e.g. Times New Roman)
    Roman,
    /// Proportionally spaced sans serif fonts (e.g. Tahoma, Lucida Sans)
    Swiss,
    /// Any other font family
    #[default]
    Nil,
}

static FAMILY_KEYWORDS: phf::Map<&'static str, FontFamily> = phf_map! {
    "modern" => FontFamily::Modern,
    "roman" => FontFamily::Roman,
    "swiss" => FontFamily::Swiss,
    "nil" => FontFamily::Nil,
};

impl FontFamily {
    /// The keyword used for this family, without the `\f` prefix.
    #[inline]
    pub const fn keyword(self) -> &'static str {
        match self {
            FontFamily::Modern => "modern",
            FontFamily::Roman => "roman",
            FontFamily::Swiss => "swiss",
            FontFamily::Nil => "nil",
        }
    }
}

impl FromStr for FontFamily {
    type Err = RtfError;

    fn from_str(s: &str) -> Result<Self> {
        FAMILY_KEYWORDS
            .get(s)
            .copied()
            .ok_or_else(|| RtfError::InvalidFontFamily(s.to_string()))
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A font that can be referenced by styles and listed in a font table.
///
/// # Examples
///
/// ```rust
/// use litchi_rtf::Font;
///
/// let font = Font::new("roman", "Times New Roman")?;
/// assert_eq!(font.to_rtf(0), "\\froman Times New Roman;");
/// assert!(Font::new("gothic", "Old English").is_err());
/// # Ok::<(), litchi_rtf::RtfError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    family: FontFamily,
    name: Cow<'static, str>,
}

impl Font {
    /// Create a font from a family keyword and a display name.
    ///
    /// The family must be one of `modern`, `roman`, `swiss` or `nil`.
    pub fn new(family: impl AsRef<str>, name: impl Into<Cow<'static, str>>) -> Result<Self> {
        Self::with_family(family.as_ref().parse()?, name)
    }

    /// Create a font from an already typed family.
    pub fn with_family(family: FontFamily, name: impl Into<Cow<'static, str>>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(RtfError::EmptyFontName);
        }
        Ok(Self { family, name })
    }

    /// Font family.
    #[inline]
    pub fn family(&self) -> FontFamily {
        self.family
    }

    /// Font display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text of this font as it appears inside a font table entry.
    ///
    /// The `\f<index>` that precedes it is written by the font table, which
    /// owns index assignment.
    pub fn to_rtf(&self, indent: usize) -> String {
        let mut out = String::with_capacity(indent + self.name.len() + 10);
        push_indent(&mut out, indent);
        push_control_word(&mut out, "f");
        out.push_str(self.family.keyword());
        out.push(' ');
        out.push_str(&self.name);
        out.push(';');
        out
    }

    /// Human readable description, prefixed by `indent` spaces.
    pub fn describe(&self, indent: usize) -> String {
        let mut out = String::new();
        push_indent(&mut out, indent);
        out.push_str(&self.to_string());
        out
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Family: {}, Name: {}", self.family, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_families() {
        for (keyword, family) in [
            ("modern", FontFamily::Modern),
            ("roman", FontFamily::Roman),
            ("swiss", FontFamily::Swiss),
            ("nil", FontFamily::Nil),
        ] {
            let font = Font::new(keyword, "Arial").unwrap();
            assert_eq!(font.family(), family);
            assert_eq!(font.name(), "Arial");
        }
    }

    #[test]
    fn test_invalid_family() {
        assert_eq!(
            Font::new("script", "Brush Script"),
            Err(RtfError::InvalidFontFamily("script".to_string()))
        );
        assert!(Font::new("Roman", "Times").is_err());
        assert!(Font::new("", "Times").is_err());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(Font::new("swiss", ""), Err(RtfError::EmptyFontName));
    }

    #[test]
    fn test_equality() {
        let a = Font::new("modern", String::from("Courier New")).unwrap();
        let b = Font::with_family(FontFamily::Modern, "Courier New").unwrap();
        let c = Font::new("swiss", "Courier New").unwrap();
        let d = Font::new("modern", "Courier").unwrap();

        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_to_rtf() {
        let font = Font::new("swiss", "Arial").unwrap();
        assert_eq!(font.to_rtf(0), "\\fswiss Arial;");
        assert_eq!(font.to_rtf(2), "  \\fswiss Arial;");
        assert_eq!(Font::new("nil", "Symbol").unwrap().to_rtf(0), "\\fnil Symbol;");
    }

    #[test]
    fn test_describe() {
        let font = Font::new("roman", "Georgia").unwrap();
        assert_eq!(font.describe(0), "Family: roman, Name: Georgia");
        assert_eq!(font.describe(4), "    Family: roman, Name: Georgia");
        assert_eq!(font.to_string(), font.describe(0));
    }

    proptest! {
        #[test]
        fn prop_unknown_family_rejected(family in "[a-z]{1,10}") {
            let result = Font::new(&family, "Name");
            let known = matches!(family.as_str(), "modern" | "roman" | "swiss" | "nil");
            prop_assert_eq!(result.is_ok(), known);
            if !known {
                prop_assert_eq!(result, Err(RtfError::InvalidFontFamily(family.clone())));
            }
        }
    }
}
