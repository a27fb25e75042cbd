//! Document root: options, resource tables and the RTF document header.

use crate::control::{push_control_param, push_control_word};
use crate::error::Result;
use crate::node::{Node, NodeTree};
use crate::types::{ColorTable, FontTable};
use serde::{Deserialize, Serialize};

/// Document-wide settings written into the RTF header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
    /// ANSI code page number (default 1252 for Western European)
    pub code_page: u16,
    /// Default font index
    pub default_font: u16,
    /// Default tab width (in twips)
    pub default_tab_width: i32,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            code_page: 1252,
            default_font: 0,
            default_tab_width: 720, // 0.5 inch
        }
    }
}

/// State of the document root node.
#[derive(Debug, Clone, Default)]
pub struct Document {
    options: DocumentOptions,
    fonts: FontTable,
    colors: ColorTable,
}

impl Document {
    pub(crate) fn new(options: DocumentOptions) -> Self {
        Self {
            options,
            fonts: FontTable::new(),
            colors: ColorTable::new(),
        }
    }

    #[inline]
    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    #[inline]
    pub fn options_mut(&mut self) -> &mut DocumentOptions {
        &mut self.options
    }

    /// Document font table.
    #[inline]
    pub fn fonts(&self) -> &FontTable {
        &self.fonts
    }

    #[inline]
    pub fn fonts_mut(&mut self) -> &mut FontTable {
        &mut self.fonts
    }

    /// Document color table.
    #[inline]
    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    #[inline]
    pub fn colors_mut(&mut self) -> &mut ColorTable {
        &mut self.colors
    }

    /// Render the whole document: header, font and color tables, then every
    /// child of the root on its own line.
    pub(crate) fn render(&self, tree: &NodeTree, node: &Node) -> Result<String> {
        log::debug!(
            "rendering document with {} fonts, {} colors and {} top-level nodes",
            self.fonts.len(),
            self.colors.len(),
            node.children().len()
        );

        let mut out = String::from("{");
        push_control_param(&mut out, "rtf", 1);
        push_control_word(&mut out, "ansi");
        push_control_param(&mut out, "ansicpg", self.options.code_page);
        push_control_param(&mut out, "deff", self.options.default_font);
        push_control_param(&mut out, "deftab", self.options.default_tab_width);

        if !self.fonts.is_empty() {
            out.push('\n');
            out.push_str(&self.fonts.to_rtf(0));
        }
        if !self.colors.is_empty() {
            out.push('\n');
            out.push_str(&self.colors.to_rtf(0));
        }
        for &child in node.children() {
            out.push('\n');
            out.push_str(&tree.render(child)?);
        }
        out.push_str("\n}");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::RtfError;
    use crate::font::Font;
    use crate::node::{NodeKind, NodeTree};
    use crate::style::CharacterStyle;
    use crate::types::Color;

    use super::*;

    #[test]
    fn test_default_options() {
        let options = DocumentOptions::default();
        assert_eq!(options.code_page, 1252);
        assert_eq!(options.default_font, 0);
        assert_eq!(options.default_tab_width, 720);
    }

    #[test]
    fn test_empty_document() {
        let tree = NodeTree::new();
        assert_eq!(
            tree.render(tree.root_id()).unwrap(),
            "{\\rtf1\\ansi\\ansicpg1252\\deff0\\deftab720\n}"
        );
    }

    #[test]
    fn test_custom_options() {
        let tree = NodeTree::with_options(DocumentOptions {
            code_page: 1251,
            default_font: 2,
            default_tab_width: 360,
        });
        assert!(
            tree.render(tree.root_id())
                .unwrap()
                .starts_with("{\\rtf1\\ansi\\ansicpg1251\\deff2\\deftab360")
        );
    }

    #[test]
    fn test_full_document() {
        let mut tree = NodeTree::new();
        let arial = Font::new("swiss", "Arial").unwrap();
        let red = Color::new(255, 0, 0);
        tree.document_mut().fonts_mut().add(arial.clone());
        tree.document_mut().colors_mut().add(red);

        let root = tree.root_id();
        let heading = tree
            .create(root, NodeKind::styled(CharacterStyle::new().bold().font(arial)))
            .unwrap();
        tree.create(heading, NodeKind::text("Title")).unwrap();
        let table = tree.add_table(root, 1, &[1440, 1440]).unwrap();
        tree.table_mut(table)
            .unwrap()
            .set_shading_color(Some(red))
            .unwrap();

        let text = tree.render(root).unwrap();
        assert!(text.starts_with("{\\rtf1\\ansi"));
        assert!(text.ends_with("\\row\n}"));
        assert!(text.contains("{\\fonttbl\n{\\f0\\fswiss Arial;}\n}"));
        assert!(text.contains("{\\colortbl\n;\n\\red255\\green0\\blue0;\n}"));
        assert!(text.contains("\n{\\b\\f0 Title}\n\\trowd\\tgraph100"));
        assert!(text.contains("\\clcbpat1\\cellx1440"));
        assert!(text.contains("\\clcbpat1\\cellx2880"));
    }

    #[test]
    fn test_document_render_is_all_or_nothing() {
        let mut tree = NodeTree::new();
        let root = tree.root_id();
        tree.create(root, NodeKind::text("fine")).unwrap();
        tree.create(root, NodeKind::styled(CharacterStyle::new().foreground(Color::white())))
            .unwrap();
        assert!(matches!(tree.render(root), Err(RtfError::UnresolvedReference(_))));
    }
}
