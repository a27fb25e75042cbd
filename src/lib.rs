//! Litchi RTF - a document-object model for generating Rich Text Format
//!
//! Documents are built as a tree of nodes held in a [`NodeTree`] arena: the
//! document root (which owns the font and color tables), generic containers,
//! text, styled groups and tables. Any node renders itself, and its subtree,
//! into RTF control-word syntax.
//!
//! # Features
//!
//! - **Fonts and colors**: [`Font`] descriptors and [`Color`]s registered in the
//!   document's [`FontTable`] and [`ColorTable`]
//! - **Character styles**: [`CharacterStyle`] renders bold, italic, colors,
//!   font, size and direction as a control-word prefix
//! - **Tables**: fixed-shape rows with per-cell borders, shading and widths
//! - **All-or-nothing rendering**: unresolved font/color references surface as
//!   errors instead of corrupt output
//!
//! # Example
//!
//! ```rust
//! use litchi_rtf::{CharacterStyle, Color, Font, NodeKind, NodeTree};
//!
//! # fn main() -> Result<(), litchi_rtf::RtfError> {
//! let mut tree = NodeTree::new();
//! let times = Font::new("roman", "Times New Roman")?;
//! let grey = Color::new(200, 200, 200);
//! tree.document_mut().fonts_mut().add(times.clone());
//! tree.document_mut().colors_mut().add(grey);
//!
//! let root = tree.root_id();
//! let title = tree.create(root, NodeKind::styled(CharacterStyle::new().bold().font(times)))?;
//! tree.create(title, NodeKind::text("Quarterly report"))?;
//!
//! let table = tree.add_table(root, 2, &[2000, 3000])?;
//! let mut table_mut = tree.table_mut(table)?;
//! table_mut.set_border_width(10)?;
//! table_mut.set_row_shading_color(0, Some(grey))?;
//!
//! let rtf = tree.render(root)?;
//! assert!(rtf.starts_with("{\\rtf1\\ansi"));
//! assert!(rtf.contains("\\cellx5000"));
//! # Ok(())
//! # }
//! ```

mod control;
mod document;
mod error;
mod font;
mod node;
mod style;
mod table;
mod types;

// Re-exports
pub use document::{Document, DocumentOptions};
pub use error::{Result, RtfError};
pub use font::{Font, FontFamily};
pub use node::{Node, NodeId, NodeKind, NodeTree};
pub use style::{CharacterStyle, FlowDirection, Style};
pub use table::{
    BOTTOM, DEFAULT_CELL_MARGIN, DEFAULT_CELL_WIDTH, LEFT, RIGHT, TOP, Table, TableCellNode,
    TableMut, TableNode, TableRow, TableRowMut, TableRowNode,
};
pub use types::{Color, ColorTable, FontTable};
