//! Error types for RTF document construction and rendering.
//!
//! Every fallible operation in this crate returns [`Result`], whose error type
//! is the single [`RtfError`] enum below.
use crate::node::NodeId;
use thiserror::Error;

/// Result type for RTF operations.
pub type Result<T> = std::result::Result<T, RtfError>;

/// Errors raised while building or rendering an RTF document tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RtfError {
    /// Font family keyword outside of `modern`, `roman`, `swiss` and `nil`
    #[error("Unknown font family specified for font: {0:?}")]
    InvalidFontFamily(String),

    /// Font created with an empty display name
    #[error("Font name must not be empty")]
    EmptyFontName,

    /// Attempt to reparent a table row, a table cell or the document root
    #[error("Table rows and cells cannot have their parent changed")]
    ImmutableParent,

    /// Attempt to add or remove children of a table row
    #[error("Table rows cannot have nodes added to or removed from them")]
    FixedShape,

    /// Reparenting would make a node its own ancestor
    #[error("Node {0} cannot be moved beneath itself")]
    CyclicParent(NodeId),

    /// Node cannot own the requested child
    #[error("Invalid parent: {0}")]
    InvalidParent(String),

    /// Style or cell references a font/color absent from the relevant table
    #[error("Unresolved reference: {0}")]
    UnresolvedReference(String),

    /// Number of supplied cell widths does not match the number of cells
    #[error("Table row has {cells} cells but {widths} widths were supplied")]
    WidthCountMismatch {
        /// Requested number of cells
        cells: usize,
        /// Number of widths supplied
        widths: usize,
    },

    /// Node id does not belong to the tree
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// Row or column index past the end of a table
    #[error("Index {index} out of range (length {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of available entries
        len: usize,
    },
}
