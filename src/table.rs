//! RTF table support.
//!
//! RTF tables use a row-based model: each row declares its cell borders,
//! shading and right-hand boundaries in a preamble, followed by the cell
//! bodies. A table node owns its rows; a row owns a fixed set of cells chosen
//! when it is created.

use crate::control::{push_control_param, push_control_word};
use crate::error::{Result, RtfError};
use crate::node::{Adopt, Node, NodeId, NodeKind, NodeTree, wrong_kind};
use crate::types::Color;

/// Width used for cells created with a non-positive width (in twips).
pub const DEFAULT_CELL_WIDTH: i32 = 300;

/// Default space between cell contents and cell edges (in twips).
pub const DEFAULT_CELL_MARGIN: i32 = 100;

/// Index of the top border in [`TableCellNode::border_widths`].
pub const TOP: usize = 0;
/// Index of the right border in [`TableCellNode::border_widths`].
pub const RIGHT: usize = 1;
/// Index of the bottom border in [`TableCellNode::border_widths`].
pub const BOTTOM: usize = 2;
/// Index of the left border in [`TableCellNode::border_widths`].
pub const LEFT: usize = 3;

/// Table node state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNode {
    cell_margin: i32,
}

impl TableNode {
    pub(crate) fn new() -> Self {
        Self {
            cell_margin: DEFAULT_CELL_MARGIN,
        }
    }

    /// Cell margin (in twips).
    #[inline]
    pub fn cell_margin(&self) -> i32 {
        self.cell_margin
    }
}

/// Table row node state.
///
/// Only [`NodeTree::add_table_row`] creates rows, so a row always holds the
/// cells it was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRowNode {
    _sealed: (),
}

/// Table cell node state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCellNode {
    border_widths: [i32; 4],
    shading_color: Option<Color>,
    width: i32,
}

impl TableCellNode {
    pub(crate) fn new(width: i32) -> Self {
        Self {
            border_widths: [0; 4],
            shading_color: None,
            width: if width > 0 { width } else { DEFAULT_CELL_WIDTH },
        }
    }

    /// Border widths as `[top, right, bottom, left]`.
    #[inline]
    pub fn border_widths(&self) -> [i32; 4] {
        self.border_widths
    }

    /// Set the width of every border. Negative widths are ignored and zero
    /// switches the borders off.
    pub fn set_border_width(&mut self, width: i32) {
        if width >= 0 {
            self.border_widths = [width; 4];
        }
    }

    /// Set the width of a single border, indexed by [`TOP`], [`RIGHT`],
    /// [`BOTTOM`] or [`LEFT`]. Negative widths are ignored.
    pub fn set_side_border_width(&mut self, side: usize, width: i32) -> Result<()> {
        let len = self.border_widths.len();
        let slot = self
            .border_widths
            .get_mut(side)
            .ok_or(RtfError::IndexOutOfRange { index: side, len })?;
        if width >= 0 {
            *slot = width;
        }
        Ok(())
    }

    #[inline]
    pub fn shading_color(&self) -> Option<&Color> {
        self.shading_color.as_ref()
    }

    /// Set the shading color, `None` switches shading off.
    #[inline]
    pub fn set_shading_color(&mut self, color: Option<Color>) {
        self.shading_color = color;
    }

    /// Cell width (in twips).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Set the cell width. Non-positive widths are ignored.
    pub fn set_width(&mut self, width: i32) {
        if width > 0 {
            self.width = width;
        }
    }

    /// Cell body: `\pard\intbl`, the children one per line, then `\cell`.
    pub(crate) fn render(&self, tree: &NodeTree, node: &Node) -> Result<String> {
        let mut out = String::new();
        push_control_word(&mut out, "pard");
        push_control_word(&mut out, "intbl");
        out.push(' ');
        out.push_str(&tree.render_children(node, "\n")?);
        out.push(' ');
        push_control_word(&mut out, "cell");
        Ok(out)
    }
}

fn push_border(out: &mut String, side: &str, width: i32) {
    if width != 0 {
        push_control_word(out, side);
        push_control_param(out, "brdrw", width);
        push_control_word(out, "brdrs");
    }
}

/// Read-only view of a table row.
#[derive(Clone, Copy)]
pub struct TableRow<'t> {
    tree: &'t NodeTree,
    id: NodeId,
    node: &'t Node,
}

impl<'t> TableRow<'t> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Table owning the row.
    #[inline]
    pub fn table(&self) -> Option<NodeId> {
        self.node.parent()
    }

    /// Number of cells.
    #[inline]
    pub fn length(&self) -> usize {
        self.node.children().len()
    }

    /// Ids of the cells in column order.
    #[inline]
    pub fn cell_ids(&self) -> &'t [NodeId] {
        self.node.children()
    }

    /// Cell at `index`.
    pub fn cell(&self, index: usize) -> Option<&'t TableCellNode> {
        let id = *self.node.children().get(index)?;
        self.tree.cell(id).ok()
    }

    /// Cells in column order.
    pub fn cells(self) -> impl Iterator<Item = &'t TableCellNode> {
        let tree = self.tree;
        self.node
            .children()
            .iter()
            .filter_map(move |id| tree.cell(*id).ok())
    }

    /// Render the row.
    ///
    /// The preamble carries every cell's borders (emitted top, left, bottom,
    /// right), shading and cumulative right boundary; the cell bodies follow
    /// once all boundaries are declared.
    pub fn render(&self) -> Result<String> {
        let margin = match self.table() {
            Some(table) => self.tree.table(table)?.cell_margin(),
            None => return Err(RtfError::InvalidParent(format!("row {} has no table", self.id))),
        };
        let (_, colors) = self.tree.tables_for(self.id)?;

        let mut text = String::new();
        let mut bodies = String::new();
        let mut offset: i64 = 0;

        push_control_word(&mut text, "trowd");
        push_control_param(&mut text, "tgraph", margin);
        for &cell_id in self.node.children() {
            let cell = self.tree.cell(cell_id)?;
            let widths = cell.border_widths();

            text.push('\n');
            push_border(&mut text, "clbrdrt", widths[TOP]);
            push_border(&mut text, "clbrdrl", widths[LEFT]);
            push_border(&mut text, "clbrdrb", widths[BOTTOM]);
            push_border(&mut text, "clbrdrr", widths[RIGHT]);
            if let Some(color) = cell.shading_color() {
                push_control_param(&mut text, "clcbpat", colors.resolve(color)?);
            }
            offset += i64::from(cell.width());
            push_control_param(&mut text, "cellx", offset);

            bodies.push('\n');
            bodies.push_str(&self.tree.render(cell_id)?);
        }
        text.push_str(&bodies);
        text.push('\n');
        push_control_word(&mut text, "row");

        Ok(text)
    }
}

/// Mutable view of a table row.
///
/// Cell attributes can be changed freely; the set of cells cannot.
pub struct TableRowMut<'t> {
    tree: &'t mut NodeTree,
    id: NodeId,
}

impl<'t> TableRowMut<'t> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Read-only view of the same row.
    pub fn view(&self) -> TableRow<'_> {
        TableRow {
            tree: &*self.tree,
            id: self.id,
            node: self.tree.node_unchecked(self.id),
        }
    }

    /// Number of cells.
    pub fn length(&self) -> usize {
        self.view().length()
    }

    /// Mutable access to the cell at `index`.
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut TableCellNode> {
        let id = *self.tree.node(self.id).ok()?.children().get(index)?;
        self.tree.cell_mut(id).ok()
    }

    /// Apply `update` to every cell of the row.
    fn update_cells(&mut self, mut update: impl FnMut(&mut TableCellNode)) -> Result<()> {
        self.tree.for_each_mut(self.id, |node| {
            if let NodeKind::TableCell(cell) = node.kind_mut() {
                update(cell);
            }
        })
    }

    /// Set the border width on every side of every cell. Negative widths are
    /// ignored and zero switches the borders off.
    pub fn set_border_width(&mut self, width: i32) -> Result<()> {
        self.update_cells(|cell| cell.set_border_width(width))
    }

    /// Set the shading color of every cell, `None` switches shading off.
    pub fn set_shading_color(&mut self, color: Option<Color>) -> Result<()> {
        self.update_cells(|cell| cell.set_shading_color(color))
    }

    /// Render the row.
    pub fn render(&self) -> Result<String> {
        self.view().render()
    }
}

/// Read-only view of a table.
#[derive(Clone, Copy)]
pub struct Table<'t> {
    tree: &'t NodeTree,
    id: NodeId,
    node: &'t Node,
    props: &'t TableNode,
}

impl<'t> Table<'t> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Cell margin (in twips).
    #[inline]
    pub fn cell_margin(&self) -> i32 {
        self.props.cell_margin
    }

    /// Ids of the rows in order.
    #[inline]
    pub fn row_ids(&self) -> &'t [NodeId] {
        self.node.children()
    }

    /// Number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.node.children().len()
    }

    /// Number of cells in the first row, zero for a table without rows.
    pub fn column_count(&self) -> usize {
        self.row_ids()
            .first()
            .and_then(|id| self.tree.row(*id).ok())
            .map_or(0, |row| row.length())
    }

    /// Row at `index`.
    pub fn row(&self, index: usize) -> Option<TableRow<'t>> {
        self.tree.row(*self.row_ids().get(index)?).ok()
    }

    /// Render the table, one row per line.
    pub fn render(&self) -> Result<String> {
        self.tree.render(self.id)
    }
}

/// Mutable view of a table.
pub struct TableMut<'t> {
    tree: &'t mut NodeTree,
    id: NodeId,
}

impl<'t> TableMut<'t> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    fn row_ids(&self) -> Result<Vec<NodeId>> {
        Ok(self.tree.children(self.id)?.to_vec())
    }

    /// Set the cell margin (in twips).
    pub fn set_cell_margin(&mut self, margin: i32) -> Result<()> {
        match self.tree.kind_mut(self.id)? {
            NodeKind::Table(table) => {
                table.cell_margin = margin;
                Ok(())
            },
            other => Err(wrong_kind(self.id, other, "table")),
        }
    }

    /// Set the border width of every cell in the table.
    pub fn set_border_width(&mut self, width: i32) -> Result<()> {
        for row in self.row_ids()? {
            self.tree.row_mut(row)?.set_border_width(width)?;
        }
        Ok(())
    }

    /// Set the shading color of every cell in the table.
    pub fn set_shading_color(&mut self, color: Option<Color>) -> Result<()> {
        for row in self.row_ids()? {
            self.tree.row_mut(row)?.set_shading_color(color)?;
        }
        Ok(())
    }

    /// Set the shading color of every cell in one row.
    pub fn set_row_shading_color(&mut self, index: usize, color: Option<Color>) -> Result<()> {
        let rows = self.row_ids()?;
        let row = *rows.get(index).ok_or(RtfError::IndexOutOfRange {
            index,
            len: rows.len(),
        })?;
        self.tree.row_mut(row)?.set_shading_color(color)
    }

    /// Set the shading color of the cell at `index` in every row.
    ///
    /// Fails without changing anything if some row has no such cell.
    pub fn set_column_shading_color(&mut self, index: usize, color: Option<Color>) -> Result<()> {
        let rows = self.row_ids()?;
        for row in &rows {
            let len = self.tree.row(*row)?.length();
            if index >= len {
                return Err(RtfError::IndexOutOfRange { index, len });
            }
        }
        for row in rows {
            if let Some(cell) = self.tree.row_mut(row)?.cell_mut(index) {
                cell.set_shading_color(color);
            }
        }
        Ok(())
    }

    /// Render the table, one row per line.
    pub fn render(&self) -> Result<String> {
        self.tree.render(self.id)
    }
}

impl NodeTree {
    /// Create a table under `parent` with `rows` rows of `widths.len()` cells.
    pub fn add_table(&mut self, parent: NodeId, rows: usize, widths: &[i32]) -> Result<NodeId> {
        let table = self.create(parent, NodeKind::Table(TableNode::new()))?;
        for _ in 0..rows {
            self.add_table_row(table, widths.len(), widths)?;
        }
        log::debug!(
            "created table {} with {} rows of {} cells",
            table,
            rows,
            widths.len()
        );
        Ok(table)
    }

    /// Append a row of `cells` cells to `table`; the i-th width goes to the
    /// i-th cell.
    ///
    /// Fails with [`RtfError::WidthCountMismatch`] unless exactly one width
    /// per cell is supplied and with [`RtfError::InvalidParent`] when `table`
    /// is not a table.
    pub fn add_table_row(&mut self, table: NodeId, cells: usize, widths: &[i32]) -> Result<NodeId> {
        if widths.len() != cells {
            return Err(RtfError::WidthCountMismatch {
                cells,
                widths: widths.len(),
            });
        }
        match self.node(table)?.kind() {
            NodeKind::Table(_) => {},
            other => return Err(wrong_kind(table, other, "table")),
        }

        let row = self.spawn(
            Some(table),
            NodeKind::TableRow(TableRowNode { _sealed: () }),
            |tree, _| {
                Ok(widths
                    .iter()
                    .map(|width| {
                        tree.insert_detached(NodeKind::TableCell(TableCellNode::new(*width)))
                    })
                    .collect())
            },
            Adopt::Unchecked,
        )?;
        log::debug!("added row {} with {} cells to table {}", row, cells, table);
        Ok(row)
    }

    /// View of a table.
    pub fn table(&self, id: NodeId) -> Result<Table<'_>> {
        let node = self.node(id)?;
        match node.kind() {
            NodeKind::Table(props) => Ok(Table {
                tree: self,
                id,
                node,
                props,
            }),
            other => Err(wrong_kind(id, other, "table")),
        }
    }

    /// Mutable view of a table.
    pub fn table_mut(&mut self, id: NodeId) -> Result<TableMut<'_>> {
        self.table(id)?;
        Ok(TableMut { tree: self, id })
    }

    /// View of a table row.
    pub fn row(&self, id: NodeId) -> Result<TableRow<'_>> {
        let node = self.node(id)?;
        match node.kind() {
            NodeKind::TableRow(_) => Ok(TableRow {
                tree: self,
                id,
                node,
            }),
            other => Err(wrong_kind(id, other, "table row")),
        }
    }

    /// Mutable view of a table row.
    pub fn row_mut(&mut self, id: NodeId) -> Result<TableRowMut<'_>> {
        self.row(id)?;
        Ok(TableRowMut { tree: self, id })
    }

    /// A table cell.
    pub fn cell(&self, id: NodeId) -> Result<&TableCellNode> {
        match self.node(id)?.kind() {
            NodeKind::TableCell(cell) => Ok(cell),
            other => Err(wrong_kind(id, other, "table cell")),
        }
    }

    /// A table cell, mutably.
    pub fn cell_mut(&mut self, id: NodeId) -> Result<&mut TableCellNode> {
        match self.kind_mut(id)? {
            NodeKind::TableCell(cell) => Ok(cell),
            other => Err(wrong_kind(id, other, "table cell")),
        }
    }
}
