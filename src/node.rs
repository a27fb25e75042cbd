//! Arena-backed document node tree.
//!
//! Every node of a document lives in a [`NodeTree`] and is addressed by a
//! [`NodeId`]. A node records its parent as an id (a lookup, never
//! ownership) and owns an ordered list of child ids. The tree keeps the two
//! in sync: a child's parent id always names the node whose child list holds
//! it.
//!
//! Table rows and their cells are created together by
//! [`NodeTree::add_table_row`] and keep their shape for the rest of their
//! life; the generic structural operations here reject any attempt to change
//! it.
//!
//! A tree is a plain owned value. Mutation goes through `&mut NodeTree`, so
//! sharing one between threads needs external locking.

use crate::control::push_escaped_text;
use crate::document::{Document, DocumentOptions};
use crate::error::{Result, RtfError};
use crate::style::{CharacterStyle, Style};
use crate::table::{TableCellNode, TableNode, TableRowNode};
use crate::types::{ColorTable, FontTable};
use smallvec::SmallVec;
use std::fmt;

static EMPTY_FONTS: FontTable = FontTable::new();
static EMPTY_COLORS: ColorTable = ColorTable::new();

/// Identifier of a node within its [`NodeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node is and the state specific to that kind.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Document root, owner of the font and color tables
    Document(Document),
    /// Generic container; renders its children one per line
    Container,
    /// Literal text
    Text(String),
    /// Group applying a character style to its children
    Styled(CharacterStyle),
    /// Table owning rows
    Table(TableNode),
    /// Fixed-shape table row
    TableRow(TableRowNode),
    /// Table cell
    TableCell(TableCellNode),
}

impl NodeKind {
    /// Text node kind.
    pub fn text(text: impl Into<String>) -> Self {
        NodeKind::Text(text.into())
    }

    /// Styled group kind.
    pub fn styled(style: CharacterStyle) -> Self {
        NodeKind::Styled(style)
    }

    fn name(&self) -> &'static str {
        match self {
            NodeKind::Document(_) => "document",
            NodeKind::Container => "container",
            NodeKind::Text(_) => "text",
            NodeKind::Styled(_) => "styled",
            NodeKind::Table(_) => "table",
            NodeKind::TableRow(_) => "table row",
            NodeKind::TableCell(_) => "table cell",
        }
    }
}

/// A node stored in the tree.
#[derive(Debug, Clone)]
pub struct Node {
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    kind: NodeKind,
}

impl Node {
    /// Parent node, `None` for roots and detached nodes.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Owned children in insertion order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[inline]
    pub(crate) fn kind_mut(&mut self) -> &mut NodeKind {
        &mut self.kind
    }

    /// Rows, cells and the document root never change parent.
    #[inline]
    fn has_fixed_parent(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Document(_) | NodeKind::TableRow(_) | NodeKind::TableCell(_)
        )
    }
}

/// How children produced by a build step are attached to their new parent.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Adopt {
    /// Apply the public structural rules
    Checked,
    /// Internal construction of fixed-shape subtrees
    Unchecked,
}

/// Arena owning every node of one document.
///
/// # Examples
///
/// ```rust
/// use litchi_rtf::{CharacterStyle, NodeKind, NodeTree};
///
/// let mut tree = NodeTree::new();
/// let root = tree.root_id();
/// let group = tree.create(root, NodeKind::styled(CharacterStyle::new().bold()))?;
/// tree.create(group, NodeKind::text("Hello {world}"))?;
///
/// assert_eq!(tree.render(group)?, "{\\b Hello \\{world\\}}");
/// # Ok::<(), litchi_rtf::RtfError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NodeTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for NodeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeTree {
    /// Create a tree holding only a document root with default options.
    pub fn new() -> Self {
        Self::with_options(DocumentOptions::default())
    }

    /// Create a tree holding only a document root.
    pub fn with_options(options: DocumentOptions) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        tree.root = tree.alloc(NodeKind::Document(Document::new(options)));
        tree
    }

    /// Id of the document root.
    #[inline]
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// The document root.
    pub fn document(&self) -> &Document {
        match &self.nodes[self.root.index()].kind {
            NodeKind::Document(document) => document,
            _ => unreachable!("tree root is always a document"),
        }
    }

    /// The document root, mutably (to register fonts and colors).
    pub fn document_mut(&mut self) -> &mut Document {
        let root = self.root;
        match &mut self.nodes[root.index()].kind {
            NodeKind::Document(document) => document,
            _ => unreachable!("tree root is always a document"),
        }
    }

    /// Number of nodes in the arena, including detached ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree holds at least its document root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look a node up.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Look a node up, failing with [`RtfError::UnknownNode`].
    #[inline]
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.get(id).ok_or(RtfError::UnknownNode(id))
    }

    /// Node behind an id handed out by a checked view.
    #[inline]
    pub(crate) fn node_unchecked(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id.index()).ok_or(RtfError::UnknownNode(id))
    }

    #[inline]
    pub(crate) fn kind_mut(&mut self, id: NodeId) -> Result<&mut NodeKind> {
        Ok(self.node_mut(id)?.kind_mut())
    }

    /// Parent of a node.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    /// Children of a node in insertion order.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(self.node(id)?.children())
    }

    /// Top of the tree containing `id`, following parent ids.
    pub fn root(&self, id: NodeId) -> Result<NodeId> {
        let mut current = id;
        while let Some(parent) = self.node(current)?.parent {
            current = parent;
        }
        Ok(current)
    }

    /// Visit every child of `id` in insertion order.
    pub fn for_each(&self, id: NodeId, mut visitor: impl FnMut(NodeId, &Node)) -> Result<()> {
        for &child in self.children(id)? {
            visitor(child, self.node(child)?);
        }
        Ok(())
    }

    /// Visit every child of `id` in insertion order with mutable access.
    pub(crate) fn for_each_mut(
        &mut self,
        id: NodeId,
        mut visitor: impl FnMut(&mut Node),
    ) -> Result<()> {
        let children = self.node(id)?.children.clone();
        for child in children {
            visitor(self.node_mut(child)?);
        }
        Ok(())
    }

    /// Mutable access to the text of a text node.
    pub fn text_mut(&mut self, id: NodeId) -> Result<&mut String> {
        match self.kind_mut(id)? {
            NodeKind::Text(text) => Ok(text),
            other => Err(wrong_kind(id, other, "text")),
        }
    }

    /// Mutable access to the style of a styled node.
    pub fn style_mut(&mut self, id: NodeId) -> Result<&mut CharacterStyle> {
        match self.kind_mut(id)? {
            NodeKind::Styled(style) => Ok(style),
            other => Err(wrong_kind(id, other, "styled")),
        }
    }

    fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            parent: None,
            children: SmallVec::new(),
            kind,
        });
        id
    }

    /// Create a node with no parent.
    ///
    /// Table rows, table cells and document roots are built by the tree
    /// itself and are rejected here.
    pub fn create_detached(&mut self, kind: NodeKind) -> Result<NodeId> {
        check_creatable(&kind)?;
        Ok(self.insert_detached(kind))
    }

    pub(crate) fn insert_detached(&mut self, kind: NodeKind) -> NodeId {
        let id = self.alloc(kind);
        log::trace!("created detached {} node {}", self.nodes[id.index()].kind.name(), id);
        id
    }

    /// Create a node as the last child of `parent`.
    pub fn create(&mut self, parent: NodeId, kind: NodeKind) -> Result<NodeId> {
        self.create_with(Some(parent), kind, |_, _| Ok(Vec::new()))
    }

    /// Create a node whose initial children come from `build`.
    ///
    /// `build` receives the tree and the id of the new node and returns the
    /// children it should start with, in order. Every returned child is
    /// checked against the [`NodeTree::set_parent`] rules, and against
    /// becoming an ancestor of `parent`, before any of them moves. The new
    /// node is attached to `parent` only after all children were adopted; if
    /// `build` or a check fails the node stays detached and empty.
    pub fn create_with<F>(
        &mut self,
        parent: Option<NodeId>,
        kind: NodeKind,
        build: F,
    ) -> Result<NodeId>
    where
        F: FnOnce(&mut NodeTree, NodeId) -> Result<Vec<NodeId>>,
    {
        check_creatable(&kind)?;
        self.spawn(parent, kind, build, Adopt::Checked)
    }

    pub(crate) fn spawn<F>(
        &mut self,
        parent: Option<NodeId>,
        kind: NodeKind,
        build: F,
        adopt: Adopt,
    ) -> Result<NodeId>
    where
        F: FnOnce(&mut NodeTree, NodeId) -> Result<Vec<NodeId>>,
    {
        if let Some(parent) = parent {
            self.check_child_allowed(parent, &kind, adopt)?;
        }

        let id = self.insert_detached(kind);
        let children = build(self, id)?;
        if adopt == Adopt::Checked {
            for &child in &children {
                self.check_move(child, id)?;
                if let Some(parent) = parent {
                    if self.is_ancestor_or_self(child, parent)? {
                        return Err(RtfError::CyclicParent(child));
                    }
                }
            }
        }
        for child in children {
            self.attach(child, id)?;
        }
        if let Some(parent) = parent {
            self.attach(id, parent)?;
        }
        Ok(id)
    }

    /// Move `id` to the end of `new_parent`'s children.
    ///
    /// Fails with [`RtfError::ImmutableParent`] for table rows, table cells
    /// and the document root, with [`RtfError::FixedShape`] when
    /// `new_parent` is a table row, and with [`RtfError::CyclicParent`] when
    /// `new_parent` is `id` or lies beneath it.
    pub fn set_parent(&mut self, id: NodeId, new_parent: NodeId) -> Result<()> {
        self.check_move(id, new_parent)?;
        log::debug!("moving node {} under {}", id, new_parent);
        self.attach(id, new_parent)
    }

    /// Append `child` to `parent`, detaching it from any previous parent.
    ///
    /// Always fails with [`RtfError::FixedShape`] when `parent` is a table
    /// row; otherwise the [`NodeTree::set_parent`] rules apply.
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if matches!(self.node(parent)?.kind, NodeKind::TableRow(_)) {
            return Err(RtfError::FixedShape);
        }
        self.set_parent(child, parent)
    }

    /// Whether `candidate` is `id` or one of its ancestors.
    fn is_ancestor_or_self(&self, candidate: NodeId, id: NodeId) -> Result<bool> {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == candidate {
                return Ok(true);
            }
            current = self.node(node)?.parent;
        }
        Ok(false)
    }

    /// Structural rules for moving `id` beneath `new_parent`.
    fn check_move(&self, id: NodeId, new_parent: NodeId) -> Result<()> {
        let node = self.node(id)?;
        if node.has_fixed_parent() {
            return Err(RtfError::ImmutableParent);
        }
        self.check_child_allowed(new_parent, &node.kind, Adopt::Checked)?;
        if self.is_ancestor_or_self(id, new_parent)? {
            return Err(RtfError::CyclicParent(id));
        }
        Ok(())
    }

    fn check_child_allowed(&self, parent: NodeId, child: &NodeKind, adopt: Adopt) -> Result<()> {
        let parent_node = self.node(parent)?;
        match (&parent_node.kind, child) {
            (NodeKind::TableRow(_), _) if adopt == Adopt::Checked => Err(RtfError::FixedShape),
            (NodeKind::Text(_), _) => Err(RtfError::InvalidParent(format!(
                "text node {parent} cannot own children"
            ))),
            (NodeKind::Table(_), NodeKind::TableRow(_)) => Ok(()),
            (NodeKind::Table(_), other) => Err(RtfError::InvalidParent(format!(
                "table {parent} can only own rows, not a {} node",
                other.name()
            ))),
            _ => Ok(()),
        }
    }

    /// Unlink `id` from its current parent and push it onto `parent`.
    fn attach(&mut self, id: NodeId, parent: NodeId) -> Result<()> {
        self.node(parent)?;
        if let Some(old) = self.node(id)?.parent {
            self.node_mut(old)?.children.retain(|child| *child != id);
        }
        self.node_mut(id)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(id);
        Ok(())
    }

    /// Font and color tables of the document containing `id`.
    ///
    /// Nodes outside a document resolve against empty tables, so any font or
    /// color reference they carry is unresolved.
    pub(crate) fn tables_for(&self, id: NodeId) -> Result<(&FontTable, &ColorTable)> {
        match &self.node(self.root(id)?)?.kind {
            NodeKind::Document(document) => Ok((document.fonts(), document.colors())),
            _ => Ok((&EMPTY_FONTS, &EMPTY_COLORS)),
        }
    }

    /// Render a node and its subtree.
    ///
    /// Output is produced in full or not at all.
    pub fn render(&self, id: NodeId) -> Result<String> {
        let node = self.node(id)?;
        match &node.kind {
            NodeKind::Document(document) => document.render(self, node),
            NodeKind::Container => self.render_children(node, "\n"),
            NodeKind::Text(text) => {
                let mut out = String::with_capacity(text.len());
                push_escaped_text(&mut out, text);
                Ok(out)
            },
            NodeKind::Styled(style) => {
                let (fonts, colors) = self.tables_for(id)?;
                let mut out = String::from("{");
                if let Some(prefix) = style.prefix(fonts, colors)? {
                    out.push_str(&prefix);
                }
                for &child in node.children() {
                    out.push(' ');
                    out.push_str(&self.render(child)?);
                }
                if let Some(suffix) = style.suffix(fonts, colors) {
                    out.push_str(&suffix);
                }
                out.push('}');
                Ok(out)
            },
            NodeKind::Table(_) => self.render_children(node, "\n"),
            NodeKind::TableRow(_) => self.row(id)?.render(),
            NodeKind::TableCell(cell) => cell.render(self, node),
        }
    }

    pub(crate) fn render_children(&self, node: &Node, separator: &str) -> Result<String> {
        let mut out = String::new();
        for (position, &child) in node.children().iter().enumerate() {
            if position > 0 {
                out.push_str(separator);
            }
            out.push_str(&self.render(child)?);
        }
        Ok(out)
    }
}

/// Rows, cells and document roots only come from the tree's own builders.
fn check_creatable(kind: &NodeKind) -> Result<()> {
    match kind {
        NodeKind::Document(_) | NodeKind::TableRow(_) | NodeKind::TableCell(_) => {
            Err(RtfError::InvalidParent(format!(
                "{} nodes cannot be created directly",
                kind.name()
            )))
        },
        _ => Ok(()),
    }
}

pub(crate) fn wrong_kind(id: NodeId, found: &NodeKind, expected: &str) -> RtfError {
    RtfError::InvalidParent(format!(
        "node {id} is a {} node, expected a {expected} node",
        found.name()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Font;
    use crate::types::Color;

    #[test]
    fn test_new_tree() {
        let tree = NodeTree::new();
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root(tree.root_id()).unwrap(), tree.root_id());
        assert_eq!(tree.parent(tree.root_id()).unwrap(), None);
    }

    #[test]
    fn test_create_sets_parent() {
        let mut tree = NodeTree::new();
        let root = tree.root_id();
        let container = tree.create(root, NodeKind::Container).unwrap();
        let a = tree.create(container, NodeKind::text("a")).unwrap();
        let b = tree.create(container, NodeKind::text("b")).unwrap();

        assert_eq!(tree.children(container).unwrap(), &[a, b]);
        assert_eq!(tree.parent(a).unwrap(), Some(container));
        assert_eq!(tree.root(b).unwrap(), root);
    }

    #[test]
    fn test_create_with_adopts_children() {
        let mut tree = NodeTree::new();
        let root = tree.root_id();
        let container = tree
            .create_with(Some(root), NodeKind::Container, |tree, _| {
                Ok(vec![
                    tree.create_detached(NodeKind::text("one"))?,
                    tree.create_detached(NodeKind::text("two"))?,
                ])
            })
            .unwrap();

        let children = tree.children(container).unwrap().to_vec();
        assert_eq!(children.len(), 2);
        for child in children {
            assert_eq!(tree.parent(child).unwrap(), Some(container));
        }
        assert_eq!(tree.children(root).unwrap(), &[container]);
        assert_eq!(tree.render(container).unwrap(), "one\ntwo");
    }

    #[test]
    fn test_create_with_rejects_parent_as_child() {
        let mut tree = NodeTree::new();
        let root = tree.root_id();
        let outer = tree.create(root, NodeKind::Container).unwrap();
        let inner = tree.create(outer, NodeKind::Container).unwrap();
        let before = tree.len();

        let result = tree.create_with(Some(inner), NodeKind::Container, |_, _| Ok(vec![inner]));
        assert!(matches!(result, Err(RtfError::CyclicParent(id)) if id == inner));
        let result = tree.create_with(Some(inner), NodeKind::Container, |_, _| Ok(vec![outer]));
        assert!(matches!(result, Err(RtfError::CyclicParent(id)) if id == outer));

        // the failed nodes stay detached; the existing chain is untouched
        assert_eq!(tree.len(), before + 2);
        assert_eq!(tree.parent(inner).unwrap(), Some(outer));
        assert_eq!(tree.parent(outer).unwrap(), Some(root));
        assert_eq!(tree.root(inner).unwrap(), root);
        assert_eq!(tree.children(root).unwrap(), &[outer]);
        assert_eq!(tree.children(outer).unwrap(), &[inner]);
    }

    #[test]
    fn test_create_with_failure_moves_nothing() {
        let mut tree = NodeTree::new();
        let root = tree.root_id();
        let holder = tree.create(root, NodeKind::Container).unwrap();
        let a = tree.create(holder, NodeKind::text("a")).unwrap();

        let result = tree.create_with(Some(root), NodeKind::Container, |_, _| Ok(vec![a, root]));
        assert!(matches!(result, Err(RtfError::ImmutableParent)));
        assert_eq!(tree.parent(a).unwrap(), Some(holder));
        assert_eq!(tree.children(holder).unwrap(), &[a]);
        assert_eq!(tree.children(root).unwrap(), &[holder]);

        let missing = NodeId(9999);
        let result = tree.create_with(None, NodeKind::Container, |_, _| Ok(vec![a, missing]));
        assert!(matches!(result, Err(RtfError::UnknownNode(id)) if id == missing));
        assert_eq!(tree.parent(a).unwrap(), Some(holder));
    }

    #[test]
    fn test_document_kind_not_creatable() {
        let mut tree = NodeTree::new();
        let root = tree.root_id();
        let kind = tree.get(root).unwrap().kind().clone();
        assert!(matches!(tree.create(root, kind.clone()), Err(RtfError::InvalidParent(_))));
        assert!(matches!(tree.create_detached(kind), Err(RtfError::InvalidParent(_))));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_create_under_text_fails() {
        let mut tree = NodeTree::new();
        let text = tree.create(tree.root_id(), NodeKind::text("leaf")).unwrap();
        assert!(matches!(
            tree.create(text, NodeKind::Container),
            Err(RtfError::InvalidParent(_))
        ));
    }

    #[test]
    fn test_set_parent_moves_child() {
        let mut tree = NodeTree::new();
        let root = tree.root_id();
        let first = tree.create(root, NodeKind::Container).unwrap();
        let second = tree.create(root, NodeKind::Container).unwrap();
        let text = tree.create(first, NodeKind::text("x")).unwrap();

        tree.set_parent(text, second).unwrap();
        assert!(tree.children(first).unwrap().is_empty());
        assert_eq!(tree.children(second).unwrap(), &[text]);
        assert_eq!(tree.parent(text).unwrap(), Some(second));

        let detached = tree.create_detached(NodeKind::text("y")).unwrap();
        tree.append(first, detached).unwrap();
        assert_eq!(tree.children(first).unwrap(), &[detached]);
    }

    #[test]
    fn test_cycle_rejected() {
        let mut tree = NodeTree::new();
        let root = tree.root_id();
        let outer = tree.create(root, NodeKind::Container).unwrap();
        let inner = tree.create(outer, NodeKind::Container).unwrap();

        assert_eq!(tree.set_parent(outer, inner), Err(RtfError::CyclicParent(outer)));
        assert_eq!(tree.set_parent(outer, outer), Err(RtfError::CyclicParent(outer)));
        assert_eq!(tree.set_parent(root, outer), Err(RtfError::ImmutableParent));
    }

    #[test]
    fn test_unknown_node() {
        let tree = NodeTree::new();
        let other = {
            let mut bigger = NodeTree::new();
            bigger.create_detached(NodeKind::Container).unwrap()
        };
        assert_eq!(tree.render(other), Err(RtfError::UnknownNode(other)));
    }

    #[test]
    fn test_for_each_in_order() {
        let mut tree = NodeTree::new();
        let root = tree.root_id();
        let ids: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|t| tree.create(root, NodeKind::text(t)).unwrap())
            .collect();

        let mut seen = Vec::new();
        tree.for_each(root, |id, node| {
            assert_eq!(node.parent(), Some(root));
            seen.push(id);
        })
        .unwrap();
        assert_eq!(seen, ids);
    }

    #[test]
    fn test_styled_render_uses_document_tables() {
        let mut tree = NodeTree::new();
        let red = Color::new(255, 0, 0);
        let arial = Font::new("swiss", "Arial").unwrap();
        tree.document_mut().colors_mut().add(red);
        tree.document_mut().fonts_mut().add(arial.clone());

        let root = tree.root_id();
        let style = CharacterStyle::new().italic().foreground(red).font(arial);
        let group = tree.create(root, NodeKind::styled(style)).unwrap();
        tree.create(group, NodeKind::text("hi")).unwrap();
        assert_eq!(tree.render(group).unwrap(), "{\\i\\cf1\\f0 hi}");

        tree.style_mut(group).unwrap().font_size = Some(20.0);
        assert_eq!(tree.render(group).unwrap(), "{\\i\\cf1\\f0\\fs20 hi}");
        let text = tree.children(group).unwrap()[0];
        *tree.text_mut(text).unwrap() = "bye".into();
        assert_eq!(tree.render(group).unwrap(), "{\\i\\cf1\\f0\\fs20 bye}");
    }

    #[test]
    fn test_detached_styled_reference_unresolved() {
        let mut tree = NodeTree::new();
        let style = CharacterStyle::new().foreground(Color::white());
        let group = tree.create_detached(NodeKind::styled(style)).unwrap();
        assert!(matches!(tree.render(group), Err(RtfError::UnresolvedReference(_))));

        let plain = tree.create_detached(NodeKind::styled(CharacterStyle::new())).unwrap();
        assert_eq!(tree.render(plain).unwrap(), "{}");
    }

    #[test]
    fn test_wrong_kind_accessors() {
        let mut tree = NodeTree::new();
        let root = tree.root_id();
        assert!(tree.text_mut(root).is_err());
        assert!(tree.style_mut(root).is_err());
    }
}
