//! The fixed tree topology.
//!
//! The tree is
//!
//! ```text
//! (bonobo,((verus,ellioti),(troglodytes,schweinfurthii)))
//! ```
//!
//! which has nine nodes when the leaves are included. Nodes are numbered such that every
//! parent precedes its children, so iterating nodes in index order visits the tree from the
//! root towards the leaves.

use std::{fmt, ops::Deref, str::FromStr};

/// The number of nodes in the tree, including leaves.
pub const NO_NODES: usize = 9;

/// The number of branches in the tree.
///
/// Every node except the root has exactly one branch connecting it to its parent.
pub const NO_BRANCHES: usize = NO_NODES - 1;

/// The number of allele variants at each node.
pub const NO_VARIANTS: usize = 4;

/// Labels for the allele variants, in index order.
pub const VARIANTS: [char; NO_VARIANTS] = ['A', 'C', 'G', 'T'];

const PARENTS: [Option<usize>; NO_NODES] = [
    None,
    Some(0),
    Some(0),
    Some(2),
    Some(3),
    Some(3),
    Some(2),
    Some(6),
    Some(6),
];

const NAMES: [&str; NO_NODES] = [
    "root",
    "bonobo",
    "chimpanzee",
    "western",
    "verus",
    "ellioti",
    "central-eastern",
    "troglodytes",
    "schweinfurthii",
];

/// The leaves of the tree, in index order.
pub const LEAVES: [Node; 5] = [Node(1), Node(4), Node(5), Node(7), Node(8)];

/// Returns the offset of a node and variant in a flat, node-major layout.
#[inline]
pub const fn index(node: usize, variant: usize) -> usize {
    node * NO_VARIANTS + variant
}

/// Returns the parent of a node, or `None` for the root.
///
/// # Panics
///
/// Panics if the node is out of bounds.
pub fn parent_of(node: usize) -> Option<usize> {
    PARENTS[node]
}

/// Returns the index of the branch above a node, or `None` for the root.
///
/// # Panics
///
/// Panics if the node is out of bounds.
pub fn branch_of(node: usize) -> Option<usize> {
    parent_of(node).map(|_| node - 1)
}

/// A node in the tree.
///
/// Nodes can only be created for indices in the tree, see [`Node::new`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Node(pub(crate) usize);

impl Node {
    /// The root node.
    pub const ROOT: Self = Self(0);

    /// Returns the node with the provided index if it exists, otherwise `None`.
    pub fn new(index: usize) -> Option<Self> {
        (index < NO_NODES).then_some(Self(index))
    }

    /// Returns the branch above the node, or `None` for the root.
    pub fn branch(&self) -> Option<usize> {
        branch_of(self.0)
    }

    /// Returns an iterator over the children of the node.
    pub fn children(&self) -> impl Iterator<Item = Node> + '_ {
        Self::iter().filter(|child| child.parent() == Some(*self))
    }

    /// Returns the node with the provided name if it exists, otherwise `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        NAMES.iter().position(|&n| n == name).map(Self)
    }

    /// Returns true if the node is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.children().next().is_none()
    }

    /// Returns true if the node is the root.
    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// Returns an iterator over all nodes such that every parent is visited before its children.
    pub fn iter() -> impl Iterator<Item = Node> {
        (0..NO_NODES).map(Self)
    }

    /// Returns the name of the node.
    pub fn name(&self) -> &'static str {
        NAMES[self.0]
    }

    /// Returns the parent of the node, or `None` for the root.
    pub fn parent(&self) -> Option<Node> {
        parent_of(self.0).map(Self)
    }
}

impl Deref for Node {
    type Target = usize;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Node {
    type Err = ParseNodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseNodeError(String::from(s)))
    }
}

/// An error associated with parsing a node name.
#[derive(Debug, Eq, PartialEq)]
pub struct ParseNodeError(String);

impl fmt::Display for ParseNodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no node named '{}' in tree", self.0)
    }
}

impl std::error::Error for ParseNodeError {}
