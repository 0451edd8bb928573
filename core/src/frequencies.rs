//! Allele frequencies over all nodes of the tree.

use std::ops::{Index, IndexMut};

use crate::tree::{index, Node, NO_NODES, NO_VARIANTS};

/// The number of values in a realization.
pub const NO_VALUES: usize = NO_NODES * NO_VARIANTS;

/// A frequency vector for a single node.
pub type Vector = [f64; NO_VARIANTS];

/// One realization of allele frequencies at every node in the tree.
///
/// Frequencies are stored in a flat, node-major layout, see [`index`].
#[derive(Clone, Debug, PartialEq)]
pub struct Frequencies {
    values: [f64; NO_VALUES],
}

impl Frequencies {
    /// Returns the frequencies as a flat slice in node-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Returns the frequency vector of a node.
    pub fn get_node(&self, node: Node) -> &Vector {
        let start = index(node.0, 0);
        self.values[start..start + NO_VARIANTS]
            .try_into()
            .expect("node slice has one value per variant")
    }

    /// Returns an iterator over nodes and their frequency vectors, from the root to the leaves.
    pub fn iter_nodes(&self) -> impl Iterator<Item = (Node, &Vector)> {
        Node::iter().map(move |node| (node, self.get_node(node)))
    }

    /// Creates a new realization from a flat array in node-major order.
    pub fn new(values: [f64; NO_VALUES]) -> Self {
        Self { values }
    }

    /// Sets the frequency vector of a node.
    pub fn set_node(&mut self, node: Node, vector: &Vector) {
        let start = index(node.0, 0);
        self.values[start..start + NO_VARIANTS].copy_from_slice(vector);
    }

    /// Returns true if every node holds a simplex point within the provided tolerance.
    pub fn is_simplex(&self, epsilon: f64) -> bool {
        self.iter_nodes()
            .all(|(_, vector)| is_simplex(vector, epsilon))
    }

    pub(crate) fn from_zeros() -> Self {
        Self::new([0.0; NO_VALUES])
    }
}

impl Index<(Node, usize)> for Frequencies {
    type Output = f64;

    fn index(&self, (node, variant): (Node, usize)) -> &Self::Output {
        &self.values[index(node.0, variant)]
    }
}

impl IndexMut<(Node, usize)> for Frequencies {
    fn index_mut(&mut self, (node, variant): (Node, usize)) -> &mut Self::Output {
        &mut self.values[index(node.0, variant)]
    }
}

impl From<[f64; NO_VALUES]> for Frequencies {
    fn from(values: [f64; NO_VALUES]) -> Self {
        Self::new(values)
    }
}

/// Returns true if all values are non-negative and sum to one within the provided tolerance.
pub fn is_simplex(vector: &[f64], epsilon: f64) -> bool {
    vector.iter().all(|&x| x >= 0.0) && (vector.iter().sum::<f64>() - 1.0).abs() <= epsilon
}
