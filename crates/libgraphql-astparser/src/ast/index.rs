use indexmap::IndexMap;

use crate::ast::Node;

/// Name lookup over a document's top-level definitions.
///
/// A name maps to every node indexed under it, in insertion order: a base
/// type and its extensions all live under the base type's name, and
/// [`first_node_by_name`](Self::first_node_by_name) returns whichever was
/// parsed first. Iteration order over names is insertion order.
#[derive(Clone, Debug, Default)]
pub struct Index {
    nodes: IndexMap<Vec<u8>, Vec<Node>>,
    query_type_name: Vec<u8>,
    mutation_type_name: Vec<u8>,
    subscription_type_name: Vec<u8>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all entries and root type names, keeping allocations.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.query_type_name.clear();
        self.mutation_type_name.clear();
        self.subscription_type_name.clear();
    }

    pub fn add_node(&mut self, name: &[u8], node: Node) {
        match self.nodes.get_mut(name) {
            Some(nodes) => nodes.push(node),
            None => {
                self.nodes.insert(name.to_vec(), vec![node]);
            },
        }
    }

    pub fn first_node_by_name(&self, name: &[u8]) -> Option<Node> {
        self.nodes_by_name(name).first().copied()
    }

    pub fn first_node_by_name_str(&self, name: &str) -> Option<Node> {
        self.first_node_by_name(name.as_bytes())
    }

    /// Every node indexed under `name`, oldest first.
    pub fn nodes_by_name(&self, name: &[u8]) -> &[Node] {
        self.nodes.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Removes every node indexed under `name`.
    pub fn remove_node_by_name(&mut self, name: &[u8]) {
        self.nodes.shift_remove(name);
    }

    /// Indexed names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &[u8]> {
        self.nodes.keys().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn query_type_name(&self) -> Option<&[u8]> {
        non_empty(&self.query_type_name)
    }

    pub fn mutation_type_name(&self) -> Option<&[u8]> {
        non_empty(&self.mutation_type_name)
    }

    pub fn subscription_type_name(&self) -> Option<&[u8]> {
        non_empty(&self.subscription_type_name)
    }

    pub fn set_query_type_name(&mut self, name: &[u8]) {
        set_bytes(&mut self.query_type_name, name);
    }

    pub fn set_mutation_type_name(&mut self, name: &[u8]) {
        set_bytes(&mut self.mutation_type_name, name);
    }

    pub fn set_subscription_type_name(&mut self, name: &[u8]) {
        set_bytes(&mut self.subscription_type_name, name);
    }
}

fn non_empty(bytes: &[u8]) -> Option<&[u8]> {
    (!bytes.is_empty()).then_some(bytes)
}

fn set_bytes(target: &mut Vec<u8>, bytes: &[u8]) {
    target.clear();
    target.extend_from_slice(bytes);
}
