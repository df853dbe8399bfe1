//! Price dependency graph module.
//!
//! Provides the `PriceDependencyGraph` type, a bipartite directed graph
//! from items to the imbuement types whose recipes consume them. The
//! store consults it when a price changes to find which imbuements
//! must be rebuilt.

use crate::catalog::ImbuementType;
use crate::item::Item;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Node of the dependency graph.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum PriceNode {
    Item(Item),
    Imbuement(ImbuementType),
}

/// Directed graph of `item -> imbuement type` edges.
///
/// An edge means the type's Powerful recipe (and so possibly any lower
/// tier) consumes the item. The gold token never gets edges; it affects
/// every non-empty imbuement through the alternative-payment total.
///
/// # Examples
///
/// ```rust
/// use imbuement_planner::graph::PriceDependencyGraph;
/// use imbuement_planner::{ImbuementType, Item};
///
/// let mut graph = PriceDependencyGraph::new();
/// graph.add_dependency(Item::VampireTeeth, ImbuementType::Vampirism);
///
/// assert!(graph.depends_on(ImbuementType::Vampirism, Item::VampireTeeth));
/// assert!(!graph.depends_on(ImbuementType::Void, Item::VampireTeeth));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriceDependencyGraph {
    graph: DiGraph<PriceNode, ()>,
    node_map: HashMap<PriceNode, NodeIndex>,
}

impl PriceDependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn add_node(&mut self, node: PriceNode) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(&node) {
            idx
        } else {
            let idx = self.graph.add_node(node);
            self.node_map.insert(node, idx);
            idx
        }
    }

    /// Record that `kind` consumes `item`. Repeated calls are no-ops.
    pub fn add_dependency(&mut self, item: Item, kind: ImbuementType) {
        let from = self.add_node(PriceNode::Item(item));
        let to = self.add_node(PriceNode::Imbuement(kind));
        self.graph.update_edge(from, to, ());
    }

    /// Whether a price change of `item` affects imbuements of `kind`.
    ///
    /// Always true for the gold token on non-empty types.
    pub fn depends_on(&self, kind: ImbuementType, item: Item) -> bool {
        if kind.is_none() {
            return false;
        }
        if item.is_gold_token() {
            return true;
        }
        match (
            self.node_map.get(&PriceNode::Item(item)),
            self.node_map.get(&PriceNode::Imbuement(kind)),
        ) {
            (Some(&from), Some(&to)) => self.graph.contains_edge(from, to),
            _ => false,
        }
    }
}
