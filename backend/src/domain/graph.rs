//! Graph demo traversal primitives.

use serde_json::Value;

/// Internal node id in the graph store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(i64);

impl NodeId {
    /// Node the demo traversal starts from unless configured otherwise.
    pub const DEMO_DEFAULT: Self = Self(14_698);

    /// Wrap a raw node id.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

/// Cypher statement returning every node adjacent to `$node_id` alongside the
/// start node.
pub const NEIGHBOURS_STATEMENT: &str = "MATCH (n)-->(x) WHERE id(n) = $node_id RETURN x, n";

/// Parameterised traversal sent to the graph store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalQuery {
    statement: &'static str,
    start: NodeId,
}

impl TraversalQuery {
    /// Outgoing neighbours of `start`.
    pub const fn neighbours_of(start: NodeId) -> Self {
        Self {
            statement: NEIGHBOURS_STATEMENT,
            start,
        }
    }

    /// Cypher text.
    pub fn statement(&self) -> &'static str {
        self.statement
    }

    /// Start node bound to `$node_id`.
    pub fn start(&self) -> NodeId {
        self.start
    }
}

/// Raw result rows of a traversal, one JSON array per returned record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraversalRows(Vec<Value>);

impl TraversalRows {
    /// Wrap decoded rows.
    pub fn new(rows: Vec<Value>) -> Self {
        Self(rows)
    }

    /// Borrow the rows.
    pub fn rows(&self) -> &[Value] {
        &self.0
    }

    /// Render the rows as compact JSON text.
    pub fn to_json_text(&self) -> String {
        Value::Array(self.0.clone()).to_string()
    }
}
