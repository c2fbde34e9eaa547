use std::collections::HashMap;

/// A decided split: which column, and the decoded threshold/label to test it against.
/// `value` is always the human-readable decoded string -- the decimal threshold for an
/// ordinal column, or the original label (never the integer code) for a categorical
/// one -- so it can be compared directly against a test row's raw string fields and
/// (incidentally) printed without a metadata lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Question {
    pub column: usize,
    pub value: String,
}

/// Class-label -> count histogram held at a leaf. The sum of counts is always >= 1 for
/// any leaf actually produced by the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafPrediction(HashMap<String, usize>);

impl LeafPrediction {
    pub fn from_counts(counts: HashMap<String, usize>) -> Self {
        Self(counts)
    }

    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.0
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// The class with the highest count; ties broken by picking the lexicographically
    /// smaller label, so the result is deterministic regardless of hash-map iteration
    /// order.
    pub fn predicted_label(&self) -> Option<&str> {
        self.0
            .iter()
            .fold(None, |best: Option<(&str, usize)>, (label, &count)| {
                match best {
                    Some((best_label, best_count))
                        if count < best_count
                            || (count == best_count && label.as_str() > best_label) =>
                    {
                        Some((best_label, best_count))
                    }
                    _ => Some((label.as_str(), count)),
                }
            })
            .map(|(label, _)| label)
    }
}

/// A built decision tree node: either a terminal histogram, or an internal split with
/// two owned children. Acyclic and strictly owning -- a `Node` is destroyed with its
/// enclosing tree and is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(LeafPrediction),
    Internal {
        question: Question,
        true_child: Box<Node>,
        false_child: Box<Node>,
    },
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Total number of leaves reachable from this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Internal {
                true_child,
                false_child,
                ..
            } => true_child.leaf_count() + false_child.leaf_count(),
        }
    }
}
