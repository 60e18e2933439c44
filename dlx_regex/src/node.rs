/**
 * The regex tree data-structures.
 */

use std::fmt;
use std::sync::Arc;

/// Tie-breaker between matches of equal length, higher wins.
pub type Priority = i32;

/// An immutable, cheaply clonable regular expression.
///
/// Cloning only bumps a reference count, so subtrees are shared freely between
/// the derivatives of a regex and the regex itself.
#[derive(Clone, PartialEq, Eq)]
pub struct Regex(Arc<Node>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A fixed character sequence. `consumed` is the byte offset of the part
    /// that has already been matched, the rest still has to be.
    Unit{
        sequence: Arc<str>,
        consumed: usize,
        priority: Priority,
    },

    Concatenation{
        first: Regex,
        second: Regex,
        priority: Priority,
    },

    Union{
        first: Regex,
        second: Regex,
        priority: Priority,
    },

    ZeroOrOne{
        subregex: Regex,
        priority: Priority,
    },

    ZeroOrMore{
        subregex: Regex,
        priority: Priority,
    },

    OneOrMore{
        subregex: Regex,
        priority: Priority,
    },
}

impl Node {
    pub fn priority(&self) -> Priority {
        match self {
            Node::Unit{ priority, .. }
            | Node::Concatenation{ priority, .. }
            | Node::Union{ priority, .. }
            | Node::ZeroOrOne{ priority, .. }
            | Node::ZeroOrMore{ priority, .. }
            | Node::OneOrMore{ priority, .. } => *priority,
        }
    }
}

/**
 * Construction.
 */

impl Regex {
    pub(crate) fn from_node(node: Node) -> Self {
        Self(Arc::new(node))
    }

    pub fn node(&self) -> &Node {
        &self.0
    }

    pub fn priority(&self) -> Priority {
        self.0.priority()
    }

    /// Structural equality, short-circuiting on shared subtrees.
    pub fn same_as(&self, other: &Regex) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }

    pub fn unit(sequence: &str) -> Self {
        Self::unit_with_priority(sequence, 0)
    }

    pub fn unit_with_priority(sequence: &str, priority: Priority) -> Self {
        Self::from_node(Node::Unit{ sequence: sequence.into(), consumed: 0, priority })
    }

    pub fn concatenation(first: Regex, second: Regex) -> Self {
        Self::concatenation_with_priority(first, second, 0)
    }

    pub fn concatenation_with_priority(first: Regex, second: Regex, priority: Priority) -> Self {
        Self::from_node(Node::Concatenation{ first, second, priority })
    }

    pub fn union(first: Regex, second: Regex) -> Self {
        Self::union_with_priority(first, second, 0)
    }

    pub fn union_with_priority(first: Regex, second: Regex, priority: Priority) -> Self {
        Self::from_node(Node::Union{ first, second, priority })
    }

    pub fn zero_or_one(subregex: Regex) -> Self {
        Self::zero_or_one_with_priority(subregex, 0)
    }

    pub fn zero_or_one_with_priority(subregex: Regex, priority: Priority) -> Self {
        Self::from_node(Node::ZeroOrOne{ subregex, priority })
    }

    pub fn zero_or_more(subregex: Regex) -> Self {
        Self::zero_or_more_with_priority(subregex, 0)
    }

    pub fn zero_or_more_with_priority(subregex: Regex, priority: Priority) -> Self {
        Self::from_node(Node::ZeroOrMore{ subregex, priority })
    }

    pub fn one_or_more(subregex: Regex) -> Self {
        Self::one_or_more_with_priority(subregex, 0)
    }

    pub fn one_or_more_with_priority(subregex: Regex, priority: Priority) -> Self {
        Self::from_node(Node::OneOrMore{ subregex, priority })
    }

    /// Rebuilds the whole tree with `priority` assigned to every node.
    /// Literal sequences are shared with `self`.
    pub fn with_priority(&self, priority: Priority) -> Self {
        let node = match self.node() {
            Node::Unit{ sequence, consumed, .. } =>
                Node::Unit{ sequence: Arc::clone(sequence), consumed: *consumed, priority },

            Node::Concatenation{ first, second, .. } => Node::Concatenation{
                first: first.with_priority(priority),
                second: second.with_priority(priority),
                priority,
            },

            Node::Union{ first, second, .. } => Node::Union{
                first: first.with_priority(priority),
                second: second.with_priority(priority),
                priority,
            },

            Node::ZeroOrOne{ subregex, .. } =>
                Node::ZeroOrOne{ subregex: subregex.with_priority(priority), priority },

            Node::ZeroOrMore{ subregex, .. } =>
                Node::ZeroOrMore{ subregex: subregex.with_priority(priority), priority },

            Node::OneOrMore{ subregex, .. } =>
                Node::OneOrMore{ subregex: subregex.with_priority(priority), priority },
        };
        Self::from_node(node)
    }
}

/**
 * Printing.
 */

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// Compact notation, only meant for diagnostics: "ab", (a b), (a | b), a?, a*, a+
impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::Unit{ sequence, consumed, .. } => write!(f, "{:?}", &sequence[*consumed..]),
            Node::Concatenation{ first, second, .. } => write!(f, "({} {})", first, second),
            Node::Union{ first, second, .. } => write!(f, "({} | {})", first, second),
            Node::ZeroOrOne{ subregex, .. } => write!(f, "{}?", subregex),
            Node::ZeroOrMore{ subregex, .. } => write!(f, "{}*", subregex),
            Node::OneOrMore{ subregex, .. } => write!(f, "{}+", subregex),
        }
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
