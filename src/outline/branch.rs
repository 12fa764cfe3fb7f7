use crate::*;
use std::sync::Arc;

/// One position of an explicit game tree.
///
/// Subtrees are shared, so stepping into a child is a reference bump
/// rather than a deep copy.
#[derive(Debug, Clone, PartialEq)]
pub enum Branch {
    /// finished game paying the maximizer this much
    Leaf(Utility),
    /// unfinished game; the agent on move picks a child by index
    Fork(Arc<[Branch]>),
}

impl Branch {
    pub fn leaf(payoff: Utility) -> Self {
        Self::Leaf(payoff)
    }
    pub fn fork(children: Vec<Branch>) -> Self {
        Self::Fork(Arc::from(children))
    }
    pub fn children(&self) -> &[Branch] {
        match self {
            Self::Leaf(_) => &[],
            Self::Fork(children) => children,
        }
    }
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
    /// payoff of this leaf, or of the leftmost leaf below this fork
    pub fn payoff(&self) -> Utility {
        match self {
            Self::Leaf(payoff) => *payoff,
            Self::Fork(children) => children
                .first()
                .map(Branch::payoff)
                .unwrap_or(Utility::NEG_INFINITY),
        }
    }
    /// number of positions in this subtree, this one included
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(Branch::size).sum::<usize>()
    }
    /// longest run of moves down to a leaf
    pub fn height(&self) -> usize {
        self.children()
            .iter()
            .map(|child| 1 + child.height())
            .max()
            .unwrap_or(0)
    }
}

impl Branch {
    /// random subtree of at most `height` more moves
    fn grow(height: usize, rng: &mut impl rand::Rng) -> Self {
        if height == 0 || rng.random_bool(0.2) {
            Self::leaf(rng.random_range(-OUTLINE_PAYOFF..=OUTLINE_PAYOFF) as Utility)
        } else {
            Self::sprout(height, rng)
        }
    }
    /// random fork with at least one child
    pub(crate) fn sprout(height: usize, rng: &mut impl rand::Rng) -> Self {
        let n = rng.random_range(1..=OUTLINE_BRANCHING);
        Self::fork(
            (0..n)
                .map(|_| Self::grow(height.saturating_sub(1), rng))
                .collect(),
        )
    }
}
