use crate::*;

/// A finite game given as an explicit tree, plus the number of agents that
/// take turns walking down it.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    agents: usize,
    root: Branch,
}

impl Outline {
    pub fn new(agents: usize, root: Branch) -> Self {
        assert!(agents > 0, "an outline needs at least one agent");
        Self { agents, root }
    }
    pub fn root(&self) -> &Branch {
        &self.root
    }
    /// Evaluation function: the payoff of a finished game, or of the
    /// leftmost finish below an unfinished one.
    pub fn score(&self) -> Utility {
        self.root.payoff()
    }
}

impl GameState for Outline {
    type A = usize;
    fn legal_actions(&self, _: Agent) -> Vec<usize> {
        (0..self.root.children().len()).collect()
    }
    fn successor(&self, _: Agent, action: &usize) -> Self {
        match self.root.children().get(*action) {
            Some(child) => Self {
                agents: self.agents,
                root: child.clone(),
            },
            None => unreachable!("no child {} in this outline", action),
        }
    }
    fn agents(&self) -> usize {
        self.agents
    }
    fn is_win(&self) -> bool {
        self.root.is_leaf() && self.score() > 0.
    }
    fn is_lose(&self) -> bool {
        self.root.is_leaf() && self.score() <= 0.
    }
}

impl Arbitrary for Outline {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let agents = rng.random_range(2..=3);
        Self::new(agents, Branch::sprout(OUTLINE_HEIGHT, rng))
    }
}

impl std::fmt::Display for Outline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<20}{:<20}{:<20}",
            format!("agents {}", self.agents),
            format!("positions {}", self.root.size()),
            format!("height {}", self.root.height()),
        )
    }
}
