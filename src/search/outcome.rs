use crate::*;

/// What one graph-search call produced.
///
/// `path` is `None` when the frontier ran dry without reaching a goal, which
/// is not the same thing as `Some(vec![])`: the start state was already a goal.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Outcome<A> {
    pub path: Option<Vec<A>>,
    /// path cost of the returned solution
    pub cost: Option<Cost>,
    /// states marked visited and expanded
    pub expanded: usize,
    /// child nodes created
    pub generated: usize,
}

impl<A> Outcome<A> {
    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }
    pub fn solution(&self) -> Option<&[A]> {
        self.path.as_deref()
    }
    pub fn into_path(self) -> Option<Vec<A>> {
        self.path
    }
}

impl<A> std::fmt::Display for Outcome<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.path, self.cost) {
            (Some(path), Some(cost)) => write!(
                f,
                "{:<20}{:<20}{:<20}{:<20}",
                format!("actions {}", path.len()),
                format!("cost {}", cost),
                format!("expanded {}", self.expanded),
                format!("generated {}", self.generated),
            ),
            _ => write!(
                f,
                "{:<40}{:<20}{:<20}",
                "no solution",
                format!("expanded {}", self.expanded),
                format!("generated {}", self.generated),
            ),
        }
    }
}
