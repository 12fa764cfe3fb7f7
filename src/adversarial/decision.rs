use crate::*;

/// The maximizer's chosen move at the root of one adversarial search.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Decision<A> {
    pub action: A,
    /// backed-up value of `action`
    pub value: Utility,
    /// game states generated below the root
    pub expanded: usize,
}

impl<A> From<(A, Utility, usize)> for Decision<A> {
    fn from((action, value, expanded): (A, Utility, usize)) -> Self {
        Self {
            action,
            value,
            expanded,
        }
    }
}

impl<A> Decision<A>
where
    A: std::fmt::Debug,
{
    pub(crate) fn logged(self, name: &str) -> Self {
        log::debug!("{:<16}{}", name, self);
        self
    }
}

impl<A> std::fmt::Display for Decision<A>
where
    A: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<20}{:<20}{:<20}",
            format!("action {:?}", self.action),
            format!("value {:.3}", self.value),
            format!("expanded {}", self.expanded),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_in_columns() {
        let decision = Decision::from(('x', 1.5, 7));
        assert_eq!(
            decision.to_string().trim_end(),
            "action 'x'          value 1.500         expanded 7"
        );
    }
}
