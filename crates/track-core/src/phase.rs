//! Track lifecycle phases and the operation legality table.
//!
//! The lifecycle is linear and chair-driven:
//! `Reception → Bidding → Review → Selection`. There are no automatic
//! transitions and no cycles; Selection is terminal. Which operation is
//! legal in which phase is a closed table, kept here so the track's
//! dispatch and the tests share one source of truth.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle phase of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Reception,
    Bidding,
    Review,
    Selection,
}

impl Phase {
    /// Phase name for display. Querying it never mutates anything.
    pub fn name(self) -> &'static str {
        match self {
            Phase::Reception => "Reception",
            Phase::Bidding => "Bidding",
            Phase::Review => "Review",
            Phase::Selection => "Selection",
        }
    }

    /// The following phase, or `None` from the terminal phase.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Reception => Some(Phase::Bidding),
            Phase::Bidding => Some(Phase::Review),
            Phase::Review => Some(Phase::Selection),
            Phase::Selection => None,
        }
    }

    /// The legality table: which operations this phase admits.
    pub fn allows(self, operation: Operation) -> bool {
        matches!(
            (self, operation),
            (
                Phase::Reception,
                Operation::SubmitItem | Operation::UpdateItem | Operation::RemoveItem
            ) | (Phase::Bidding, Operation::PlaceBid)
                | (Phase::Review, Operation::SubmitReview)
                | (Phase::Selection, Operation::RunSelection)
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A mutating operation a caller can attempt on a track.
///
/// Carried inside phase-violation errors so the failure names exactly
/// what was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SubmitItem,
    UpdateItem,
    RemoveItem,
    PlaceBid,
    SubmitReview,
    RunSelection,
}

impl Operation {
    /// Every operation, for exhaustive table checks.
    pub const ALL: [Operation; 6] = [
        Operation::SubmitItem,
        Operation::UpdateItem,
        Operation::RemoveItem,
        Operation::PlaceBid,
        Operation::SubmitReview,
        Operation::RunSelection,
    ];
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::SubmitItem => "submit item",
            Operation::UpdateItem => "update item",
            Operation::RemoveItem => "remove item",
            Operation::PlaceBid => "place bid",
            Operation::SubmitReview => "submit review",
            Operation::RunSelection => "run selection",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHASES: [Phase; 4] = [
        Phase::Reception,
        Phase::Bidding,
        Phase::Review,
        Phase::Selection,
    ];

    #[test]
    fn test_lifecycle_is_linear_and_terminal() {
        assert_eq!(Phase::Reception.next(), Some(Phase::Bidding));
        assert_eq!(Phase::Bidding.next(), Some(Phase::Review));
        assert_eq!(Phase::Review.next(), Some(Phase::Selection));
        assert_eq!(Phase::Selection.next(), None);
    }

    #[test]
    fn test_each_phase_admits_exactly_its_operations() {
        for phase in PHASES {
            let allowed: Vec<Operation> = Operation::ALL
                .into_iter()
                .filter(|op| phase.allows(*op))
                .collect();
            match phase {
                Phase::Reception => assert_eq!(
                    allowed,
                    vec![
                        Operation::SubmitItem,
                        Operation::UpdateItem,
                        Operation::RemoveItem
                    ]
                ),
                Phase::Bidding => assert_eq!(allowed, vec![Operation::PlaceBid]),
                Phase::Review => assert_eq!(allowed, vec![Operation::SubmitReview]),
                Phase::Selection => assert_eq!(allowed, vec![Operation::RunSelection]),
            }
        }
    }

    #[test]
    fn test_phase_names() {
        let names: Vec<&str> = PHASES.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Reception", "Bidding", "Review", "Selection"]);
    }
}
