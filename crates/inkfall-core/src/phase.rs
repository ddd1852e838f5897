//! Shared animation phase.

use std::fmt;

/// Animation phase shared by every particle of an animator.
///
/// Phases are totally ordered and only ever move forward:
/// `Idle < Falling < Waiting < Centering < Interactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Phase {
    /// Particles wait above the surface for the start trigger.
    #[default]
    Idle,
    /// Particles fall and sway until most of them have landed.
    Falling,
    /// Short pause while the landed text settles.
    Waiting,
    /// The whole field rises from its staging offset to the centre.
    Centering,
    /// Steady state: particles repel from the pointer and spring back.
    Interactive,
}

impl Phase {
    /// All phases in the order they are visited.
    pub const ALL: [Phase; 5] = [
        Phase::Idle,
        Phase::Falling,
        Phase::Waiting,
        Phase::Centering,
        Phase::Interactive,
    ];

    /// The phase that follows this one, if any.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Idle => Some(Phase::Falling),
            Phase::Falling => Some(Phase::Waiting),
            Phase::Waiting => Some(Phase::Centering),
            Phase::Centering => Some(Phase::Interactive),
            Phase::Interactive => None,
        }
    }

    /// Short lowercase name, used in logs and the status line.
    pub fn name(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Falling => "falling",
            Phase::Waiting => "waiting",
            Phase::Centering => "centering",
            Phase::Interactive => "interactive",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_walks_all_phases_in_order() {
        let mut walked = vec![Phase::Idle];
        while let Some(next) = walked.last().and_then(|p| p.next()) {
            walked.push(next);
        }
        assert_eq!(walked, Phase::ALL);
    }

    #[test]
    fn test_phases_are_ordered() {
        assert!(Phase::ALL.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Phase::default(), Phase::Idle);
    }
}
