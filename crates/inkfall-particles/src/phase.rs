//! Forward-only phase machine shared by all particles.

use inkfall_core::Phase;

/// Drives the shared [`Phase`] through
/// `Idle -> Falling -> Waiting -> Centering -> Interactive`.
///
/// Transitions only ever move forward and each fires at most once.
#[derive(Debug, Clone, Default)]
pub struct PhaseMachine {
    phase: Phase,
    /// Elapsed time at which the waiting timer was armed.
    waiting_since_ms: Option<u64>,
    /// Centering progress, 0.0-1.0.
    progress: f32,
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Leave `Idle`. Returns false if the sequence has already started.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.advance(Phase::Falling);
        true
    }

    /// Falling is done: enter `Waiting` and arm the timer at `elapsed_ms`.
    pub fn finish_falling(&mut self, elapsed_ms: u64) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        self.waiting_since_ms = Some(elapsed_ms);
        self.advance(Phase::Waiting);
        true
    }

    /// Enter `Centering` once `delay_ms` has passed since waiting began.
    pub fn poll_timer(&mut self, elapsed_ms: u64, delay_ms: u64) -> bool {
        match (self.phase, self.waiting_since_ms) {
            (Phase::Waiting, Some(since)) if elapsed_ms.saturating_sub(since) >= delay_ms => {
                self.waiting_since_ms = None;
                self.advance(Phase::Centering);
                true
            }
            _ => false,
        }
    }

    /// Advance centering progress by `step`, entering `Interactive` at 1.
    ///
    /// Returns the new progress. Outside `Centering` this is a no-op.
    pub fn step_centering(&mut self, step: f32) -> f32 {
        if self.phase != Phase::Centering {
            return self.progress;
        }
        // A non-positive step would stall forever
        let step = if step > 0.0 { step } else { 1.0 };
        self.progress = (self.progress + step).min(1.0);
        if self.progress >= 1.0 {
            self.advance(Phase::Interactive);
        }
        self.progress
    }

    fn advance(&mut self, to: Phase) {
        debug_assert_eq!(
            self.phase.next(),
            Some(to),
            "phase {} -> {} is not a single step forward",
            self.phase,
            to
        );
        tracing::debug!(from = %self.phase, to = %to, "phase transition");
        self.phase = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_fires_once() {
        let mut machine = PhaseMachine::new();
        assert!(machine.start());
        assert!(!machine.start());
        assert_eq!(machine.phase(), Phase::Falling);
    }

    #[test]
    fn test_transitions_require_previous_phase() {
        let mut machine = PhaseMachine::new();
        assert!(!machine.finish_falling(0));
        assert!(!machine.poll_timer(10_000, 0));
        assert_eq!(machine.step_centering(0.5), 0.0);
        assert_eq!(machine.phase(), Phase::Idle);
    }

    #[test]
    fn test_waiting_timer() {
        let mut machine = PhaseMachine::new();
        machine.start();
        machine.finish_falling(500);
        assert!(!machine.poll_timer(1499, 1000));
        assert_eq!(machine.phase(), Phase::Waiting);
        assert!(machine.poll_timer(1500, 1000));
        assert_eq!(machine.phase(), Phase::Centering);
    }

    #[test]
    fn test_centering_reaches_interactive() {
        let mut machine = PhaseMachine::new();
        machine.start();
        machine.finish_falling(0);
        machine.poll_timer(0, 0);
        assert_eq!(machine.step_centering(0.25), 0.25);
        machine.step_centering(0.25);
        machine.step_centering(0.25);
        assert_eq!(machine.phase(), Phase::Centering);
        assert_eq!(machine.step_centering(0.3), 1.0);
        assert_eq!(machine.phase(), Phase::Interactive);
        // Terminal: nothing moves it on and start stays a no-op
        assert!(!machine.start());
        assert_eq!(machine.phase(), Phase::Interactive);
    }
}
