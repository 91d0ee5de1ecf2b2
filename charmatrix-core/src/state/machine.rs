//! Process state machine
//!
//! The firmware has exactly two phases. Setup failures never produce an
//! event: they halt the firmware while still in [`Phase::Booting`].

/// Process phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Buses, pins, display, interrupt handler and core 1 being set up
    Booting,
    /// Render loop running; left only by power loss or reset
    SteadyState,
}

/// Events driving [`Phase`] transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseEvent {
    /// Every peripheral and context is up
    SetupComplete,
}

impl Phase {
    /// Check if the render loop may run
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::SteadyState)
    }

    /// Process an event and return the next phase
    pub fn transition(self, event: PhaseEvent) -> Self {
        match (self, event) {
            (Phase::Booting, PhaseEvent::SetupComplete) => Phase::SteadyState,
            // Steady state is terminal
            (Phase::SteadyState, _) => Phase::SteadyState,
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Booting
    }
}
