use serde::{Deserialize, Serialize};

/// Infection lifecycle stage for one team member.
///
/// Progression is forward-only: `Healthy` → `Infected` → `Infectious` →
/// `Quarantined`, with `Infected` allowed to jump straight to `Quarantined`
/// when symptoms appear before infectiousness does. `Quarantined` is
/// absorbing for the remainder of the trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthState {
    Healthy,
    Infected,
    Infectious,
    Quarantined,
}

impl HealthState {
    /// Whether office presence in this state counts toward the person-day
    /// tally. Infectious and quarantined individuals do not, even when
    /// nominally at the office.
    #[must_use]
    pub fn is_productive(self) -> bool {
        matches!(self, HealthState::Healthy | HealthState::Infected)
    }
}

/// One team member. Individuals have no identity beyond their roster index.
#[derive(Debug, Clone, Copy)]
pub struct Individual {
    pub health: HealthState,
    /// Days until an `Infected` individual turns `Infectious`.
    /// Meaningful only while infected; set once at the moment of infection.
    pub infectious_countdown: u32,
    /// Days until symptoms would appear, gating quarantine eligibility.
    pub symptom_countdown: u32,
    /// Physically present today. Recomputed by the rotation policy, not by
    /// infection state.
    pub at_office: bool,
}

impl Individual {
    #[must_use]
    pub fn healthy(at_office: bool) -> Self {
        Self {
            health: HealthState::Healthy,
            infectious_countdown: 0,
            symptom_countdown: 0,
            at_office,
        }
    }

    /// Mark newly infected. Both countdowns are set here and never
    /// renegotiated afterwards.
    pub fn infect(&mut self, infectious_days: u32, symptom_days: u32) {
        self.health = HealthState::Infected;
        self.infectious_countdown = infectious_days;
        self.symptom_countdown = symptom_days;
    }
}
