use serde::{Deserialize, Serialize};

/// Workplace attendance policy. Numeric codes match the four modes of the
/// reference study and the report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationMode {
    /// Mode 1: the whole team is in the office every day.
    FullTeam,
    /// Mode 2: two fixed halves, deterministic swap on rotation days.
    FixedHalves,
    /// Mode 3: two fixed halves; one coin flip per rotation day decides
    /// whether the halves swap. The flip applies to everyone together.
    CoinFlipHalves,
    /// Mode 4: a fresh half-team is drawn without replacement from the
    /// non-quarantined roster on every rotation day.
    ResampledHalves,
}

impl RotationMode {
    pub const ALL: [RotationMode; 4] = [
        RotationMode::FullTeam,
        RotationMode::FixedHalves,
        RotationMode::CoinFlipHalves,
        RotationMode::ResampledHalves,
    ];

    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            RotationMode::FullTeam => 1,
            RotationMode::FixedHalves => 2,
            RotationMode::CoinFlipHalves => 3,
            RotationMode::ResampledHalves => 4,
        }
    }

    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(RotationMode::FullTeam),
            2 => Some(RotationMode::FixedHalves),
            3 => Some(RotationMode::CoinFlipHalves),
            4 => Some(RotationMode::ResampledHalves),
            _ => None,
        }
    }
}

/// Which days of the rotation period trigger an attendance update.
///
/// The reference material disagrees with itself here: the refined variant
/// rotates on period boundaries (`day % period == 0`), the original script
/// on every other day (`day % period != 0`). Both stay selectable;
/// `OnBoundary` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationCadence {
    #[default]
    OnBoundary,
    OffBoundary,
}

impl RotationCadence {
    #[must_use]
    pub fn rotates_on(self, day: u32, period: u32) -> bool {
        match self {
            RotationCadence::OnBoundary => day % period == 0,
            RotationCadence::OffBoundary => day % period != 0,
        }
    }
}
