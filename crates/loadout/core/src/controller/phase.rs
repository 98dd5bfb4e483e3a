use crate::state::{Mode, RuneCategory, RuneId};

/// Interaction state of the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadoutPhase {
    #[default]
    Idle,
    /// A rune is held until the player picks one of `candidates`.
    AwaitingRuneSlotPick(PendingRunePick),
}

impl LoadoutPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn pending_pick(&self) -> Option<&PendingRunePick> {
        match self {
            Self::AwaitingRuneSlotPick(pick) => Some(pick),
            Self::Idle => None,
        }
    }
}

/// Rune held while waiting for the player to choose a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRunePick {
    pub mode: Mode,
    pub rune: RuneId,
    pub category: RuneCategory,
    /// Occupied candidate slot indices, ascending.
    pub candidates: Vec<usize>,
}

impl PendingRunePick {
    pub fn is_candidate(&self, index: usize) -> bool {
        self.candidates.contains(&index)
    }
}
