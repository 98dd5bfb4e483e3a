//! Stat system.
//!
//! Stats are derived, never stored: the recalculator rebuilds them from the
//! level base, the equipped items and the equipped runes after every mutation.
pub mod bonus;
pub mod character;
pub mod kinds;
pub mod recalc;

pub use bonus::{Bonus, BonusStack, StatBonuses, StatBounds};
pub use character::{CharacterStats, CpTransition, Recalculation};
pub use kinds::{ModifierOp, StatKind, StatMap, StatModifier};
pub use recalc::{RecalcInput, StatRecalculator};
