//! Battle skill definitions and the stamina gate in front of them.
//!
//! Only the stamina economy lives here - damage numbers and cooldown
//! animation belong to the battle screen.

use crate::engine::StaminaEngine;
use crate::events::EventQueue;
use crate::store::KvStore;

/// The player's attack skills, ordered by stamina cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    Slash,
    PowerSlash,
    CriticalStrike,
    DevastatingBlow,
}

impl SkillKind {
    pub const ALL: [SkillKind; 4] = [
        SkillKind::Slash,
        SkillKind::PowerSlash,
        SkillKind::CriticalStrike,
        SkillKind::DevastatingBlow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SkillKind::Slash => "Slash",
            SkillKind::PowerSlash => "Power Slash",
            SkillKind::CriticalStrike => "Critical Strike",
            SkillKind::DevastatingBlow => "Devastating Blow",
        }
    }

    /// Stamina cost to use the skill. Slash is the free basic attack.
    pub fn stamina_cost(self) -> u32 {
        match self {
            SkillKind::Slash => 0,
            SkillKind::PowerSlash => 10,
            SkillKind::CriticalStrike => 15,
            SkillKind::DevastatingBlow => 25,
        }
    }
}

/// Pay a skill's stamina cost. Returns `true` if the skill may be performed;
/// on `false` nothing was deducted and the caller must not perform it.
pub fn try_use_skill(
    engine: &mut StaminaEngine,
    skill: SkillKind,
    now: u64,
    store: &mut dyn KvStore,
    events: Option<&mut EventQueue>,
) -> bool {
    engine.consume(skill.stamina_cost(), now, store, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    const T0: u64 = 1_700_000_000_000;

    #[test]
    fn test_skill_costs() {
        assert_eq!(SkillKind::Slash.stamina_cost(), 0);
        assert_eq!(SkillKind::PowerSlash.stamina_cost(), 10);
        assert_eq!(SkillKind::CriticalStrike.stamina_cost(), 15);
        assert_eq!(SkillKind::DevastatingBlow.stamina_cost(), 25);
    }

    #[test]
    fn test_costed_skill_deducts_on_success() {
        let mut store = MemoryStore::new();
        let mut engine = StaminaEngine::load(&mut store, T0);

        assert!(try_use_skill(
            &mut engine,
            SkillKind::DevastatingBlow,
            T0,
            &mut store,
            None
        ));
        assert_eq!(engine.current(), 235);
    }

    #[test]
    fn test_costed_skill_denied_without_stamina() {
        let mut store = MemoryStore::new();
        let mut engine = StaminaEngine::load(&mut store, T0);
        assert!(engine.consume(260, T0, &mut store, None));

        assert!(!try_use_skill(
            &mut engine,
            SkillKind::PowerSlash,
            T0,
            &mut store,
            None
        ));
        assert_eq!(engine.current(), 0);
    }

    #[test]
    fn test_basic_attack_works_at_zero_stamina() {
        let mut store = MemoryStore::new();
        let mut engine = StaminaEngine::load(&mut store, T0);
        assert!(engine.consume(260, T0, &mut store, None));

        assert!(try_use_skill(
            &mut engine,
            SkillKind::Slash,
            T0,
            &mut store,
            None
        ));
        assert_eq!(engine.current(), 0);
    }
}
