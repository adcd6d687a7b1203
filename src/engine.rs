//! The stamina engine: current/max stamina, the regeneration clock, and the
//! rules for consuming and catching up stamina over elapsed wall-clock time.
//!
//! The engine holds no timer and never reads the clock itself - every
//! operation takes `now` from the caller, and an external scheduler owns the
//! periodic tick (see `session`). Persistence goes through a caller-supplied
//! [`KvStore`]; a store that fails is logged and retried on the next
//! mutation, never blocking play.

use crate::constants::*;
use crate::display;
use crate::events::{EventQueue, StaminaEvent};
use crate::store::KvStore;

/// Read-only view of the engine's gameplay-facing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaminaSnapshot {
    pub current: u32,
    pub max: u32,
}

/// Owns the player's stamina triple and the settlement rules.
///
/// Invariant: `current <= max` after every mutation. `last_regen_at` only
/// ever advances by whole multiples of [`REGEN_INTERVAL_MS`], so partial
/// progress toward the next cycle is never discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaminaEngine {
    current: u32,
    max: u32,
    /// Last instant regeneration was settled (epoch ms). All completed regen
    /// cycles up to this point have already been applied to `current`.
    last_regen_at: u64,
}

impl StaminaEngine {
    // =========================================================================
    // INITIALIZATION / REHYDRATION
    // =========================================================================

    /// Load persisted state (or create a fresh player) and immediately settle
    /// any regen cycles completed while the engine was not running.
    pub fn load(store: &mut dyn KvStore, now: u64) -> Self {
        Self::load_with_default(store, now, DEFAULT_MAX_STAMINA)
    }

    /// Like [`StaminaEngine::load`] with a configurable starting ceiling.
    pub fn load_with_default(store: &mut dyn KvStore, now: u64, default_max: u32) -> Self {
        let default_max = default_max.max(1);

        let Some(last_regen_at) = read_u64(store, KEY_LAST_REGEN) else {
            // Fresh player: full stamina, regen clock starts now.
            let engine = Self {
                current: default_max,
                max: default_max,
                last_regen_at: now,
            };
            engine.persist(store);
            return engine;
        };

        // Absent or malformed fields fall back individually; current is
        // reclamped in case a stale value exceeds the stored ceiling.
        let max = read_u32(store, KEY_MAX_STAMINA)
            .filter(|&m| m > 0)
            .unwrap_or(default_max);
        let current = read_u32(store, KEY_CURRENT_STAMINA)
            .unwrap_or(default_max)
            .min(max);

        let mut engine = Self {
            current,
            max,
            last_regen_at,
        };
        engine.settle(now, store, None);
        engine
    }

    // =========================================================================
    // SETTLEMENT
    // =========================================================================

    /// Apply every regen cycle completed since `last_regen_at`.
    ///
    /// The settlement clock keeps advancing even while stamina is clamped at
    /// max, so the cycle boundary stays aligned if the ceiling is later
    /// raised after a long idle period.
    ///
    /// A backward clock jump reads as zero elapsed time: no cycles are
    /// fabricated and the stored timestamp is left alone. Idempotent - calling
    /// twice with the same `now` is the same as calling once.
    pub fn settle(&mut self, now: u64, store: &mut dyn KvStore, events: Option<&mut EventQueue>) {
        let elapsed = now.saturating_sub(self.last_regen_at);
        let cycles = elapsed / REGEN_INTERVAL_MS;
        if cycles == 0 {
            return;
        }

        let missing = u64::from(self.max - self.current);
        let gained = (cycles * u64::from(REGEN_AMOUNT)).min(missing) as u32;
        self.current += gained;
        // Advance by the exact multiple - snapping to `now` would silently
        // discard partial progress toward the next cycle.
        self.last_regen_at += cycles * REGEN_INTERVAL_MS;
        self.persist(store);

        if gained > 0 {
            if let Some(queue) = events {
                queue.push(StaminaEvent::Regenerated {
                    amount: gained,
                    current: self.current,
                });
            }
        }
    }

    // =========================================================================
    // CONSUMPTION
    // =========================================================================

    /// The sole gate for stamina-costed actions: settle, then deduct
    /// all-or-nothing.
    ///
    /// Returns `true` and reduces `current` by exactly `amount`, or returns
    /// `false` with no state change. Zero-cost actions always succeed and
    /// deduct nothing (tier-gated actions that cost no stamina).
    pub fn consume(
        &mut self,
        amount: u32,
        now: u64,
        store: &mut dyn KvStore,
        mut events: Option<&mut EventQueue>,
    ) -> bool {
        // Settle first so the check sees stamina regenerated up to `now`.
        self.settle(now, store, events.as_deref_mut());

        if amount == 0 {
            return true;
        }
        if self.current < amount {
            if let Some(queue) = events {
                queue.push(StaminaEvent::ConsumeDenied {
                    requested: amount,
                    available: self.current,
                });
            }
            return false;
        }

        self.current -= amount;
        self.persist(store);
        if let Some(queue) = events {
            queue.push(StaminaEvent::Consumed {
                amount,
                remaining: self.current,
            });
        }
        true
    }

    // =========================================================================
    // UPGRADES
    // =========================================================================

    /// Raise the stamina ceiling. `current` is never auto-filled - the new
    /// headroom is earned through regeneration.
    pub fn increase_max(
        &mut self,
        amount: u32,
        store: &mut dyn KvStore,
        events: Option<&mut EventQueue>,
    ) {
        if amount == 0 {
            return;
        }
        self.max += amount;
        self.persist(store);
        if let Some(queue) = events {
            queue.push(StaminaEvent::MaxIncreased {
                amount,
                new_max: self.max,
            });
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Last settled regen timestamp (epoch ms).
    pub fn last_regen_at(&self) -> u64 {
        self.last_regen_at
    }

    pub fn snapshot(&self) -> StaminaSnapshot {
        StaminaSnapshot {
            current: self.current,
            max: self.max,
        }
    }

    /// Derived condition for UI styling only - gating always compares
    /// against the exact cost.
    pub fn is_full(&self) -> bool {
        self.current == self.max
    }

    /// Derived condition for UI styling only.
    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Milliseconds until the next regen cycle completes, projected from the
    /// last settled state. Read-only: does not settle, so it stays consistent
    /// with what the UI last saw even between ticks.
    pub fn time_until_next_regen(&self, now: u64) -> u64 {
        (self.last_regen_at + REGEN_INTERVAL_MS).saturating_sub(now)
    }

    /// Countdown to the next regen cycle as "M:SS".
    pub fn formatted_time_until_next_regen(&self, now: u64) -> String {
        display::format_countdown(self.time_until_next_regen(now))
    }

    // =========================================================================
    // PERSISTENCE
    // =========================================================================

    /// Write the whole triple. Each failed key is logged and play continues
    /// in-memory; the next mutation rewrites everything, which is the retry.
    fn persist(&self, store: &mut dyn KvStore) {
        let entries = [
            (KEY_CURRENT_STAMINA, self.current.to_string()),
            (KEY_MAX_STAMINA, self.max.to_string()),
            (KEY_LAST_REGEN, self.last_regen_at.to_string()),
        ];
        for (key, value) in entries {
            if let Err(err) = store.set(key, &value) {
                log::warn!("Failed to persist {}: {}", key, err);
            }
        }
    }
}

fn read_u32(store: &dyn KvStore, key: &str) -> Option<u32> {
    store.get(key).and_then(|v| v.trim().parse().ok())
}

fn read_u64(store: &dyn KvStore, key: &str) -> Option<u64> {
    store.get(key).and_then(|v| v.trim().parse().ok())
}
