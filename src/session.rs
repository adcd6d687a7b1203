//! Session lifecycle around the engine - owns the clock, the store, and the
//! event queue for one login.
//!
//! The session holds no timer of its own: the host schedules `tick()`
//! (roughly once per second, see [`crate::constants::TICK_PERIOD_MS`]) while
//! the session is alive and simply stops calling it after `end()`. Ticking
//! only keeps displayed values fresh; consumption settles on its own, so a
//! missed or redundant tick is harmless.
//!
//! All operations run on one logical thread. A multi-threaded host must wrap
//! the whole session in a mutex so settle-then-consume stays a single
//! read-modify-write step (rapid double-clicks must serialize).

use crate::clock::Clock;
use crate::constants::{KEY_CURRENT_STAMINA, KEY_LAST_REGEN, KEY_MAX_STAMINA};
use crate::engine::{StaminaEngine, StaminaSnapshot};
use crate::events::{EventQueue, StaminaEvent};
use crate::skills::{self, SkillKind};
use crate::store::KvStore;

/// One player's stamina state for the duration of a login session.
pub struct Session<C: Clock, S: KvStore> {
    clock: C,
    store: S,
    engine: StaminaEngine,
    events: EventQueue,
}

impl<C: Clock, S: KvStore> Session<C, S> {
    /// Begin a session: rehydrate persisted state (or create a fresh player)
    /// and catch up regen cycles completed while logged out.
    pub fn begin(clock: C, mut store: S) -> Self {
        let engine = StaminaEngine::load(&mut store, clock.now_ms());
        Self {
            clock,
            store,
            engine,
            events: EventQueue::new(),
        }
    }

    /// Like [`Session::begin`] with a configurable starting ceiling.
    pub fn begin_with_default(clock: C, mut store: S, default_max: u32) -> Self {
        let engine = StaminaEngine::load_with_default(&mut store, clock.now_ms(), default_max);
        Self {
            clock,
            store,
            engine,
            events: EventQueue::new(),
        }
    }

    /// Periodic refresh: settle up to now so displayed stamina and countdowns
    /// stay current. Safe to call redundantly or not at all.
    pub fn tick(&mut self) {
        let now = self.clock.now_ms();
        self.engine
            .settle(now, &mut self.store, Some(&mut self.events));
    }

    /// Gate a stamina-costed action. See [`StaminaEngine::consume`].
    pub fn consume(&mut self, amount: u32) -> bool {
        let now = self.clock.now_ms();
        self.engine
            .consume(amount, now, &mut self.store, Some(&mut self.events))
    }

    /// Gate a battle skill on its stamina cost.
    pub fn use_skill(&mut self, skill: SkillKind) -> bool {
        let now = self.clock.now_ms();
        skills::try_use_skill(
            &mut self.engine,
            skill,
            now,
            &mut self.store,
            Some(&mut self.events),
        )
    }

    /// Raise the stamina ceiling (upgrades). Never auto-fills.
    pub fn increase_max(&mut self, amount: u32) {
        self.engine
            .increase_max(amount, &mut self.store, Some(&mut self.events));
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn stamina(&self) -> u32 {
        self.engine.current()
    }

    pub fn max_stamina(&self) -> u32 {
        self.engine.max()
    }

    pub fn snapshot(&self) -> StaminaSnapshot {
        self.engine.snapshot()
    }

    /// Milliseconds until the next regen cycle completes.
    pub fn time_until_next_regen(&self) -> u64 {
        self.engine.time_until_next_regen(self.clock.now_ms())
    }

    /// Countdown to the next regen cycle as "M:SS".
    pub fn formatted_time_until_next_regen(&self) -> String {
        self.engine
            .formatted_time_until_next_regen(self.clock.now_ms())
    }

    /// Drain events emitted since the last drain (regen gains, consumptions,
    /// denials, upgrades).
    pub fn drain_events(&mut self) -> Vec<StaminaEvent> {
        self.events.drain().collect()
    }

    // =========================================================================
    // TEARDOWN
    // =========================================================================

    /// End the session (logout): clear the persisted stamina keys and drop
    /// the engine. The host stops its tick schedule; a later `begin` starts a
    /// fresh player.
    pub fn end(mut self) -> S {
        for key in [KEY_CURRENT_STAMINA, KEY_MAX_STAMINA, KEY_LAST_REGEN] {
            if let Err(err) = self.store.remove(key) {
                log::warn!("Failed to clear {}: {}", key, err);
            }
        }
        self.store
    }
}
