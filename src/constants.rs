//! Engine constants organized by category.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

// =============================================================================
// REGENERATION
// =============================================================================

/// One regen cycle: how long it takes to accrue `REGEN_AMOUNT` stamina (ms)
pub const REGEN_INTERVAL_MS: u64 = 10 * 60 * 1000;
/// Stamina gained per completed regen cycle
pub const REGEN_AMOUNT: u32 = 1;
/// Starting (and default maximum) stamina for a fresh player
pub const DEFAULT_MAX_STAMINA: u32 = 260;
/// Suggested host tick period for keeping displayed countdowns fresh (ms).
/// Purely a display refresh rate - settlement is idempotent and catches up
/// regardless of how often the host actually ticks.
pub const TICK_PERIOD_MS: u64 = 1_000;

// =============================================================================
// PERSISTED KEYS
// =============================================================================

/// Key-value store key for the current stamina value
pub const KEY_CURRENT_STAMINA: &str = "currentStamina";
/// Key-value store key for the stamina ceiling
pub const KEY_MAX_STAMINA: &str = "maxStamina";
/// Key-value store key for the last settled regen timestamp (epoch ms)
pub const KEY_LAST_REGEN: &str = "lastStaminaRegen";

// =============================================================================
// DISPLAY BANDS
// =============================================================================

/// Below this fraction of max, stamina displays as "low"
pub const LOW_STAMINA_RATIO: f32 = 0.2;
/// Below this fraction of max (but not low), stamina displays as "medium"
pub const MEDIUM_STAMINA_RATIO: f32 = 0.5;
