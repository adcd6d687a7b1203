//! Stamina regeneration engine for a casual RPG client.
//!
//! A resource-accrual model with persisted timers: stamina regenerates one
//! unit per fixed interval, survives restarts by catching up elapsed cycles
//! from durable storage, and gates gameplay actions through all-or-nothing
//! consumption.
//!
//! The engine handles:
//! - Settlement (applying completed regen cycles, including across restarts)
//! - Consumption and ceiling upgrades
//! - Persistence through a pluggable key-value store
//!
//! The host application handles:
//! - Scheduling the periodic tick (and stopping it at logout)
//! - Rendering bars, bands, and countdown strings
//! - Deciding what actions cost stamina
//!
//! ```
//! use stamina_engine::{MemoryStore, Session, SystemClock};
//!
//! let mut session = Session::begin(SystemClock, MemoryStore::new());
//! if session.consume(10) {
//!     // perform the stamina-gated action
//! }
//! println!(
//!     "{}/{} (next in {})",
//!     session.stamina(),
//!     session.max_stamina(),
//!     session.formatted_time_until_next_regen()
//! );
//! ```

pub mod clock;
pub mod constants;
pub mod display;
pub mod engine;
pub mod events;
pub mod session;
pub mod skills;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use constants::{DEFAULT_MAX_STAMINA, REGEN_AMOUNT, REGEN_INTERVAL_MS};
pub use display::{band, format_countdown, StaminaBand};
pub use engine::{StaminaEngine, StaminaSnapshot};
pub use events::{EventQueue, StaminaEvent};
pub use session::Session;
pub use skills::{try_use_skill, SkillKind};
pub use store::{JsonFileStore, KvStore, MemoryStore};
