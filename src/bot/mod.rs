//! The duel bot
//!
//! A pending-action queue and an ammo counter, driven by a loop that emits the
//! next queued action and enqueues a follow-up chosen by a small heuristic:
//! - `state` - queue and ammo bookkeeping
//! - `random` - injectable randomness (seedable in production, scripted in tests)
//! - `policy` - picks the follow-up action
//! - `emitter` - writes actions to the output stream

pub mod emitter;
pub mod policy;
pub mod random;
pub mod state;

pub use emitter::ActionEmitter;
pub use random::{Randomness, RngSource};
