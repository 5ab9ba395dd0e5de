//! Queue and ammo bookkeeping

use eyre::{Result, bail};
use std::collections::VecDeque;

use crate::action::ActionCode;

/// Mutable bot state, owned by the emitter for the life of the process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotState {
    queue: VecDeque<ActionCode>,
    ammo: i32,
}

impl Default for BotState {
    fn default() -> Self {
        Self::new()
    }
}

impl BotState {
    /// Fresh state: no ammo, queue primed with `[LOAD, FIRE_B]`
    pub fn new() -> Self {
        Self {
            queue: VecDeque::from([ActionCode::Load, ActionCode::FireBasic]),
            ammo: 0,
        }
    }

    pub fn ammo(&self) -> i32 {
        self.ammo
    }

    pub fn pending(&self) -> impl Iterator<Item = ActionCode> + '_ {
        self.queue.iter().copied()
    }

    #[cfg(test)]
    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }

    /// Remove the head of the queue
    pub fn dequeue(&mut self) -> Result<ActionCode> {
        match self.queue.pop_front() {
            Some(action) => Ok(action),
            None => bail!("Pending action queue is empty"),
        }
    }

    pub fn enqueue(&mut self, action: ActionCode) {
        self.queue.push_back(action);
    }

    /// Account for an emitted action. Ammo is not clamped and may go negative.
    pub fn apply(&mut self, action: ActionCode) {
        self.ammo += action.ammo_delta();
    }
}
