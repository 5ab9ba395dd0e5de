//! Writes the bot's actions to the output stream

use eyre::{Context, Result};
use std::io::Write;

use crate::action::ActionCode;

use super::policy;
use super::random::Randomness;
use super::state::BotState;

/// Drives the bot: emits queued actions one byte at a time and queues follow-ups
pub struct ActionEmitter<W: Write, R: Randomness> {
    out: W,
    rng: R,
    state: BotState,
    turns: u64,
}

impl<W: Write, R: Randomness> ActionEmitter<W, R> {
    pub fn new(out: W, rng: R) -> Self {
        Self {
            out,
            rng,
            state: BotState::new(),
            turns: 0,
        }
    }

    pub fn state(&self) -> &BotState {
        &self.state
    }

    /// Number of queued actions emitted so far (startup bytes not included)
    pub fn turns(&self) -> u64 {
        self.turns
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Send READY, then an initial LOAD that is counted outside the queue.
    ///
    /// The queue still starts with its own LOAD, so ammo is 2 once that entry
    /// is processed.
    pub fn start(&mut self) -> Result<()> {
        self.write(ActionCode::Ready)?;
        self.write(ActionCode::Load)?;
        self.state.apply(ActionCode::Load);
        log::info!("Bot ready, ammo={}", self.state.ammo());
        Ok(())
    }

    /// Emit the next queued action and enqueue its follow-up
    pub fn step(&mut self) -> Result<ActionCode> {
        let action = self.state.dequeue()?;
        self.write(action)?;
        self.state.apply(action);
        self.turns += 1;
        log::debug!("turn {}: {} (ammo={})", self.turns, action, self.state.ammo());

        let next = policy::decide(self.state.ammo(), &mut self.rng);
        self.state.enqueue(next);
        log::trace!("pending: {:?}", self.state.pending().collect::<Vec<_>>());
        Ok(action)
    }

    /// Play turns until `should_stop` returns true. It is checked before every
    /// turn with the number of turns already played.
    pub fn run_until<F>(&mut self, mut should_stop: F) -> Result<()>
    where
        F: FnMut(u64) -> bool,
    {
        while !should_stop(self.turns) {
            self.step()?;
        }
        Ok(())
    }

    fn write(&mut self, action: ActionCode) -> Result<()> {
        self.out
            .write_all(&[action.byte()])
            .and_then(|_| self.out.flush())
            .context(format!("Failed to write action {}", action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::random::{RngSource, Scripted};
    use std::io;

    use crate::action::ActionCode::*;

    /// Decode a bot's output the way a referee reads it: READY first, then moves
    fn decode(bytes: &[u8]) -> Vec<ActionCode> {
        let mut actions = vec![ActionCode::try_from(bytes[0]).unwrap()];
        actions.extend(bytes[1..].iter().map(|b| ActionCode::try_from_move(*b).unwrap()));
        actions
    }

    fn play<R: Randomness>(rng: R, turns: u64) -> (Vec<ActionCode>, BotState) {
        let mut emitter = ActionEmitter::new(Vec::new(), rng);
        emitter.start().unwrap();
        emitter.run_until(|t| t >= turns).unwrap();
        let state = emitter.state().clone();
        (decode(&emitter.into_inner()), state)
    }

    /// Writer that counts flushes and can be told to fail
    struct Probe {
        bytes: Vec<u8>,
        flushes: usize,
        fail_after: Option<usize>,
    }

    impl Write for Probe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.fail_after.is_some_and(|n| self.bytes.len() >= n) {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
            }
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_start_sends_ready_then_load() {
        let mut emitter = ActionEmitter::new(Vec::new(), Scripted::constant(0.9, 0));
        emitter.start().unwrap();
        assert_eq!(emitter.state().ammo(), 1);
        assert_eq!(emitter.turns(), 0);
        assert_eq!(emitter.into_inner(), vec![0x72, 0x30]);
    }

    #[test]
    fn test_high_chance_sequence() {
        let (actions, state) = play(Scripted::constant(0.9, 0), 6);
        assert_eq!(
            actions,
            vec![Ready, Load, Load, FireBasic, ShieldBasic, ShieldBasic, ShieldBasic, ShieldBasic]
        );
        assert_eq!(state.ammo(), 1);
    }

    #[test]
    fn test_low_chance_sequence_goes_negative() {
        // Queue LOAD brings ammo to 2 and a power shot gets queued behind FIRE_B
        let (actions, state) = play(Scripted::constant(0.1, 1), 4);
        assert_eq!(actions, vec![Ready, Load, Load, FireBasic, FirePower, ShieldPower]);
        assert_eq!(state.ammo(), -1);
    }

    #[test]
    fn test_reload_after_emptying() {
        // chance draws: after LOAD (ammo 2) fire, after FIRE_B (ammo 1) shield,
        // after FIRE_B (ammo 0) load
        let rng = Scripted::new(vec![0.1, 0.9, 0.9, 0.9], vec![0, 0]);
        let (actions, state) = play(rng, 5);
        assert_eq!(
            actions,
            vec![Ready, Load, Load, FireBasic, FireBasic, ShieldBasic, Load]
        );
        assert_eq!(state.ammo(), 1);
    }

    #[test]
    fn test_queue_holds_two_between_turns() {
        let mut emitter = ActionEmitter::new(Vec::new(), RngSource::seeded(3));
        emitter.start().unwrap();
        for _ in 0..100 {
            emitter.step().unwrap();
            assert_eq!(emitter.state().pending_len(), 2);
        }
    }

    #[test]
    fn test_ammo_matches_emitted_actions() {
        for seed in 0..20 {
            let (actions, state) = play(RngSource::seeded(seed), 500);
            assert_eq!(&actions[..2], &[Ready, Load]);
            let ammo: i32 = actions.iter().map(|a| a.ammo_delta()).sum();
            assert_eq!(ammo, state.ammo(), "seed {}", seed);
        }
    }

    #[test]
    fn test_zero_ammo_always_followed_by_load() {
        let mut emitter = ActionEmitter::new(Vec::new(), RngSource::seeded(11));
        emitter.start().unwrap();
        for _ in 0..2_000 {
            emitter.step().unwrap();
            if emitter.state().ammo() == 0 {
                let queued: Vec<_> = emitter.state().pending().collect();
                assert_eq!(queued.last(), Some(&Load));
            }
        }
    }

    #[test]
    fn test_same_seed_same_bytes() {
        let (a, _) = play(RngSource::seeded(77), 200);
        let (b, _) = play(RngSource::seeded(77), 200);
        assert_eq!(a, b);
    }

    #[test]
    fn test_flushes_every_byte() {
        let probe = Probe {
            bytes: Vec::new(),
            flushes: 0,
            fail_after: None,
        };
        let mut emitter = ActionEmitter::new(probe, RngSource::seeded(5));
        emitter.start().unwrap();
        emitter.run_until(|t| t >= 10).unwrap();
        let probe = emitter.into_inner();
        assert_eq!(probe.bytes.len(), 12);
        assert_eq!(probe.flushes, 12);
    }

    #[test]
    fn test_write_failure_propagates() {
        let probe = Probe {
            bytes: Vec::new(),
            flushes: 0,
            fail_after: Some(3),
        };
        let mut emitter = ActionEmitter::new(probe, RngSource::seeded(5));
        emitter.start().unwrap();
        emitter.step().unwrap();
        let err = emitter.run_until(|_| false).unwrap_err();
        assert!(err.to_string().contains("Failed to write action"));
        assert_eq!(emitter.turns(), 1);
    }
}
