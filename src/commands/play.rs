//! Play a duel over stdout
//!
//! Stdout carries the protocol and nothing else; all diagnostics go to the log.

use eyre::{Context, Result};
use log::info;
use std::io;

use crate::bot::{ActionEmitter, Randomness, RngSource};
use crate::config::Config;

pub fn run(seed: Option<u64>, turns: Option<u64>, config: &Config) -> Result<()> {
    let seed = seed.or(config.bot.seed);
    let max_turns = turns.or(config.bot.max_turns);

    match seed {
        Some(seed) => {
            info!("Playing with seed {}", seed);
            play(RngSource::seeded(seed), max_turns)
        }
        None => {
            info!("Playing with entropy seed");
            play(RngSource::from_entropy(), max_turns)
        }
    }
}

fn play<R: Randomness>(rng: R, max_turns: Option<u64>) -> Result<()> {
    let stdout = io::stdout().lock();
    let mut emitter = ActionEmitter::new(stdout, rng);

    emitter.start().context("Failed to send startup actions")?;

    match max_turns {
        Some(limit) => {
            info!("Turn limit: {}", limit);
            emitter.run_until(|played| played >= limit)?;
        }
        None => emitter.run_until(|_| false)?,
    }

    info!("Duel over after {} turns, ammo={}", emitter.turns(), emitter.state().ammo());
    Ok(())
}
