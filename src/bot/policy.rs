//! Follow-up action selection

use crate::action::ActionCode;

use super::random::Randomness;

/// Probability of firing when there is enough ammo for either shot
pub const FIRE_CHANCE: f64 = 0.5;

const FIRES: [ActionCode; 2] = [ActionCode::FireBasic, ActionCode::FirePower];
const SHIELDS: [ActionCode; 2] = [ActionCode::ShieldBasic, ActionCode::ShieldPower];

/// Choose the action to enqueue given the ammo after the current turn.
///
/// The chance is drawn every turn, even when the ammo check alone decides
/// the outcome, so a seeded run always consumes the same number of draws.
pub fn decide<R: Randomness + ?Sized>(ammo: i32, rng: &mut R) -> ActionCode {
    let chance = rng.chance();
    let action = if ammo >= 2 && chance < FIRE_CHANCE {
        rng.pick(FIRES)
    } else if ammo == 0 {
        ActionCode::Load
    } else {
        rng.pick(SHIELDS)
    };
    log::trace!("ammo={} chance={:.4} -> {}", ammo, chance, action);
    action
}
