//! One-byte action codes
//!
//! Every move in a duel is a single byte on the bot's stdout. READY is sent
//! once to signal liveness; the rest are combat moves.

use eyre::{Result, eyre};
use std::fmt;

/// Action codes understood by the duel referee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCode {
    Ready,
    Load,
    FireBasic,
    FirePower,
    ShieldBasic,
    ShieldPower,
}

impl ActionCode {
    pub const ALL: [ActionCode; 6] = [
        ActionCode::Ready,
        ActionCode::Load,
        ActionCode::FireBasic,
        ActionCode::FirePower,
        ActionCode::ShieldBasic,
        ActionCode::ShieldPower,
    ];

    /// Wire value
    pub fn byte(self) -> u8 {
        match self {
            ActionCode::Ready => 0x72,
            ActionCode::Load => 0x30,
            ActionCode::FireBasic => 0x31,
            ActionCode::FirePower => 0x32,
            ActionCode::ShieldBasic => 0x33,
            ActionCode::ShieldPower => 0x34,
        }
    }

    /// Change to the ammo counter when this action is processed
    pub fn ammo_delta(self) -> i32 {
        match self {
            ActionCode::Load => 1,
            ActionCode::FireBasic => -1,
            ActionCode::FirePower => -2,
            ActionCode::Ready | ActionCode::ShieldBasic | ActionCode::ShieldPower => 0,
        }
    }

    pub fn is_fire(self) -> bool {
        matches!(self, ActionCode::FireBasic | ActionCode::FirePower)
    }

    pub fn is_shield(self) -> bool {
        matches!(self, ActionCode::ShieldBasic | ActionCode::ShieldPower)
    }

    pub fn name(self) -> &'static str {
        match self {
            ActionCode::Ready => "READY",
            ActionCode::Load => "LOAD",
            ActionCode::FireBasic => "FIRE_B",
            ActionCode::FirePower => "FIRE_P",
            ActionCode::ShieldBasic => "SHIELD_B",
            ActionCode::ShieldPower => "SHIELD_P",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ActionCode::Ready => "Sent once, first, to signal liveness",
            ActionCode::Load => "Load 1 ammo into the gun",
            ActionCode::FireBasic => "Fire a bullet (uses 1 ammo; the gun explodes with none loaded)",
            ActionCode::FirePower => "Fire a plasma burst (uses 2 ammo; the gun explodes with fewer than 2)",
            ActionCode::ShieldBasic => "Raise a metal shield (blocks bullets, not plasma)",
            ActionCode::ShieldPower => "Raise a thermal shield (blocks plasma, not bullets)",
        }
    }

    /// Decode a combat move. READY is only valid as a bot's first byte, so it
    /// is rejected here.
    #[allow(dead_code)] // referee-side decoding; the bot only encodes
    pub fn try_from_move(byte: u8) -> Result<Self> {
        match ActionCode::try_from(byte)? {
            ActionCode::Ready => Err(eyre!("READY (0x{:02x}) is not a move", byte)),
            code => Ok(code),
        }
    }
}

/// Decodes any wire byte, READY included. Use `try_from_move` for bytes after
/// the preamble.
impl TryFrom<u8> for ActionCode {
    type Error = eyre::Report;

    fn try_from(byte: u8) -> Result<Self> {
        ActionCode::ALL
            .into_iter()
            .find(|code| code.byte() == byte)
            .ok_or_else(|| eyre!("Invalid action byte: 0x{:02x}", byte))
    }
}

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
