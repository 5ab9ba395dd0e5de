//! Action code table

use colored::*;
use eyre::Result;
use serde::Serialize;

use crate::action::ActionCode;
use crate::cli::OutputFormat;

#[derive(Debug, Serialize)]
struct CodeInfo {
    name: &'static str,
    byte: u8,
    hex: String,
    kind: &'static str,
    ammo_delta: i32,
    description: &'static str,
}

impl From<ActionCode> for CodeInfo {
    fn from(code: ActionCode) -> Self {
        let kind = if code.is_fire() {
            "fire"
        } else if code.is_shield() {
            "shield"
        } else if code == ActionCode::Load {
            "load"
        } else {
            "signal"
        };

        Self {
            name: code.name(),
            byte: code.byte(),
            hex: format!("0x{:02x}", code.byte()),
            kind,
            ammo_delta: code.ammo_delta(),
            description: code.description(),
        }
    }
}

fn table() -> Vec<CodeInfo> {
    ActionCode::ALL.into_iter().map(CodeInfo::from).collect()
}

pub fn run(format: OutputFormat) -> Result<()> {
    let codes = table();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&codes)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&codes)?);
        }
        OutputFormat::Text => {
            println!("{}", "Action codes".bold());
            println!();
            for code in &codes {
                let delta = match code.ammo_delta {
                    0 => "  ".normal(),
                    d if d > 0 => format!("+{}", d).green(),
                    d => format!("{}", d).red(),
                };
                println!(
                    "  {} {:<8} {} {}",
                    code.hex.cyan(),
                    code.name.bold(),
                    delta,
                    code.description.dimmed()
                );
            }
        }
    }

    Ok(())
}
