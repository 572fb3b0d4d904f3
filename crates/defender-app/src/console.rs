//! Text commands for the interactive console.

use thiserror::Error;

use defender_core::commands::PlayerCommand;
use defender_core::enums::{AbilityKind, TurretClass, UpgradeKind};

/// One parsed console line.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Player(PlayerCommand),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{command}' needs a {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{value}' is not a valid {expected}")]
    BadArgument { value: String, expected: &'static str },
}

pub const HELP: &str = "\
start             start the next wave
pause | resume    pause or resume (p toggles)
speed             cycle 1x/2x/3x
buy <upgrade>     damage, firerate, range, multishot
charge <ability>  buy a charge: pierce, frost, fury, pulse, nuke
use <ability>     activate an ability
close             close the upgrade panel
restart [class]   standard, gatling, railgun
music | sfx       toggle audio
quit";

pub fn parse_command(line: &str) -> Result<ConsoleCommand, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(ParseError::Empty);
    };
    let head = head.to_ascii_lowercase();
    let arg = words.next().map(str::to_ascii_lowercase);

    let command = match head.as_str() {
        "start" | "s" => PlayerCommand::StartWave,
        "pause" => PlayerCommand::Pause,
        "resume" => PlayerCommand::Resume,
        "p" => PlayerCommand::TogglePause,
        "speed" => PlayerCommand::CycleSpeed,
        "close" => PlayerCommand::CloseUpgradePanel,
        "music" => PlayerCommand::ToggleMusic,
        "sfx" => PlayerCommand::ToggleSfx,
        "buy" => PlayerCommand::PurchaseUpgrade {
            upgrade: required(arg, "buy", "upgrade", parse_upgrade)?,
        },
        "charge" => PlayerCommand::PurchaseAbility {
            ability: required(arg, "charge", "ability", parse_ability)?,
        },
        "use" | "ability" => PlayerCommand::ActivateAbility {
            ability: required(arg, "use", "ability", parse_ability)?,
        },
        "restart" => PlayerCommand::RestartRun {
            class: match arg {
                None => TurretClass::Standard,
                Some(value) => parse_class(&value).ok_or(ParseError::BadArgument {
                    value,
                    expected: "class",
                })?,
            },
        },
        "help" | "?" => return Ok(ConsoleCommand::Help),
        "quit" | "exit" | "q" => return Ok(ConsoleCommand::Quit),
        _ => return Err(ParseError::Unknown(head)),
    };
    Ok(ConsoleCommand::Player(command))
}

fn required<T>(
    arg: Option<String>,
    command: &'static str,
    expected: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, ParseError> {
    let value = arg.ok_or(ParseError::MissingArgument { command, expected })?;
    parse(&value).ok_or(ParseError::BadArgument { value, expected })
}

pub fn parse_upgrade(word: &str) -> Option<UpgradeKind> {
    match word {
        "damage" | "dmg" => Some(UpgradeKind::Damage),
        "firerate" | "fire_rate" | "rate" => Some(UpgradeKind::FireRate),
        "range" => Some(UpgradeKind::Range),
        "multishot" | "multi" => Some(UpgradeKind::Multishot),
        _ => None,
    }
}

pub fn parse_ability(word: &str) -> Option<AbilityKind> {
    match word {
        "pierce" => Some(AbilityKind::Pierce),
        "frost" => Some(AbilityKind::Frost),
        "fury" | "crit" => Some(AbilityKind::Fury),
        "pulse" => Some(AbilityKind::Pulse),
        "nuke" => Some(AbilityKind::Nuke),
        _ => None,
    }
}

pub fn parse_class(word: &str) -> Option<TurretClass> {
    match word.to_ascii_lowercase().as_str() {
        "standard" => Some(TurretClass::Standard),
        "gatling" => Some(TurretClass::Gatling),
        "railgun" => Some(TurretClass::Railgun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(line: &str) -> PlayerCommand {
        match parse_command(line) {
            Ok(ConsoleCommand::Player(cmd)) => cmd,
            other => panic!("expected a player command for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(player("start"), PlayerCommand::StartWave);
        assert_eq!(player("  P "), PlayerCommand::TogglePause);
        assert_eq!(player("speed"), PlayerCommand::CycleSpeed);
        assert_eq!(player("sfx"), PlayerCommand::ToggleSfx);
        assert_eq!(parse_command("quit"), Ok(ConsoleCommand::Quit));
        assert_eq!(parse_command("help"), Ok(ConsoleCommand::Help));
    }

    #[test]
    fn test_commands_with_arguments() {
        assert_eq!(
            player("buy Fire_Rate"),
            PlayerCommand::PurchaseUpgrade { upgrade: UpgradeKind::FireRate }
        );
        assert_eq!(
            player("charge nuke"),
            PlayerCommand::PurchaseAbility { ability: AbilityKind::Nuke }
        );
        assert_eq!(
            player("use crit"),
            PlayerCommand::ActivateAbility { ability: AbilityKind::Fury }
        );
        assert_eq!(
            player("restart railgun"),
            PlayerCommand::RestartRun { class: TurretClass::Railgun }
        );
        assert_eq!(
            player("restart"),
            PlayerCommand::RestartRun { class: TurretClass::Standard }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_command("   "), Err(ParseError::Empty));
        assert_eq!(
            parse_command("launch"),
            Err(ParseError::Unknown("launch".into()))
        );
        assert_eq!(
            parse_command("buy"),
            Err(ParseError::MissingArgument {
                command: "buy",
                expected: "upgrade",
            })
        );
        assert_eq!(
            parse_command("use laser"),
            Err(ParseError::BadArgument {
                value: "laser".into(),
                expected: "ability",
            })
        );
    }
}
