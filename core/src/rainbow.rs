//! Server-side rainbow mode parameters.
//!
//! Parameters are read and written through console-style commands and
//! persisted as the same command lines, so a saved config can be replayed.

use rosterwatch_types::{ClientConfig, NUM_DUMMIES, RainbowSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainbowParam {
    Speed,
    BothPlayers,
    Saturation,
    Lightness,
    Body,
    Feet,
}

impl RainbowParam {
    /// Console command name for this parameter.
    pub fn command(self) -> &'static str {
        match self {
            RainbowParam::Speed => "server_rainbow_speed",
            RainbowParam::BothPlayers => "server_rainbow_both_players",
            RainbowParam::Saturation => "server_rainbow_sat",
            RainbowParam::Lightness => "server_rainbow_lht",
            RainbowParam::Body => "server_rainbow_body",
            RainbowParam::Feet => "server_rainbow_feet",
        }
    }

    /// Whether the parameter is stored per character.
    pub fn per_character(self) -> bool {
        !matches!(self, RainbowParam::Speed | RainbowParam::BothPlayers)
    }
}

/// Character index targeted by an optional selector.
///
/// `0` selects the main character, any positive value the dummy, and a missing
/// or negative selector the currently active character.
pub fn resolve_character(config: &ClientConfig, selector: Option<i32>) -> usize {
    match selector {
        Some(0) => 0,
        Some(n) if n > 0 => 1,
        _ => config.active_index(),
    }
}

/// Apply a boolean-style value: 0 turns off, positive turns on, negative is ignored.
fn apply_toggle(flag: &mut bool, value: i32) {
    if value == 0 {
        *flag = false;
    } else if value > 0 {
        *flag = true;
    }
}

/// Current value of a parameter for the active character.
pub fn get(config: &ClientConfig, param: RainbowParam) -> i32 {
    let rainbow = &config.rainbow;
    let idx = config.active_index();
    match param {
        RainbowParam::Speed => rainbow.speed,
        RainbowParam::BothPlayers => i32::from(rainbow.both_players),
        RainbowParam::Saturation => rainbow.saturation[idx],
        RainbowParam::Lightness => rainbow.lightness[idx],
        RainbowParam::Body => i32::from(rainbow.body[idx]),
        RainbowParam::Feet => i32::from(rainbow.feet[idx]),
    }
}

/// Set a parameter. `selector` is ignored for global parameters.
pub fn set(config: &mut ClientConfig, param: RainbowParam, value: i32, selector: Option<i32>) {
    let idx = if param.per_character() {
        resolve_character(config, selector)
    } else {
        config.active_index()
    };
    let rainbow = &mut config.rainbow;
    match param {
        RainbowParam::Speed => rainbow.speed = value,
        RainbowParam::BothPlayers => apply_toggle(&mut rainbow.both_players, value),
        RainbowParam::Saturation => rainbow.saturation[idx] = value,
        RainbowParam::Lightness => rainbow.lightness[idx] = value,
        RainbowParam::Body => apply_toggle(&mut rainbow.body[idx], value),
        RainbowParam::Feet => apply_toggle(&mut rainbow.feet[idx], value),
    }
    if param.per_character() {
        tracing::debug!(command = param.command(), value, character = idx, "Rainbow parameter set");
    } else {
        tracing::debug!(command = param.command(), value, "Rainbow parameter set");
    }
}

/// Serialize settings as replayable command lines.
pub fn config_lines(rainbow: &RainbowSettings) -> Vec<String> {
    let mut lines = vec![
        format!("{} {}", RainbowParam::Speed.command(), rainbow.speed),
        format!(
            "{} {}",
            RainbowParam::BothPlayers.command(),
            i32::from(rainbow.both_players)
        ),
    ];
    for dummy in 0..NUM_DUMMIES {
        lines.push(format!(
            "{} {} {}",
            RainbowParam::Saturation.command(),
            rainbow.saturation[dummy],
            dummy
        ));
        lines.push(format!(
            "{} {} {}",
            RainbowParam::Lightness.command(),
            rainbow.lightness[dummy],
            dummy
        ));
        lines.push(format!(
            "{} {} {}",
            RainbowParam::Body.command(),
            i32::from(rainbow.body[dummy]),
            dummy
        ));
        lines.push(format!(
            "{} {} {}",
            RainbowParam::Feet.command(),
            i32::from(rainbow.feet[dummy]),
            dummy
        ));
    }
    lines
}
