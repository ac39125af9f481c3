//! Lottery wheels (draw locations).
//!
//! The enumeration order of [`Wheel::ALL`] is the canonical order: ranking
//! ties and report rows fall back to it.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::RuotaError;

/// Number of slots drawn on each wheel per draw.
pub const SLOTS_PER_DRAW: usize = 5;

pub const WHEEL_COUNT: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Wheel {
    Bari,
    Cagliari,
    Firenze,
    Genova,
    Milano,
    Napoli,
    Palermo,
    Roma,
    Torino,
    Venezia,
    Nazionale,
}

impl Wheel {
    pub const ALL: [Wheel; WHEEL_COUNT] = [
        Wheel::Bari,
        Wheel::Cagliari,
        Wheel::Firenze,
        Wheel::Genova,
        Wheel::Milano,
        Wheel::Napoli,
        Wheel::Palermo,
        Wheel::Roma,
        Wheel::Torino,
        Wheel::Venezia,
        Wheel::Nazionale,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Wheel::Bari => "Bari",
            Wheel::Cagliari => "Cagliari",
            Wheel::Firenze => "Firenze",
            Wheel::Genova => "Genova",
            Wheel::Milano => "Milano",
            Wheel::Napoli => "Napoli",
            Wheel::Palermo => "Palermo",
            Wheel::Roma => "Roma",
            Wheel::Torino => "Torino",
            Wheel::Venezia => "Venezia",
            Wheel::Nazionale => "Nazionale",
        }
    }

    /// Position of this wheel in [`Wheel::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Wheel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Wheel {
    type Err = RuotaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Wheel::ALL
            .iter()
            .copied()
            .find(|w| w.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RuotaError::UnknownWheel(trimmed.to_string()))
    }
}
