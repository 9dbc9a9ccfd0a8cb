// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Reading rate and per-word delays.

use std::{fmt, time::Duration};

use thiserror::Error;

/// Marks that make the reader linger on a word.
pub(crate) const PUNCTUATION_MARKS: [char; 4] = [',', '.', '-', ':'];

/// How much longer a punctuated word stays on screen.
pub(crate) const PUNCTUATION_FACTOR: u32 = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum RateError {
    #[error("{0}wpm is outside {min}..={max}wpm", min = Wpm::MIN, max = Wpm::MAX)]
    OutOfRange(u32),

    #[error("{0}wpm is not a multiple of {step}", step = Wpm::STEP)]
    NotAStep(u32),

    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Words per minute, always in `MIN..=MAX` and a multiple of `STEP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Wpm(u32);

impl Wpm {
    pub(crate) const MIN: u32 = 50;
    pub(crate) const MAX: u32 = 1000;
    pub(crate) const STEP: u32 = 50;

    pub(crate) fn new(wpm: u32) -> Result<Self, RateError> {
        if !(Self::MIN..=Self::MAX).contains(&wpm) {
            return Err(RateError::OutOfRange(wpm));
        }
        if wpm % Self::STEP != 0 {
            return Err(RateError::NotAStep(wpm));
        }

        Ok(Self(wpm))
    }

    /// Snaps any value onto the nearest valid rate.
    pub(crate) fn saturating(wpm: u32) -> Self {
        let clamped = wpm.clamp(Self::MIN, Self::MAX);
        let snapped = (clamped + Self::STEP / 2) / Self::STEP * Self::STEP;
        Self(snapped.clamp(Self::MIN, Self::MAX))
    }

    pub(crate) fn get(self) -> u32 {
        self.0
    }

    /// One step faster, `None` at the ceiling.
    pub(crate) fn faster(self) -> Option<Self> {
        Self::new(self.0 + Self::STEP).ok()
    }

    /// One step slower, `None` at the floor.
    pub(crate) fn slower(self) -> Option<Self> {
        self.0.checked_sub(Self::STEP).and_then(|wpm| Self::new(wpm).ok())
    }

    /// Time a plain word stays on screen: `60 / wpm` seconds.
    pub(crate) fn base_delay(self) -> Duration {
        Duration::from_secs(60) / self.0
    }

    /// Time `word` stays on screen.
    pub(crate) fn delay_for(self, word: &str) -> Duration {
        if is_punctuated(word) {
            self.base_delay() * PUNCTUATION_FACTOR
        } else {
            self.base_delay()
        }
    }
}

impl Default for Wpm {
    fn default() -> Self {
        Self(250)
    }
}

impl fmt::Display for Wpm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}wpm", self.0)
    }
}

impl std::str::FromStr for Wpm {
    type Err = RateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().trim_end_matches("wpm").trim();
        let wpm = value
            .parse::<u32>()
            .map_err(|_| RateError::NotANumber(s.trim().to_string()))?;
        Self::new(wpm)
    }
}

/// Whether the last character of `word` is a punctuation mark.
pub(crate) fn is_punctuated(word: &str) -> bool {
    word.chars()
        .next_back()
        .is_some_and(|c| PUNCTUATION_MARKS.contains(&c))
}
