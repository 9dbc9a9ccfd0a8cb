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

//! The playback state machine.
//!
//! A [`PlaybackEngine`] is either paused or playing. While playing it shows
//! one word per deadline and moves on when the deadline passes. Pause and
//! cancel requests made in between are picked up at the next word boundary,
//! so the index it stops on is always the next word the reader has not seen.

use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::{
    canvas::{Canvas, DisplaySurface, Font},
    reader::{
        focus::{self, WordStyle},
        keys::{KeyMap, ReaderCommand, ReaderKey},
        pacing::Wpm,
        timer::WordTimer,
    },
    ui::ScreenMode,
};

/// Rows of guide marks drawn above and below the focus letter.
const GUIDE_ROWS: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlaybackState {
    Paused,
    Playing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Interrupt {
    Pause,
    Cancel,
}

/// Colours used by the reader.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReaderStyle {
    pub(crate) word: WordStyle,
    pub(crate) guide: Color,
    pub(crate) overlay: Color,
}

pub(crate) struct PlaybackEngine<S> {
    words: Vec<String>,
    index: usize,
    wpm: Wpm,
    state: PlaybackState,
    pending: Option<Interrupt>,
    timer: WordTimer,
    keys: KeyMap,
    surface: S,
    style: ReaderStyle,
    saved_mode: ScreenMode,
}

impl<S: DisplaySurface> PlaybackEngine<S> {
    /// Creates a paused engine showing the word at `start`.
    ///
    /// `start` is clamped onto the book. `saved_mode` is the screen mode to
    /// restore when the reader closes.
    pub(crate) fn new(
        words: Vec<String>,
        start: usize,
        wpm: Wpm,
        surface: S,
        style: ReaderStyle,
        saved_mode: ScreenMode,
    ) -> Self {
        let index = start.min(words.len().saturating_sub(1));

        let mut engine = Self {
            words,
            index,
            wpm,
            state: PlaybackState::Paused,
            pending: None,
            timer: WordTimer::default(),
            keys: KeyMap::default(),
            surface,
            style,
            saved_mode,
        };
        engine.pause();
        engine
    }

    /// Starts playing from the current word.
    ///
    /// Returns `false` when already playing or when there is nothing to read.
    pub(crate) fn start(&mut self, now: Instant) -> bool {
        if self.state == PlaybackState::Playing || self.words.is_empty() {
            return false;
        }

        tracing::debug!(index = self.index, wpm = self.wpm.get(), "playback started");

        self.state = PlaybackState::Playing;
        self.pending = None;

        self.keys.bind(ReaderKey::Select, ReaderCommand::Pause);
        for key in [ReaderKey::Left, ReaderKey::Right, ReaderKey::Up, ReaderKey::Down] {
            self.keys.unbind(key);
        }

        self.show_word(now);
        true
    }

    /// Asks a playing engine to pause at the next word boundary.
    pub(crate) fn request_pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.pending = Some(Interrupt::Pause);
        }
    }

    /// Stops playing immediately and shows the current word with the rate.
    pub(crate) fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            tracing::debug!(index = self.index, "playback paused");
        }

        self.state = PlaybackState::Paused;
        self.pending = None;
        self.timer.cancel();

        self.keys.bind(ReaderKey::Select, ReaderCommand::Start);
        self.keys.bind(ReaderKey::Left, ReaderCommand::Rewind);
        self.keys.bind(ReaderKey::Right, ReaderCommand::Advance);
        self.keys.bind(ReaderKey::Up, ReaderCommand::Faster);
        self.keys.bind(ReaderKey::Down, ReaderCommand::Slower);

        self.render(true);
    }

    /// Moves one word forward, paused only. Stops at the last word.
    pub(crate) fn advance(&mut self) -> bool {
        if self.state == PlaybackState::Playing || self.index + 1 >= self.words.len() {
            return false;
        }

        self.index += 1;
        self.render(true);
        true
    }

    /// Moves one word back, paused only. Stops at the first word.
    pub(crate) fn rewind(&mut self) -> bool {
        if self.state == PlaybackState::Playing || self.index == 0 {
            return false;
        }

        self.index -= 1;
        self.render(true);
        true
    }

    pub(crate) fn increase_rate(&mut self) -> bool {
        let faster = self.wpm.faster();
        self.change_rate(faster)
    }

    pub(crate) fn decrease_rate(&mut self) -> bool {
        let slower = self.wpm.slower();
        self.change_rate(slower)
    }

    /// Replaces the rate, paused only.
    pub(crate) fn set_rate(&mut self, wpm: Wpm) -> bool {
        self.change_rate(Some(wpm))
    }

    fn change_rate(&mut self, wpm: Option<Wpm>) -> bool {
        match wpm {
            Some(wpm) if self.state == PlaybackState::Paused => {
                self.wpm = wpm;
                self.render(true);
                true
            }
            _ => false,
        }
    }

    /// Moves playback on when the current word's time is up.
    ///
    /// The last word ends playback where it is. Otherwise the index moves to
    /// the next word, which is either shown or, if a pause was requested in
    /// the meantime, becomes the word the engine pauses on.
    ///
    /// Returns whether the display changed.
    pub(crate) fn on_tick(&mut self, now: Instant) -> bool {
        if self.state != PlaybackState::Playing || !self.timer.fire(now) {
            return false;
        }

        if self.index + 1 >= self.words.len() {
            tracing::debug!(index = self.index, "end of book reached");
            self.pause();
            return true;
        }

        self.index += 1;

        if self.pending.take().is_some() {
            self.pause();
        } else {
            self.show_word(now);
        }

        true
    }

    /// Interrupts playback for good and returns the screen mode to restore.
    ///
    /// The index is left on the word being shown.
    pub(crate) fn close(&mut self) -> ScreenMode {
        tracing::debug!(index = self.index, "reader closed");

        self.pending = Some(Interrupt::Cancel);
        self.timer.cancel();
        self.state = PlaybackState::Paused;

        self.saved_mode
    }

    /// The command bound to `key` in the current state.
    pub(crate) fn command_for(&self, key: ReaderKey) -> Option<ReaderCommand> {
        if self.pending == Some(Interrupt::Cancel) {
            return None;
        }
        self.keys.command(key)
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }

    pub(crate) fn wpm(&self) -> Wpm {
        self.wpm
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> PlaybackState {
        self.state
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    fn current_word(&self) -> Option<&str> {
        self.words.get(self.index).map(String::as_str)
    }

    /// Time left before the next word boundary, `None` while paused.
    pub(crate) fn remaining(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }

    fn show_word(&mut self, now: Instant) {
        let delay = self
            .current_word()
            .map_or_else(|| self.wpm.base_delay(), |word| self.wpm.delay_for(word));

        self.render(false);
        self.timer.arm(now, delay);
    }

    fn render(&mut self, overlay: bool) {
        let (width, height) = self.surface.size();
        let anchor_x = i32::from(width) / 3;
        let y = i32::from(height) / 2;

        self.surface.clear();

        for row in (y - 1 - GUIDE_ROWS..y - 1).chain(y + 2..y + 2 + GUIDE_ROWS) {
            self.surface
                .draw_text("│", anchor_x, row, self.style.guide, Font::Regular);
        }

        if let Some(word) = self.words.get(self.index) {
            focus::draw_word(&mut self.surface, word, anchor_x, y, self.style.word);
        }

        if overlay {
            let rate = self.wpm.to_string();
            self.surface
                .draw_text(&rate, 1, 0, self.style.overlay, Font::Bold);

            let progress = if self.words.is_empty() {
                "0/0".to_string()
            } else {
                format!("{}/{}", self.index + 1, self.words.len())
            };
            let x = i32::from(width) - self.surface.measure_width(&progress, Font::Regular) - 1;
            self.surface
                .draw_text(&progress, x, 0, self.style.overlay, Font::Regular);
        }

        self.surface.present();
    }
}

impl PlaybackEngine<Canvas> {
    /// Matches the canvas to the area it is shown in, redrawing on change.
    pub(crate) fn fit(&mut self, width: u16, height: u16) {
        if self.surface.resize(width, height) {
            let overlay = !self.is_playing();
            self.render(overlay);
        }
    }
}
