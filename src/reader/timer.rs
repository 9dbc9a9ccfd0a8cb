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

//! Cancellable timed wait for the playback loop.
//!
//! The reader never sleeps. It arms a deadline and the event pump polls for
//! input until that deadline, so keys pressed while a word is on screen are
//! handled before the next word is shown.

use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub(crate) struct WordTimer {
    deadline: Option<Instant>,
}

impl WordTimer {
    pub(crate) fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub(crate) fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Time left until the deadline, zero once it has passed.
    pub(crate) fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Disarms the timer and returns `true` if the deadline has passed.
    pub(crate) fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_deadline() {
        let start = Instant::now();
        let mut timer = WordTimer::default();
        timer.arm(start, Duration::from_millis(240));

        assert!(!timer.fire(start + Duration::from_millis(100)));
        assert_eq!(
            timer.remaining(start + Duration::from_millis(100)),
            Some(Duration::from_millis(140))
        );
        assert!(timer.fire(start + Duration::from_millis(240)));
        assert!(!timer.fire(start + Duration::from_millis(500)));
        assert_eq!(timer.remaining(start), None);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut timer = WordTimer::default();
        timer.arm(start, Duration::from_millis(10));
        timer.cancel();
        assert!(!timer.fire(start + Duration::from_secs(1)));
    }
}
