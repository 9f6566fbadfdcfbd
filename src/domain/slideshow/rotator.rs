// SPDX-License-Identifier: MPL-2.0
//! Timed slide rotation state machine.
//!
//! The rotator never touches a clock. It declares which timers it wants
//! running through [`Rotator::armed_timers`], and hosts feed timer expiries
//! back in as messages carrying the [`TimerToken`] they were armed with.
//! Expiries whose token is no longer armed are ignored, so a host may cancel
//! timers lazily without risking a stale callback mutating state.
//!
//! ```text
//!            IntervalElapsed              TransitionElapsed
//!   Idle ─────────────────────▶ Transitioning ─────────────────▶ Idle (index + 1)
//! ```

use std::time::Duration;

use super::newtypes::{RotationInterval, TimerToken, TRANSITION_DURATION};
use super::slide::{Slide, SlideSet};

/// Rotation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// One slide is fully shown.
    Idle,
    /// The next slide is being crossfaded in; `completion` ends the window.
    Transitioning { completion: TimerToken },
}

/// Inputs accepted by [`Rotator::handle`].
#[derive(Debug, Clone)]
pub enum Message {
    /// The recurring interval timer fired.
    IntervalElapsed(TimerToken),
    /// The one-shot transition timer fired.
    TransitionElapsed(TimerToken),
    /// Pointer entered the slideshow (or any other pause signal).
    Pause,
    /// Pointer left the slideshow.
    Resume,
    /// The slide list or interval changed; behaves like a fresh mount.
    Reconfigure {
        slides: SlideSet,
        interval: RotationInterval,
    },
    /// The host is going away.
    Teardown,
}

/// Observable outcome of handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    TransitionStarted { from: usize, to: usize },
    Advanced { index: usize },
    Paused,
    Resumed,
    Reset,
    TornDown,
}

/// Timers the rotator currently wants running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArmedTimers {
    /// Recurring timer; fires every period starting one period after arming.
    pub interval: Option<(TimerToken, Duration)>,
    /// One-shot timer ending the current transition window.
    pub transition: Option<(TimerToken, Duration)>,
}

impl ArmedTimers {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interval.is_none() && self.transition.is_none()
    }

    /// Whether `token` is still armed.
    #[must_use]
    pub fn contains(&self, token: TimerToken) -> bool {
        self.interval.is_some_and(|(t, _)| t == token)
            || self.transition.is_some_and(|(t, _)| t == token)
    }
}

/// Auto-advancing slide rotator.
#[derive(Debug, Clone)]
pub struct Rotator {
    slides: SlideSet,
    interval: RotationInterval,
    current: usize,
    phase: Phase,
    paused: bool,
    interval_timer: Option<TimerToken>,
    next_token: TimerToken,
    torn_down: bool,
}

impl Rotator {
    /// Mounts a rotator on the first slide, arming the interval timer when
    /// there is more than one slide.
    #[must_use]
    pub fn mount(slides: SlideSet, interval: RotationInterval) -> Self {
        let mut rotator = Self {
            slides,
            interval,
            current: 0,
            phase: Phase::Idle,
            paused: false,
            interval_timer: None,
            next_token: TimerToken::first(),
            torn_down: false,
        };
        rotator.rearm_interval();
        rotator
    }

    /// Applies one message and reports what changed.
    pub fn handle(&mut self, message: Message) -> Effect {
        if self.torn_down {
            return Effect::None;
        }

        match message {
            Message::IntervalElapsed(token) => {
                if self.interval_timer != Some(token) || !self.slides.rotates() {
                    return Effect::None;
                }
                if let Phase::Transitioning { .. } = self.phase {
                    return Effect::None;
                }
                let completion = self.mint();
                self.phase = Phase::Transitioning { completion };
                Effect::TransitionStarted {
                    from: self.current,
                    to: self.next_index(),
                }
            }
            Message::TransitionElapsed(token) => match self.phase {
                Phase::Transitioning { completion } if completion == token => {
                    // Index and phase change together.
                    self.current = self.next_index();
                    self.phase = Phase::Idle;
                    Effect::Advanced {
                        index: self.current,
                    }
                }
                _ => Effect::None,
            },
            Message::Pause => {
                if self.paused {
                    return Effect::None;
                }
                self.paused = true;
                self.interval_timer = None;
                Effect::Paused
            }
            Message::Resume => {
                if !self.paused {
                    return Effect::None;
                }
                self.paused = false;
                self.rearm_interval();
                Effect::Resumed
            }
            Message::Reconfigure { slides, interval } => {
                self.slides = slides;
                self.interval = interval;
                self.current = 0;
                self.phase = Phase::Idle;
                self.rearm_interval();
                Effect::Reset
            }
            Message::Teardown => {
                self.torn_down = true;
                self.interval_timer = None;
                self.phase = Phase::Idle;
                Effect::TornDown
            }
        }
    }

    /// Declares the timers a host should keep running.
    #[must_use]
    pub fn armed_timers(&self) -> ArmedTimers {
        ArmedTimers {
            interval: self
                .interval_timer
                .map(|token| (token, self.interval.as_duration())),
            transition: match self.phase {
                Phase::Transitioning { completion } => Some((completion, TRANSITION_DURATION)),
                Phase::Idle => None,
            },
        }
    }

    #[must_use]
    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    #[must_use]
    pub fn interval(&self) -> RotationInterval {
        self.interval
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn next_index(&self) -> usize {
        self.slides.next_index(self.current)
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Pause glyph is shown only when pausing is visible: paused, rotating,
    /// and the current slide does not animate by itself.
    #[must_use]
    pub fn show_pause_indicator(&self) -> bool {
        self.paused
            && self.slides.rotates()
            && self.current_slide().is_some_and(|slide| !slide.is_animated())
    }

    fn mint(&mut self) -> TimerToken {
        let token = self.next_token;
        self.next_token = token.succ();
        token
    }

    fn rearm_interval(&mut self) {
        self.interval_timer = if self.slides.rotates() && !self.paused {
            Some(self.mint())
        } else {
            None
        };
    }
}
