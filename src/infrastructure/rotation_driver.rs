// SPDX-License-Identifier: MPL-2.0
//! Tokio host for a [`Rotator`].
//!
//! The driver owns the rotator inside a spawned task and executes whatever
//! timers it declares. Each running timer is held by a [`TimerGuard`]; after
//! every message the driver drops guards whose token is no longer armed and
//! spawns timers for newly armed tokens. Dropping a guard aborts its task, so
//! cancellation is scoped to the guard's lifetime.
//!
//! ```ignore
//! let handle = rotation_driver::spawn(Rotator::mount(slides, interval));
//! handle.pause();
//! handle.resume();
//! handle.teardown();
//! ```

use crate::domain::slideshow::{
    Effect, Message, Phase, RotationInterval, Rotator, SlideSet, TimerToken,
};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Observable rotator state published after every processed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub current_index: usize,
    pub phase: Phase,
    pub paused: bool,
    pub torn_down: bool,
    pub show_pause_indicator: bool,
    pub slide_count: usize,
    /// Effect of the message that produced this snapshot.
    pub last_effect: Effect,
}

impl Snapshot {
    fn of(rotator: &Rotator, last_effect: Effect) -> Self {
        Self {
            current_index: rotator.current_index(),
            phase: rotator.phase(),
            paused: rotator.is_paused(),
            torn_down: rotator.is_torn_down(),
            show_pause_indicator: rotator.show_pause_indicator(),
            slide_count: rotator.slides().len(),
            last_effect,
        }
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }
}

/// Owns one running timer task; aborts it on drop.
#[derive(Debug)]
pub struct TimerGuard {
    task: JoinHandle<()>,
}

impl TimerGuard {
    fn recurring(
        token: TimerToken,
        start: Instant,
        period: Duration,
        fired: mpsc::UnboundedSender<Message>,
    ) -> Self {
        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(start + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if fired.send(Message::IntervalElapsed(token)).is_err() {
                    break;
                }
            }
        });
        Self { task }
    }

    fn one_shot(
        token: TimerToken,
        deadline: Instant,
        fired: mpsc::UnboundedSender<Message>,
    ) -> Self {
        let task = tokio::spawn(async move {
            time::sleep_until(deadline).await;
            let _ = fired.send(Message::TransitionElapsed(token));
        });
        Self { task }
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Cloneable control surface for a spawned driver.
///
/// Commands sent after the driver has finished are silently dropped.
#[derive(Debug, Clone)]
pub struct RotationHandle {
    commands: mpsc::UnboundedSender<Message>,
    snapshots: watch::Receiver<Snapshot>,
}

impl RotationHandle {
    pub fn pause(&self) {
        self.send(Message::Pause);
    }

    pub fn resume(&self) {
        self.send(Message::Resume);
    }

    pub fn reconfigure(&self, slides: SlideSet, interval: RotationInterval) {
        self.send(Message::Reconfigure { slides, interval });
    }

    /// Cancels every timer and stops the driver. Idempotent.
    pub fn teardown(&self) {
        self.send(Message::Teardown);
    }

    /// Latest published state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified after every processed message.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Whether the driver task is still accepting commands.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.commands.is_closed()
    }

    fn send(&self, message: Message) {
        if self.commands.send(message).is_err() {
            tracing::trace!("rotation driver already stopped; command dropped");
        }
    }
}

/// Spawns a driver task for `rotator` on the current tokio runtime.
///
/// The driver stops after teardown, or once every [`RotationHandle`] is
/// dropped.
///
/// # Panics
///
/// Panics when called outside a tokio runtime.
pub fn spawn(rotator: Rotator) -> RotationHandle {
    let (commands_tx, commands_rx) = mpsc::unbounded_channel();
    let (fired_tx, fired_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(Snapshot::of(&rotator, Effect::None));

    let driver = Driver {
        rotator,
        timers: HashMap::new(),
        fired: fired_tx,
        snapshots: snapshot_tx,
    };
    tokio::spawn(driver.run(commands_rx, fired_rx));

    RotationHandle {
        commands: commands_tx,
        snapshots: snapshot_rx,
    }
}

struct Driver {
    rotator: Rotator,
    timers: HashMap<TimerToken, TimerGuard>,
    fired: mpsc::UnboundedSender<Message>,
    snapshots: watch::Sender<Snapshot>,
}

impl Driver {
    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Message>,
        mut fired: mpsc::UnboundedReceiver<Message>,
    ) {
        self.reconcile();
        tracing::debug!(
            slides = self.rotator.slides().len(),
            interval_ms = self.rotator.interval().millis(),
            "rotation driver started"
        );

        loop {
            let message = tokio::select! {
                biased;
                command = commands.recv() => command.unwrap_or(Message::Teardown),
                Some(expired) = fired.recv() => expired,
            };

            let effect = self.rotator.handle(message);
            log_effect(effect);
            self.reconcile();
            self.snapshots.send_replace(Snapshot::of(&self.rotator, effect));

            if self.rotator.is_torn_down() {
                break;
            }
        }

        tracing::debug!("rotation driver stopped");
    }

    /// Brings running timers in line with what the rotator has armed.
    fn reconcile(&mut self) {
        let armed = self.rotator.armed_timers();
        self.timers.retain(|token, _| armed.contains(*token));

        let now = Instant::now();
        if let Some((token, period)) = armed.interval {
            self.timers
                .entry(token)
                .or_insert_with(|| TimerGuard::recurring(token, now, period, self.fired.clone()));
        }
        if let Some((token, duration)) = armed.transition {
            self.timers
                .entry(token)
                .or_insert_with(|| TimerGuard::one_shot(token, now + duration, self.fired.clone()));
        }
    }
}

fn log_effect(effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::TransitionStarted { from, to } => {
            tracing::debug!(from, to, "slide transition started");
        }
        Effect::Advanced { index } => tracing::debug!(index, "slide advanced"),
        Effect::Paused => tracing::debug!("rotation paused"),
        Effect::Resumed => tracing::debug!("rotation resumed"),
        Effect::Reset => tracing::info!("rotation reconfigured"),
        Effect::TornDown => tracing::debug!("rotation torn down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(count: usize) -> SlideSet {
        SlideSet::from_sources(
            (0..count).map(|i| format!("{i}.png")),
            Vec::<String>::new(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn advances_after_interval_plus_transition() {
        let handle = spawn(Rotator::mount(slides(3), RotationInterval::new(3000)));
        let start = Instant::now();

        time::sleep_until(start + Duration::from_millis(3100)).await;
        let snapshot = handle.snapshot();
        assert!(snapshot.is_transitioning());
        assert_eq!(snapshot.current_index, 0);

        time::sleep_until(start + Duration::from_millis(3800)).await;
        let snapshot = handle.snapshot();
        assert!(!snapshot.is_transitioning());
        assert_eq!(snapshot.current_index, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_stops_driver_and_repeats_harmlessly() {
        let handle = spawn(Rotator::mount(slides(3), RotationInterval::default()));
        handle.teardown();
        time::sleep(Duration::from_millis(10)).await;

        assert!(handle.snapshot().torn_down);
        assert!(!handle.is_running());
        handle.teardown();

        time::sleep(Duration::from_secs(30)).await;
        assert_eq!(handle.snapshot().current_index, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_every_handle_stops_driver() {
        let handle = spawn(Rotator::mount(slides(2), RotationInterval::default()));
        let mut updates = handle.subscribe();
        drop(handle);

        updates.changed().await.expect("final snapshot published");
        assert!(updates.borrow().torn_down);
    }
}
