//! Playback over a generated trace
//!
//! [`PlaybackController`] owns a [`Trace`] and a cursor into it. Manual
//! commands move the cursor immediately; autoplay goes through a
//! [`Scheduler`] that hands back a [`TickToken`] each period.
//!
//! At most one tick is pending at any time. Pausing, resetting or changing
//! speed withdraws the pending token, and [`PlaybackController::tick`] ignores
//! any token that is not the pending one, so a stale timer is a no-op.

pub mod scheduler;

pub use scheduler::{DeadlineScheduler, Scheduler, TickToken};

use crate::config::{clamp_interval_ms, ArrayConfig, PlaybackConfig};
use crate::snapshot::Trace;
use crate::trace::Step;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Observable controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// At the first step, not playing
    Idle,
    Playing,
    /// Somewhere in the middle, not playing
    Paused,
    /// At the last step, not playing
    Finished,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Idle => "START",
            PlaybackState::Playing => "PLAYING",
            PlaybackState::Paused => "PAUSED",
            PlaybackState::Finished => "END",
        }
    }
}

/// Cursor, play flag and speed over an owned trace
pub struct PlaybackController<S: Scheduler> {
    trace: Trace,
    cursor: usize,
    playing: bool,
    interval_ms: u64,
    /// Token of the one tick currently allowed to advance the cursor
    pending: Option<TickToken>,
    /// Source of fresh tokens; never reused
    generation: u64,
    scheduler: S,
    array_config: ArrayConfig,
    rng: StdRng,
}

impl<S: Scheduler> PlaybackController<S> {
    /// Create a controller with no trace loaded.
    ///
    /// Call [`reset`](Self::reset) to generate the first trace.
    pub fn new(config: &PlaybackConfig, scheduler: S) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        PlaybackController {
            trace: Trace::empty(),
            cursor: 0,
            playing: false,
            interval_ms: clamp_interval_ms(config.interval_ms),
            pending: None,
            generation: 0,
            scheduler,
            array_config: config.array,
            rng,
        }
    }

    // ========== Read-only views ==========

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn steps(&self) -> &[Step] {
        self.trace.steps()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn array_config(&self) -> &ArrayConfig {
        &self.array_config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access for the event loop that drives the timer
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// The step at the cursor, or the neutral placeholder if no trace exists
    pub fn current_step(&self) -> &Step {
        self.trace
            .get(self.cursor)
            .unwrap_or_else(|| Step::placeholder_ref())
    }

    pub fn last_index(&self) -> usize {
        self.trace.last_index().unwrap_or(0)
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.last_index()
    }

    pub fn state(&self) -> PlaybackState {
        if self.playing {
            PlaybackState::Playing
        } else if self.is_at_end() {
            PlaybackState::Finished
        } else if self.cursor == 0 {
            PlaybackState::Idle
        } else {
            PlaybackState::Paused
        }
    }

    // ========== Commands ==========

    /// Advance one step. Returns `false` at the last step.
    ///
    /// Landing on the last step while playing ends playback.
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.cursor += 1;
        self.finish_if_at_end();
        true
    }

    /// Go back one step. Returns `false` at the first step.
    pub fn step_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor to `index`, clamped into the trace
    pub fn seek(&mut self, index: usize) {
        self.cursor = index.min(self.last_index());
        self.finish_if_at_end();
    }

    pub fn jump_to_start(&mut self) {
        self.seek(0);
    }

    pub fn jump_to_end(&mut self) {
        self.seek(usize::MAX);
    }

    /// Flip between playing and paused. Returns the new play flag.
    pub fn toggle_play(&mut self) -> bool {
        if self.playing {
            self.pause();
        } else {
            self.playing = true;
            self.schedule_next();
            log::debug!("playback started at step {}", self.cursor);
        }
        self.playing
    }

    /// Stop autoplay and withdraw any pending tick
    pub fn pause(&mut self) {
        if self.playing {
            log::debug!("playback paused at step {}", self.cursor);
        }
        self.playing = false;
        self.cancel_pending();
    }

    /// Set the autoplay period. A pending tick is rescheduled at the new period.
    pub fn set_speed(&mut self, interval_ms: u64) {
        self.interval_ms = clamp_interval_ms(interval_ms);
        log::debug!("playback interval set to {}ms", self.interval_ms);

        if self.playing && self.pending.is_some() {
            self.cancel_pending();
            self.schedule_next();
        }
    }

    /// Shorten the period by a third
    pub fn faster(&mut self) {
        self.set_speed(self.interval_ms * 2 / 3);
    }

    /// Lengthen the period by half
    pub fn slower(&mut self) {
        self.set_speed(self.interval_ms * 3 / 2);
    }

    /// Discard the trace and generate a new one.
    ///
    /// With `None`, a random array is drawn from the configured size and range.
    pub fn reset(&mut self, new_array: Option<Vec<i64>>) {
        self.pause();

        let input = new_array.unwrap_or_else(|| self.array_config.sample(&mut self.rng));
        self.trace = Trace::generate(&input);
        self.cursor = 0;

        log::debug!(
            "trace regenerated: {} element(s), {} step(s)",
            input.len(),
            self.trace.len()
        );
    }

    /// Deliver a scheduled tick.
    ///
    /// Advances exactly one step if `token` is the pending one. Reaching the
    /// last step ends playback. Returns whether the cursor moved.
    pub fn tick(&mut self, token: TickToken) -> bool {
        if !self.playing || self.pending != Some(token) {
            log::trace!("ignoring stale tick {:?}", token);
            return false;
        }
        self.pending = None;

        let advanced = !self.is_at_end();
        if advanced {
            self.cursor += 1;
        }

        if self.is_at_end() {
            self.finish_if_at_end();
        } else {
            self.schedule_next();
        }

        advanced
    }

    /// Clear the play flag and any pending tick once the cursor is on the last step
    fn finish_if_at_end(&mut self) {
        if self.playing && self.is_at_end() {
            self.playing = false;
            self.cancel_pending();
            log::debug!("playback finished at step {}", self.cursor);
        }
    }

    fn schedule_next(&mut self) {
        self.generation += 1;
        let token = TickToken(self.generation);
        self.pending = Some(token);
        self.scheduler.schedule(token, self.interval());
    }

    fn cancel_pending(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel(token);
        }
    }
}
