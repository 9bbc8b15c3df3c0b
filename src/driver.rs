//! Frame driver
//!
//! A [`Session`] owns one match and runs it one frame at a time: apply queued
//! input, tick, render. Whatever decides *when* a frame happens (the browser's
//! animation callback, a test loop) stays outside and just calls in.

use rand::Rng;

use crate::renderer::{Surface, render};
use crate::sim::{FrameEvents, FrameInput, GameState, Score, Side, tick};
use crate::tuning::{Tuning, TuningError};

/// Supplies frames to [`Session::drive`]
pub trait FrameSource {
    /// Input for the next frame, or `None` to stop
    fn next_frame(&mut self) -> Option<FrameInput>;
}

/// A fixed number of frames with no input
#[derive(Debug, Clone, Copy)]
pub struct FixedSteps {
    remaining: u64,
}

impl FixedSteps {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl FrameSource for FixedSteps {
    fn next_frame(&mut self) -> Option<FrameInput> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(FrameInput::default())
    }
}

/// A recorded list of per-frame inputs, played back in order
#[derive(Debug, Clone)]
pub struct ScriptedFrames {
    inputs: std::vec::IntoIter<FrameInput>,
}

impl ScriptedFrames {
    pub fn new(inputs: Vec<FrameInput>) -> Self {
        Self {
            inputs: inputs.into_iter(),
        }
    }
}

impl FrameSource for ScriptedFrames {
    fn next_frame(&mut self) -> Option<FrameInput> {
        self.inputs.next()
    }
}

/// Totals from a [`Session::drive`] run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveSummary {
    pub frames: u64,
    pub paddle_hits: u32,
    pub wall_hits: u32,
    pub score: Score,
}

/// One running match plus the input waiting for its next frame
pub struct Session<R: Rng> {
    state: GameState,
    rng: R,
    pending: FrameInput,
}

impl<R: Rng> Session<R> {
    /// Start a match; the ball is served immediately
    ///
    /// Fails if `tuning` does not describe a playable field.
    pub fn new(tuning: Tuning, mut rng: R) -> Result<Self, TuningError> {
        let state = GameState::new(tuning, &mut rng)?;
        log::info!(
            "New match on {}x{} playfield",
            tuning.playfield_width,
            tuning.playfield_height
        );
        Ok(Self {
            state,
            rng,
            pending: FrameInput::default(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Queue a pointer position for the next frame; the latest one wins
    pub fn pointer_moved(&mut self, pointer_y: f32) {
        self.pending.pointer_y = Some(pointer_y);
    }

    /// Run one frame with the queued input and draw it
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameEvents {
        let input = std::mem::take(&mut self.pending);
        self.frame_with(&input, surface)
    }

    /// Run one frame with explicit input and draw it
    pub fn frame_with<S: Surface + ?Sized>(
        &mut self,
        input: &FrameInput,
        surface: &mut S,
    ) -> FrameEvents {
        let events = tick(&mut self.state, input, &mut self.rng);
        render(&self.state, surface);
        events
    }

    /// Pull frames from `source` until it runs dry
    pub fn drive<F, S>(&mut self, source: &mut F, surface: &mut S) -> DriveSummary
    where
        F: FrameSource + ?Sized,
        S: Surface + ?Sized,
    {
        let mut summary = DriveSummary::default();
        while let Some(mut input) = source.next_frame() {
            // Pointer events queued between frames take effect too
            if input.pointer_y.is_none() {
                input.pointer_y = self.pending.pointer_y.take();
            } else {
                self.pending = FrameInput::default();
            }
            let events = self.frame_with(&input, surface);
            summary.frames += 1;
            summary.paddle_hits += u32::from(events.paddle_hit.is_some());
            summary.wall_hits += u32::from(events.wall_hit.is_some());
        }
        summary.score = self.state.score;
        log::info!(
            "Drove {} frames: player {} - opponent {}",
            summary.frames,
            summary.score.player,
            summary.score.opponent
        );
        summary
    }

    /// Points for `side` so far
    pub fn points(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.state.score.player,
            Side::Opponent => self.state.score.opponent,
        }
    }
}
