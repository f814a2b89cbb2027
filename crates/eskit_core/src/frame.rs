//! Frame loop driver
//!
//! One [`FrameLoop`] exists per application run. The backend drains its
//! native event queue, translates recognized events into [`InputEvent`]s and
//! feeds them through [`FrameLoop::pump`], then calls [`FrameLoop::step`]
//! once per frame. `step` invokes the update callback with the elapsed
//! wall-clock seconds, then the draw callback, until an exit event has been
//! observed, after which no callback is invoked again.

use crate::callbacks::Callbacks;
use crate::events::InputEvent;
use crate::timer::FrameTimer;

/// Drives the per-frame update/draw cycle over a context of type `C`.
pub struct FrameLoop<C> {
    callbacks: Callbacks<C>,
    timer: FrameTimer,
    should_exit: bool,
    frames: u64,
}

impl<C> FrameLoop<C> {
    /// Create a loop with the given callback registry. The timer starts now.
    pub fn new(callbacks: Callbacks<C>) -> Self {
        if !callbacks.has_draw() {
            log::warn!("no draw callback registered; frames will only run update");
        }
        Self {
            callbacks,
            timer: FrameTimer::new(),
            should_exit: false,
            frames: 0,
        }
    }

    /// Handle one translated input event.
    ///
    /// Touch and swipe-down are recognized but deliberately ignored; a key
    /// event dispatches the key callback; close-requested arms the exit flag.
    pub fn handle_event(&mut self, ctx: &mut C, event: InputEvent) {
        match event {
            InputEvent::Touch { x, y, phase } => {
                log::trace!("touch {:?} at ({:.1}, {:.1})", phase, x, y);
            }
            InputEvent::SwipeDown => {
                log::debug!("swipe-down ignored");
            }
            InputEvent::Key { ch, x, y } => {
                self.callbacks.dispatch_key(ctx, ch, x, y);
            }
            InputEvent::CloseRequested => {
                log::info!("exit requested after {} frames", self.frames);
                self.should_exit = true;
            }
        }
    }

    /// Drain a batch of translated events in order.
    pub fn pump<I>(&mut self, ctx: &mut C, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.handle_event(ctx, event);
        }
    }

    /// Run one frame: update (if registered) with the elapsed seconds since
    /// the previous step, then draw (if registered).
    ///
    /// Returns `false` without invoking any callback once an exit event has
    /// been observed.
    pub fn step(&mut self, ctx: &mut C) -> bool {
        if self.should_exit {
            return false;
        }
        let elapsed = self.timer.tick();
        self.callbacks.dispatch_update(ctx, elapsed);
        self.callbacks.dispatch_draw(ctx);
        self.frames += 1;
        true
    }

    /// Whether an exit event has been observed.
    pub fn is_exiting(&self) -> bool {
        self.should_exit
    }

    /// Request exit directly, as if a close event had been observed.
    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    /// Number of frames fully executed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Total wall-clock seconds accumulated by executed frames.
    pub fn total_secs(&self) -> f32 {
        self.timer.total_secs()
    }
}
