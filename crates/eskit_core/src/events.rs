//! Platform-neutral input events
//!
//! The windowing backend translates its native event stream into these
//! variants before handing them to the frame loop. Only event kinds the loop
//! actually reacts to are represented; everything else stays in the backend.

/// Phase of a touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Contact started
    Began,
    /// Contact moved while down
    Moved,
    /// Contact lifted or cancelled
    Ended,
}

/// A translated input event consumed by [`FrameLoop`](crate::FrameLoop).
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A touch contact at window coordinates
    Touch { x: f32, y: f32, phase: TouchPhase },
    /// A system swipe-down gesture (only emitted by platforms that have one)
    SwipeDown,
    /// A key press with the last known cursor position
    Key { ch: char, x: i32, y: i32 },
    /// The platform asked the application to exit
    CloseRequested,
}
