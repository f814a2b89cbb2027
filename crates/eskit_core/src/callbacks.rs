//! Typed per-frame callback registry
//!
//! Applications register at most one callback per slot. Unregistered slots
//! are an explicit absent state and are silently skipped every frame, so a
//! draw-only or update-only application needs no stubs.

/// Update callback: receives the context and the elapsed wall-clock time in
/// seconds since the previous frame.
type UpdateFn<C> = Box<dyn FnMut(&mut C, f32)>;

/// Draw callback: receives the context once per frame after update.
type DrawFn<C> = Box<dyn FnMut(&mut C)>;

/// Key callback: receives the context, the pressed character, and the last
/// known cursor position.
type KeyFn<C> = Box<dyn FnMut(&mut C, char, i32, i32)>;

/// Callback registry supplied to the frame loop at setup time.
///
/// Generic over the context type `C` handed to every callback, so the
/// registry can be driven headless in tests with a plain struct and on a
/// real window with the backend's context record.
pub struct Callbacks<C> {
    update: Option<UpdateFn<C>>,
    draw: Option<DrawFn<C>>,
    key: Option<KeyFn<C>>,
}

impl<C> Default for Callbacks<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Callbacks<C> {
    /// Create an empty registry with no callbacks installed.
    pub fn new() -> Self {
        Self {
            update: None,
            draw: None,
            key: None,
        }
    }

    /// Install the update callback, invoked each frame before draw with the
    /// elapsed time in seconds.
    pub fn on_update(mut self, f: impl FnMut(&mut C, f32) + 'static) -> Self {
        self.update = Some(Box::new(f));
        self
    }

    /// Install the draw callback, invoked once per frame after update.
    pub fn on_draw(mut self, f: impl FnMut(&mut C) + 'static) -> Self {
        self.draw = Some(Box::new(f));
        self
    }

    /// Install the key callback, invoked for each translated key event with
    /// the character and the last known cursor position.
    pub fn on_key(mut self, f: impl FnMut(&mut C, char, i32, i32) + 'static) -> Self {
        self.key = Some(Box::new(f));
        self
    }

    /// Whether an update callback is installed.
    pub fn has_update(&self) -> bool {
        self.update.is_some()
    }

    /// Whether a draw callback is installed.
    pub fn has_draw(&self) -> bool {
        self.draw.is_some()
    }

    /// Whether a key callback is installed.
    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    pub(crate) fn dispatch_update(&mut self, ctx: &mut C, elapsed: f32) {
        if let Some(update) = self.update.as_mut() {
            update(ctx, elapsed);
        }
    }

    pub(crate) fn dispatch_draw(&mut self, ctx: &mut C) {
        if let Some(draw) = self.draw.as_mut() {
            draw(ctx);
        }
    }

    pub(crate) fn dispatch_key(&mut self, ctx: &mut C, ch: char, x: i32, y: i32) {
        if let Some(key) = self.key.as_mut() {
            key(ctx, ch, x, y);
        }
    }
}
