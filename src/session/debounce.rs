/// Trailing-edge debounce over millisecond timestamps.
///
/// Each `push` replaces the pending value and restarts the quiet window; the
/// value is released once `window_ms` passes without another push.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window_ms: u64,
    pending: Option<(u64, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: None,
        }
    }

    pub fn push(&mut self, at_ms: u64, value: T) {
        self.pending = Some((at_ms, value));
    }

    /// Release the pending value if its window has elapsed by `now_ms`.
    /// Returns the time the value became due along with the value.
    pub fn poll(&mut self, now_ms: u64) -> Option<(u64, T)> {
        let due = self.due_at()?;
        if now_ms < due {
            return None;
        }
        self.pending.take().map(|(_, value)| (due, value))
    }

    /// Release the pending value regardless of the window
    pub fn flush(&mut self) -> Option<(u64, T)> {
        let due = self.due_at()?;
        self.pending.take().map(|(_, value)| (due, value))
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    fn due_at(&self) -> Option<u64> {
        self.pending
            .as_ref()
            .map(|(at, _)| at.saturating_add(self.window_ms))
    }
}
