//! Grow-only pools of reusable display elements
//!
//! One pool exists per element kind (text, image). A pool only ever grows:
//! entries are created lazily the first time a render needs that position
//! and are reused on every later call. Nothing is ever removed; visibility
//! is controlled by the compositor toggling elements active and inactive.

/// A growable, never-shrinking pool with a per-call acquisition cursor.
///
/// `reset` rewinds the cursor at the start of a render; `acquire_with`
/// then hands out entries in order, allocating through the provided
/// constructor only when the cursor runs past the current length.
///
/// # Examples
///
/// ```
/// use richline::pool::ElementPool;
///
/// let mut pool: ElementPool<String> = ElementPool::new();
/// pool.reset();
/// pool.acquire_with(|| "a".to_string());
/// pool.acquire_with(|| "b".to_string());
/// assert_eq!(pool.len(), 2);
///
/// // Next call reuses the same entries without allocating
/// pool.reset();
/// let reused = pool.acquire_with(|| unreachable!("pool must reuse"));
/// assert_eq!(*reused, "a");
/// assert_eq!(pool.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ElementPool<T> {
    entries: Vec<T>,
    cursor: usize,
}

impl<T> ElementPool<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
        }
    }

    /// Total entries ever allocated. Monotonically non-decreasing.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries handed out since the last `reset`.
    pub fn in_use(&self) -> usize {
        self.cursor
    }

    /// Rewind the acquisition cursor for a new render.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Hand out the entry at the cursor, allocating via `make` if the
    /// cursor is past the end, then advance the cursor.
    pub fn acquire_with(&mut self, make: impl FnOnce() -> T) -> &mut T {
        if self.cursor >= self.entries.len() {
            self.entries.push(make());
        }
        let entry = &mut self.entries[self.cursor];
        self.cursor += 1;
        entry
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.entries.iter_mut()
    }
}

impl<T> Default for ElementPool<T> {
    fn default() -> Self {
        Self::new()
    }
}
