//! Linear undo/redo timeline.

use std::{
    collections::{VecDeque, vec_deque},
    num::NonZero,
};

use serde::{Deserialize, Serialize};

use crate::HistoryError;

/// An ordered sequence of entries with a cursor.
///
/// The entry under the cursor is the current one. Entries before it can be
/// stepped back to; entries after it are the redo-able future, discarded by
/// the next [`append`](Self::append). The timeline knows nothing about what
/// it stores.
///
/// When built with a capacity, appending to a full timeline drops the oldest
/// entry.
///
/// # Examples
///
/// ```
/// use twenty48_game::Timeline;
///
/// let mut timeline = Timeline::new();
/// timeline.append("a");
/// timeline.append("b");
/// timeline.append("c");
///
/// assert_eq!(timeline.step_back(), Ok(&"b"));
/// timeline.append("d");
///
/// assert!(!timeline.has_next());
/// assert_eq!(timeline.entries().copied().collect::<Vec<_>>(), ["a", "b", "d"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TimelineParts<T>")]
pub struct Timeline<T> {
    entries: VecDeque<T>,
    cursor: usize,
    capacity: Option<NonZero<usize>>,
}

#[derive(Deserialize)]
struct TimelineParts<T> {
    entries: VecDeque<T>,
    cursor: usize,
    capacity: Option<NonZero<usize>>,
}

impl<T> From<TimelineParts<T>> for Timeline<T> {
    fn from(parts: TimelineParts<T>) -> Self {
        let TimelineParts {
            entries,
            cursor,
            capacity,
        } = parts;
        let mut timeline = Self {
            entries: VecDeque::new(),
            cursor: 0,
            capacity,
        };
        timeline.restore_from_parts(entries, cursor);
        timeline
    }
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timeline<T> {
    /// Creates an empty, unbounded timeline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
            capacity: None,
        }
    }

    /// Creates an empty timeline that keeps at most `capacity` entries.
    #[must_use]
    pub const fn with_capacity(capacity: NonZero<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
            capacity: Some(capacity),
        }
    }

    /// Returns the maximum number of entries kept, if bounded.
    #[must_use]
    pub const fn capacity(&self) -> Option<NonZero<usize>> {
        self.capacity
    }

    /// Returns the number of entries, including the redo-able future.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the timeline has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the index of the current entry.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns all entries, oldest first.
    pub fn entries(&self) -> vec_deque::Iter<'_, T> {
        self.entries.iter()
    }

    /// Discards every entry after the cursor, appends `item`, and moves the
    /// cursor onto it.
    pub fn append(&mut self, item: T) {
        if self.entries.is_empty() {
            self.entries.push_back(item);
            self.cursor = 0;
            return;
        }

        self.entries.truncate(self.cursor + 1);

        if let Some(capacity) = self.capacity
            && self.entries.len() == capacity.get()
        {
            self.entries.pop_front();
        }

        self.entries.push_back(item);
        self.cursor = self.entries.len() - 1;
    }

    /// Returns `true` if there is an entry before the cursor.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    /// Returns `true` if there is an entry after the cursor.
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.entries.is_empty() && self.cursor + 1 < self.entries.len()
    }

    /// Moves the cursor one entry back and returns the new current entry.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Empty`] if the timeline is empty and
    /// [`HistoryError::AtStart`] if the cursor is on the first entry.
    pub fn step_back(&mut self) -> Result<&T, HistoryError> {
        if self.entries.is_empty() {
            return Err(HistoryError::Empty);
        }
        if !self.has_previous() {
            return Err(HistoryError::AtStart);
        }
        self.cursor -= 1;
        self.current()
    }

    /// Moves the cursor one entry forward and returns the new current entry.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Empty`] if the timeline is empty and
    /// [`HistoryError::AtEnd`] if the cursor is on the last entry.
    pub fn step_forward(&mut self) -> Result<&T, HistoryError> {
        if self.entries.is_empty() {
            return Err(HistoryError::Empty);
        }
        if !self.has_next() {
            return Err(HistoryError::AtEnd);
        }
        self.cursor += 1;
        self.current()
    }

    /// Returns the entry under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Empty`] if the timeline is empty.
    pub fn current(&self) -> Result<&T, HistoryError> {
        self.entries.get(self.cursor).ok_or(HistoryError::Empty)
    }

    /// Replaces the whole timeline with a single entry.
    pub fn reset(&mut self, item: T) {
        self.entries.clear();
        self.cursor = 0;
        self.append(item);
    }

    fn restore_from_parts(&mut self, mut entries: VecDeque<T>, cursor: usize) {
        let mut cursor = cursor;
        if let Some(capacity) = self.capacity
            && entries.len() > capacity.get()
        {
            let overflow = entries.len() - capacity.get();
            entries.drain(..overflow);
            cursor = cursor.saturating_sub(overflow);
        }

        self.entries = entries;
        self.cursor = cursor.min(self.entries.len().saturating_sub(1));
    }
}
