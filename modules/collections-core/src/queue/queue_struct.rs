
use alloc::vec::Vec;

use super::{QueueCursor, QueueError};

/// FIFO queue that consumes elements by advancing a head cursor.
///
/// Enqueue appends to the backing buffer. Dequeue never shifts or frees anything: it hands out the
/// element under the cursor and moves the cursor forward, so every element ever enqueued stays
/// retained in the buffer. Both operations are O(1) amortized; memory grows with the total number
/// of enqueues rather than with the number of live elements.
#[derive(Clone, Debug)]
pub struct Queue<T> {
  cursor: QueueCursor,
  buffer: Vec<T>,
}

impl<T> Queue<T> {
  /// Creates an empty queue with an unset cursor.
  #[must_use]
  pub const fn new() -> Self {
    Self { cursor: QueueCursor::Unset, buffer: Vec::new() }
  }

  /// Creates an empty queue whose buffer is pre-reserved for `capacity` elements.
  ///
  /// The capacity is an allocation hint only; the queue keeps growing past it.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { cursor: QueueCursor::Unset, buffer: Vec::with_capacity(capacity) }
  }

  /// Appends an element to the tail of the queue.
  ///
  /// The first enqueue starts the cursor at index zero.
  pub fn enqueue(&mut self, element: T) {
    self.cursor = self.cursor.start();
    self.buffer.push(element);
  }

  /// Returns the element under the cursor without consuming it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when no logically remaining element exists.
  pub fn peek(&self) -> Result<&T, QueueError> {
    self.head_index().map(|index| &self.buffer[index])
  }

  /// Returns the element under the cursor and advances the cursor by one.
  ///
  /// The element stays retained in the buffer, so the caller receives a clone of it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when no logically remaining element exists.
  pub fn dequeue(&mut self) -> Result<T, QueueError>
  where
    T: Clone, {
    let index = self.head_index()?;
    self.cursor = self.cursor.advance();
    Ok(self.buffer[index].clone())
  }

  /// Returns the number of logically remaining elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    match self.cursor.index() {
      | Some(index) => self.buffer.len().saturating_sub(index),
      | None => 0,
    }
  }

  /// Returns `true` when `peek`/`dequeue` would report [`QueueError::Empty`].
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns the number of physically retained elements, consumed ones included.
  #[must_use]
  pub const fn retained(&self) -> usize {
    self.buffer.len()
  }

  /// Returns every retained element in enqueue order, consumed ones included.
  #[must_use]
  pub const fn as_slice(&self) -> &[T] {
    self.buffer.as_slice()
  }

  /// Returns the current cursor.
  #[must_use]
  pub const fn cursor(&self) -> QueueCursor {
    self.cursor
  }

  fn head_index(&self) -> Result<usize, QueueError> {
    match self.cursor.index() {
      | Some(index) if index < self.buffer.len() => Ok(index),
      | _ => {
        tracing::trace!(cursor = ?self.cursor, retained = self.buffer.len(), "queue read on empty queue");
        Err(QueueError::Empty)
      },
    }
  }
}

impl<T> Default for Queue<T> {
  fn default() -> Self {
    Self::new()
  }
}
