
use alloc::vec::Vec;

use super::StackError;

/// LIFO stack that tracks its top element by index.
///
/// Popping moves the top index down without truncating the buffer; the popped slot is reused by
/// the next push.
#[derive(Clone, Debug)]
pub struct Stack<T> {
  top:    Option<usize>,
  buffer: Vec<T>,
}

impl<T> Stack<T> {
  /// Creates an empty stack.
  #[must_use]
  pub const fn new() -> Self {
    Self { top: None, buffer: Vec::new() }
  }

  /// Creates an empty stack whose buffer is pre-reserved for `capacity` elements.
  ///
  /// The capacity is an allocation hint only; the stack keeps growing past it.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { top: None, buffer: Vec::with_capacity(capacity) }
  }

  /// Pushes an element onto the top of the stack.
  pub fn push(&mut self, element: T) {
    let next = self.len();
    match self.buffer.get_mut(next) {
      | Some(slot) => *slot = element,
      | None => self.buffer.push(element),
    }
    self.top = Some(next);
  }

  /// Returns `true` when no pushed element remains on the stack.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.top.is_none()
  }

  /// Removes the top element and returns it.
  ///
  /// The element stays retained in the buffer until a later push overwrites its slot, so the
  /// caller receives a clone of it.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack is empty.
  pub fn pop(&mut self) -> Result<T, StackError>
  where
    T: Clone, {
    let top = self.top_index()?;
    self.top = top.checked_sub(1);
    Ok(self.buffer[top].clone())
  }

  /// Returns the top element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack is empty.
  pub fn peek(&self) -> Result<&T, StackError> {
    self.top_index().map(|top| &self.buffer[top])
  }

  /// Returns the index of the top element, or `None` when the stack is empty.
  #[must_use]
  pub const fn top(&self) -> Option<usize> {
    self.top
  }

  /// Returns the number of elements currently on the stack.
  #[must_use]
  pub const fn len(&self) -> usize {
    match self.top {
      | Some(top) => top + 1,
      | None => 0,
    }
  }

  /// Returns every retained element in buffer order, popped ones included.
  #[must_use]
  pub const fn as_slice(&self) -> &[T] {
    self.buffer.as_slice()
  }

  fn top_index(&self) -> Result<usize, StackError> {
    self.top.ok_or_else(|| {
      tracing::trace!(retained = self.buffer.len(), "stack read on empty stack");
      StackError::Empty
    })
  }
}

impl<T> Default for Stack<T> {
  fn default() -> Self {
    Self::new()
  }
}
