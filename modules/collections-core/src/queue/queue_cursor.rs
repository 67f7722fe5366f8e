
/// Position of the next element eligible for `peek`/`dequeue`.
///
/// A queue that has never received an element has no cursor at all; the first enqueue starts it at
/// index zero. From then on the cursor only moves forward and may equal the buffer length, which
/// means every retained element has been consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QueueCursor {
  /// No element has been enqueued yet.
  #[default]
  Unset,
  /// Index into the backing buffer.
  At(usize),
}

impl QueueCursor {
  /// Returns the index the cursor points at, or `None` while unset.
  #[must_use]
  pub const fn index(self) -> Option<usize> {
    match self {
      | Self::Unset => None,
      | Self::At(index) => Some(index),
    }
  }

  /// Returns `true` once the first element has been enqueued.
  #[must_use]
  pub const fn is_set(self) -> bool {
    matches!(self, Self::At(_))
  }

  /// Starts an unset cursor at index zero. A running cursor is left where it is.
  #[must_use]
  pub const fn start(self) -> Self {
    match self {
      | Self::Unset => Self::At(0),
      | at @ Self::At(_) => at,
    }
  }

  /// Moves the cursor one slot forward. An unset cursor stays unset.
  #[must_use]
  pub const fn advance(self) -> Self {
    match self {
      | Self::Unset => Self::Unset,
      | Self::At(index) => Self::At(index + 1),
    }
  }
}
