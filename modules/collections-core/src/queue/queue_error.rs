
/// Errors produced by [`Queue`](super::Queue) read operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
  /// The queue holds no logically remaining elements.
  ///
  /// Raised both for a queue that never received an element and for one whose elements have all
  /// been dequeued.
  #[error("queue is empty")]
  Empty,
}
