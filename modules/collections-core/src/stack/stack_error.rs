
/// Errors produced by [`Stack`](super::Stack) read operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
  /// The stack contains no elements.
  #[error("stack is empty")]
  Empty,
}
