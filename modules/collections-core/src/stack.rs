//! LIFO stack tracked by a top index over a non-truncating buffer.

mod stack_error;
mod stack_struct;

pub use stack_error::StackError;
pub use stack_struct::Stack;
