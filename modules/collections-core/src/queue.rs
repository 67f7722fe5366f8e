//! FIFO queue tracked by a monotonically advancing head cursor.

mod queue_cursor;
mod queue_error;
mod queue_struct;

pub use queue_cursor::QueueCursor;
pub use queue_error::QueueError;
pub use queue_struct::Queue;
