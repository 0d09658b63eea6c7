//! Cooperative command execution.

mod executor;

pub use executor::{
    Clock, ExecutionState, Executor, Status, SystemClock, PROGRESS_EVERY, PROGRESS_INTERVAL,
};
