pub mod trace;

pub use trace::{TraceAction, Traced};
