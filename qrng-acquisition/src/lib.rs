pub mod acquisition;

pub use acquisition::{Acquisition, LoopState, RunOutcome, RunSummary};
