pub mod sample;
pub mod concat;
pub mod timestamp;

pub use sample::{RawSample, ConcatenatedSample, to_binary16};
pub use concat::{GROUP_SIZE, concatenate_uint64};
pub use timestamp::request_timestamp;
