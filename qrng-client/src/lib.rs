pub mod client;
mod response;
mod source;

pub use client::{QrngClient, request_uri};
pub use response::ApiResponse;
pub use source::SampleSource;
