pub mod client;
pub mod errors;
pub mod source;

pub use client::HttpFetcher;
pub use errors::FetchError;
pub use source::PageFetcher;

#[cfg(test)]
pub use source::MockPageFetcher;
