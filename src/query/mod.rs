mod cache;
pub mod keys;

pub use cache::{Fetch, QueryCache, QueryKey, QueryStatus};
