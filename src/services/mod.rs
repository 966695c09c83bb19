// Service exports
pub mod loader;

pub use loader::{FeedError, FeedLoader};
