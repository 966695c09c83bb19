// Core rendering exports
pub mod dashboard;
pub mod formatters;
pub mod render;

pub use dashboard::{Dashboard, FeedPaths, Section, SectionStatus};
pub use formatters::{format_confidence, format_prediction, format_recommendation, format_score, ItemBlock};
pub use render::{render, Container, ContainerContent, EMPTY_PLACEHOLDER};
