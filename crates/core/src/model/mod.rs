mod headline;
mod ids;

pub use headline::{ContentItem, headline_catalog};
pub use ids::SectionId;
