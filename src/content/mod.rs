mod collection;
pub mod markup;
mod record;

pub use collection::CaseStudies;
pub use markup::{Block, ListItem, Span};
pub use record::{CaseStudy, SolutionLink};
