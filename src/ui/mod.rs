pub mod card;
pub mod content;
pub mod image;

pub use content::render_content;
