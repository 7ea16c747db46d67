mod experience;
mod transition;

pub use experience::{BulkImport, Experience, ExperienceConfig};
pub use transition::Transition;
