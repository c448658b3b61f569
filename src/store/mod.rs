pub mod menu;
pub mod orders;
pub mod preferences;

pub use menu::{FieldUpdate, MenuStore};
pub use orders::OrderLog;
pub use preferences::PreferenceTracker;
