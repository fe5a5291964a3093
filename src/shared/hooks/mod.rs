// Custom Dioxus hooks
pub mod use_tutorials_view;

pub use use_tutorials_view::{use_tutorials_view, UseTutorialsView};
