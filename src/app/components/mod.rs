pub mod card;
pub mod common;
pub mod search_bar;
pub mod topic_section;
pub mod tutorials_sidebar;
pub mod tutorials_view;

pub use card::PlaylistCard;
pub use common::{LoadingText, ErrorMessage, NoResults};
pub use search_bar::{SearchBar, SEARCH_PLACEHOLDER};
pub use topic_section::TopicSection;
pub use tutorials_sidebar::TutorialsSidebar;
pub use tutorials_view::TutorialsView;
