//! Reusable UI components

pub mod category_sidebar;
pub mod dialog_component;
pub mod dialogs;
pub mod pagination_bar;
pub mod question_list;
pub mod status_bar;

pub use category_sidebar::CategorySidebar;
pub use dialog_component::DialogComponent;
pub use pagination_bar::PaginationBar;
pub use question_list::QuestionList;
pub use status_bar::StatusBar;
