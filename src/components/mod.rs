//! UI Components
//!
//! Leptos components for the to-do page.

mod connectivity_badge;
mod install_button;
mod new_todo_form;
mod todo_list;
mod todo_row;

pub use connectivity_badge::ConnectivityBadge;
pub use install_button::InstallButton;
pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
