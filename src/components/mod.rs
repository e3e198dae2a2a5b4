//! UI Components
//!
//! Shell pieces and one page per backend resource.

mod categories_page;
mod compilations_page;
mod event_details;
mod events_page;
mod fields;
mod form_dialog;
mod nav_bar;
mod notification_bar;
mod users_page;

pub use categories_page::CategoriesPage;
pub use compilations_page::CompilationsPage;
pub use event_details::EventDetails;
pub use events_page::EventsPage;
pub use fields::{CheckboxField, DecimalField, NumberField, TextAreaField, TextField};
pub use form_dialog::FormDialog;
pub use nav_bar::{NavBar, Page};
pub use notification_bar::NotificationBar;
pub use users_page::UsersPage;
