//! Resource Definitions
//!
//! One [`Resource`](crate::Resource) per backend entity type.

pub mod categories;
pub mod compilations;
pub mod events;
pub mod users;

pub use categories::{Categories, CategoryDraft};
pub use compilations::{CompilationDraft, Compilations};
pub use events::{EventDraft, Events};
pub use users::{UserDraft, Users};
