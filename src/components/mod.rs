//! UI Components
//!
//! App-level Leptos components; the primitives live in `sbrain-ui`.

mod content_card;
mod content_create_modal;
mod content_edit_modal;
mod content_fields;
mod delete_modal;
mod header;
mod sign_in_up_modal;

pub use content_card::ContentCard;
pub use content_create_modal::ContentCreateModal;
pub use content_edit_modal::ContentEditModal;
pub use content_fields::ContentFields;
pub use delete_modal::DeleteModal;
pub use header::Header;
pub use sign_in_up_modal::SignInUpModal;
