//! S-Brain UI Kit
//!
//! Primitive Leptos controls shared by the web client: buttons, inputs,
//! selects, spinners, the modal shell, pagination and the theme toggle.

use std::sync::atomic::{AtomicUsize, Ordering};

mod button;
mod input;
mod modal;
pub mod pagination;
mod select;
mod spinner;
pub mod storage;
pub mod style;
pub mod theme;

pub use button::Button;
pub use input::Input;
pub use modal::Modal;
pub use pagination::Pagination;
pub use select::{Select, SelectOption};
pub use spinner::LoadingSpinner;
pub use style::{cn, when, ButtonVariant, InputVariant, SelectVariant, SpinnerSize};
pub use theme::{Theme, ThemeToggle};

static NEXT_CONTROL_ID: AtomicUsize = AtomicUsize::new(0);

/// Unique DOM id for label/control pairing
pub(crate) fn control_id(prefix: &str) -> String {
    let n = NEXT_CONTROL_ID.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", prefix, n)
}
