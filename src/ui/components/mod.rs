//! Reusable components shared across views

pub mod delete_confirm;
pub mod privacy_panel;

pub use delete_confirm::{DeleteConfirm, DeleteConfirmView};
pub use privacy_panel::PrivacyPanel;
