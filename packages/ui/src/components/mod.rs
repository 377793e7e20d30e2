//! Shared form controls and the toast stack.

mod button;
mod input;
mod label;
mod toast;

pub use button::{Button, ButtonVariant};
pub use input::Input;
pub use label::Label;
pub use toast::{use_toast, Toast, ToastHandle, ToastLevel, ToastOptions, ToastProvider};
