// Reusable UI widgets

pub mod button;
pub mod logo;
pub mod spinner;
pub mod text_input;
pub mod toast;

pub use button::{Button, BUTTON_HEIGHT};
pub use logo::{FitstateLogo, Size};
pub use spinner::Spinner;
pub use text_input::{TextInputWidget, TextInputWidgetExt};
pub use toast::{Toast, ToastManager, ToastVariant, ToastWidget};
