//! Session context and page flows for the PrepBite storefront.
//!
//! A host UI builds one [`Storefront`] per page load and routes every user
//! event through it. Nothing here renders markup; handlers return plain view
//! structs the host turns into pages.

pub mod state;
pub mod error;
pub mod telemetry;
pub mod notifications;
pub mod views;
pub mod meals;
pub mod customize;
pub mod cart;
pub mod checkout;

pub use error::AppError;
pub use notifications::{Toast, ToastQueue};
pub use state::Storefront;
