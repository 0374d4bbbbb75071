use prepbite_core::StorageError;
use prepbite_order::{CartError, CheckoutError, OrderLogError, MISSING_FIELDS_MESSAGE};
use prepbite_store::app_config::ConfigError;

const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No meal selected")]
    NoMealSelected,

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    OrderLog(#[from] OrderLogError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Text for the blocking message shown to the shopper.
    ///
    /// Internal failures are logged here and reduced to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Checkout(CheckoutError::MissingFields(_)) => MISSING_FIELDS_MESSAGE.to_string(),
            AppError::NoMealSelected => "Please choose a meal kit first.".to_string(),
            other => {
                tracing::error!("Storefront error: {}", other);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}
