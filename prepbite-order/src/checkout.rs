use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::cart::{CartError, CartStore};
use crate::models::OrderRecord;
use crate::order_log::{OrderLog, OrderLogError};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// Delivery details as typed into the checkout form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub full_name: String,
    pub phone_number: String,
    pub delivery_address: String,
    pub city: String,
    pub pincode: String,
}

impl CheckoutForm {
    /// Form field ids left empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("fullName", &self.full_name),
            ("phoneNumber", &self.phone_number),
            ("deliveryAddress", &self.delivery_address),
            ("city", &self.city),
            ("pincode", &self.pincode),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Please fill in all required fields")]
    MissingFields(Vec<&'static str>),

    #[error(transparent)]
    OrderLog(#[from] OrderLogError),

    #[error("Order was recorded but the cart could not be cleared: {0}")]
    Cart(#[from] CartError),
}

/// Turn the current cart into an order.
///
/// Nothing is written unless every field is filled in. The order is appended
/// to `log` first and the cart is cleared only after that succeeds.
pub fn place_order(
    cart: &mut CartStore,
    log: &OrderLog,
    form: &CheckoutForm,
    placed_at: DateTime<Utc>,
) -> Result<OrderRecord, CheckoutError> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        tracing::warn!("Checkout blocked, missing fields: {:?}", missing);
        return Err(CheckoutError::MissingFields(missing));
    }

    let record = OrderRecord::new(
        form.full_name.as_str(),
        form.phone_number.as_str(),
        form.delivery_address.as_str(),
        form.city.as_str(),
        form.pincode.as_str(),
        cart.items().to_vec(),
        placed_at,
    );

    log.append(&record)?;
    cart.clear()?;

    Ok(record)
}
