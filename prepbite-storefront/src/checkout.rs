use chrono::{DateTime, Utc};
use prepbite_order::{place_order, CheckoutForm};

use crate::error::AppError;
use crate::state::Storefront;
use crate::views::{format_price, CheckoutSummary, OrderConfirmation, SummaryRow};

impl Storefront {
    pub fn checkout_summary(&self) -> CheckoutSummary {
        let rows = self
            .cart
            .items()
            .iter()
            .map(|item| SummaryRow {
                label: format!("{} ({}x)", item.name, item.quantity),
                amount_label: format_price(item.line_total()),
            })
            .collect();

        CheckoutSummary {
            rows,
            total_label: format!("Total: {}", format_price(self.cart.total())),
        }
    }

    pub fn submit_checkout(&mut self, form: &CheckoutForm) -> Result<OrderConfirmation, AppError> {
        self.submit_checkout_at(form, Utc::now())
    }

    /// Record the order with an explicit timestamp, then empty the cart.
    pub fn submit_checkout_at(
        &mut self,
        form: &CheckoutForm,
        placed_at: DateTime<Utc>,
    ) -> Result<OrderConfirmation, AppError> {
        let order = place_order(&mut self.cart, &self.orders, form, placed_at)?;

        Ok(OrderConfirmation {
            heading: "Order Placed Successfully!".to_string(),
            message: "Your PrepBite meal kit will be delivered soon. Thank you for choosing a smarter way to cook."
                .to_string(),
            order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prepbite_store::app_config::Config;
    use prepbite_store::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn test_checkout_summary_rows() {
        let mut shop = Storefront::with_store(Arc::new(MemoryStore::new()), &Config::default()).unwrap();
        shop.open_customize(Some("paneertikka"));
        shop.select_option("servings", "2 Persons").unwrap();
        shop.add_to_cart().unwrap();

        let summary = shop.checkout_summary();
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows[0].label, "Paneer Tikka Kit (1x)");
        assert_eq!(summary.rows[0].amount_label, "₹225");
        assert_eq!(summary.total_label, "Total: ₹225");
    }

    #[test]
    fn test_blank_form_is_blocked() {
        let mut shop = Storefront::with_store(Arc::new(MemoryStore::new()), &Config::default()).unwrap();
        shop.open_customize(None);
        shop.add_to_cart().unwrap();

        let err = shop.submit_checkout(&CheckoutForm::default()).unwrap_err();
        assert_eq!(err.user_message(), "Please fill in all required fields");
        assert_eq!(shop.cart().len(), 1);
        assert!(shop.orders().orders().unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_field_is_accepted() {
        let mut shop = Storefront::with_store(Arc::new(MemoryStore::new()), &Config::default()).unwrap();
        shop.open_customize(None);
        shop.add_to_cart().unwrap();

        let form = CheckoutForm {
            full_name: "Kavya".to_string(),
            phone_number: "9000011111".to_string(),
            delivery_address: "7 Lake View".to_string(),
            city: " ".to_string(),
            pincode: "682001".to_string(),
        };
        let confirmation = shop.submit_checkout(&form).unwrap();
        assert_eq!(confirmation.order.city, " ");
        assert!(shop.cart().is_empty());
    }
}
