use crate::error::AppError;
use crate::state::Storefront;
use crate::views::{format_price, CartRow, CartView};

impl Storefront {
    pub fn cart_view(&self) -> CartView {
        if self.cart.is_empty() {
            return CartView::Empty {
                message: "Your cart is currently empty.".to_string(),
                hint: "Browse our meal kits to get started.".to_string(),
            };
        }

        let rows = self
            .cart
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| CartRow {
                index,
                name: item.name.clone(),
                customization: item.customization.clone(),
                price_label: format!("{} x {}", format_price(item.price), item.quantity),
            })
            .collect();

        CartView::Items {
            rows,
            total_label: format_price(self.cart.total()),
        }
    }

    pub fn remove_from_cart(&mut self, index: i64) -> Result<CartView, AppError> {
        if let Some(item) = self.cart.remove_item(index)? {
            tracing::info!("Removed {} from cart", item.name);
        }
        Ok(self.cart_view())
    }

    pub fn clear_cart(&mut self) -> Result<CartView, AppError> {
        self.cart.clear()?;
        Ok(self.cart_view())
    }

    /// Header link text, shown only once the cart holds something
    pub fn cart_badge(&self) -> Option<String> {
        match self.cart.item_count() {
            0 => None,
            count => Some(format!("Cart ({})", count)),
        }
    }
}
