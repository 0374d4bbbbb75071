pub mod models;
pub mod cart;
pub mod order_log;
pub mod checkout;

pub use models::{LineItem, OrderRecord};
pub use cart::{CartError, CartStore, CART_KEY, ITEM_ADDED_MESSAGE};
pub use order_log::{OrderLog, OrderLogError, ORDERS_KEY};
pub use checkout::{place_order, CheckoutError, CheckoutForm, MISSING_FIELDS_MESSAGE};
