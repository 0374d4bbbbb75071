use std::sync::Arc;

use prepbite_catalog::{MealCustomizer, PricingConfig};
use prepbite_core::KeyValueStore;
use prepbite_order::{CartStore, OrderLog};
use prepbite_store::app_config::Config;

use crate::error::AppError;
use crate::notifications::ToastQueue;

/// Everything one page session needs: the cart, the customizer and the order
/// log, all over one storage backend.
///
/// Build one per page load and pass it to each handler. Two sessions over the
/// same backend do not coordinate; whichever writes last wins.
pub struct Storefront {
    pub(crate) cart: CartStore,
    pub(crate) orders: OrderLog,
    pub(crate) customizer: MealCustomizer,
    pub(crate) pricing: PricingConfig,
    pub(crate) toasts: Arc<ToastQueue>,
}

impl Storefront {
    /// Open the backend named in `config` and restore the saved cart.
    pub fn open(config: &Config) -> Result<Self, AppError> {
        let store = prepbite_store::open_store(&config.storage)?;
        Self::with_store(store, config)
    }

    pub fn with_store(store: Arc<dyn KeyValueStore>, config: &Config) -> Result<Self, AppError> {
        let toasts = Arc::new(ToastQueue::new(config.notifications));
        let cart = CartStore::open_with_key(store.clone(), toasts.clone(), config.storage.cart_key.clone())?;
        let orders = OrderLog::with_key(store, config.storage.orders_key.clone());

        tracing::debug!("Storefront session opened with {} cart item(s)", cart.item_count());
        Ok(Self {
            cart,
            orders,
            customizer: MealCustomizer::new(config.pricing.clone()),
            pricing: config.pricing.clone(),
            toasts,
        })
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn customizer(&self) -> &MealCustomizer {
        &self.customizer
    }

    pub fn orders(&self) -> &OrderLog {
        &self.orders
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }
}
