use prepbite_catalog::{Catalog, MealCustomizer, MealKit};
use prepbite_order::LineItem;

use crate::error::AppError;
use crate::state::Storefront;
use crate::views::{format_price, CustomizeView};

impl Storefront {
    /// Customize page load. The meal comes from the `meal` query parameter,
    /// falling back to the default kit, and every option starts at its default.
    pub fn open_customize(&mut self, meal_param: Option<&str>) -> CustomizeView {
        let meal = Catalog::resolve(meal_param);
        self.customizer = MealCustomizer::new(self.pricing.clone());
        self.customizer.set_meal(meal);

        tracing::debug!("Customizing {}", meal.id);
        self.customize_view(meal)
    }

    /// A form control changed. Returns the view with the refreshed price.
    pub fn select_option(&mut self, field: &str, value: &str) -> Result<CustomizeView, AppError> {
        let meal = self.customizer.selected_meal().ok_or(AppError::NoMealSelected)?;
        self.customizer.update_customization(field, value);
        Ok(self.customize_view(meal))
    }

    /// Snapshot the current configuration into the cart.
    pub fn add_to_cart(&mut self) -> Result<LineItem, AppError> {
        let meal = self.customizer.selected_meal().ok_or(AppError::NoMealSelected)?;
        let item = LineItem::from_customizer(meal, &self.customizer);
        self.cart.add_item(item.clone())?;
        Ok(item)
    }

    fn customize_view(&self, meal: &'static MealKit) -> CustomizeView {
        let final_price = self.customizer.calculate_price(meal.base_price);
        CustomizeView {
            meal_id: meal.id,
            meal_name: meal.name,
            base_price_label: format_price(meal.base_price),
            final_price,
            final_price_label: format_price(final_price),
            summary: self.customizer.customization_summary(),
            selection: self.customizer.selection().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prepbite_store::app_config::Config;
    use prepbite_store::MemoryStore;
    use std::sync::Arc;

    fn storefront() -> Storefront {
        Storefront::with_store(Arc::new(MemoryStore::new()), &Config::default()).unwrap()
    }

    #[test]
    fn test_open_customize_resolves_meal() {
        let mut shop = storefront();

        let view = shop.open_customize(Some("korean"));
        assert_eq!(view.meal_name, "Korean Rice Kit");
        assert_eq!(view.base_price_label, "₹160");
        assert_eq!(view.final_price_label, "₹160");

        let fallback = shop.open_customize(Some("sushi"));
        assert_eq!(fallback.meal_id, "hakka");
    }

    #[test]
    fn test_price_refreshes_on_each_change() {
        let mut shop = storefront();
        shop.open_customize(Some("hakka"));

        assert_eq!(shop.select_option("servings", "2 Persons").unwrap().final_price, 180);
        assert_eq!(shop.select_option("dietPreference", "Non-Vegetarian").unwrap().final_price, 200);
        let view = shop.select_option("proteinLevel", "High Protein").unwrap();
        assert_eq!(view.final_price_label, "₹220");
        assert_eq!(view.summary, "Medium Spice | 2 Persons Serving(s) | Non-Vegetarian");
    }

    #[test]
    fn test_reopening_resets_options() {
        let mut shop = storefront();
        shop.open_customize(Some("pasta"));
        shop.select_option("servings", "3 Persons").unwrap();

        let view = shop.open_customize(Some("pasta"));
        assert_eq!(view.final_price, 140);
    }

    #[test]
    fn test_add_to_cart_needs_a_meal() {
        let mut shop = storefront();
        assert!(matches!(shop.add_to_cart(), Err(AppError::NoMealSelected)));
        assert!(matches!(shop.select_option("servings", "2 Persons"), Err(AppError::NoMealSelected)));

        shop.open_customize(Some("friedrice"));
        let item = shop.add_to_cart().unwrap();
        assert_eq!(item.price, 130);
        assert_eq!(shop.cart().len(), 1);
    }
}
