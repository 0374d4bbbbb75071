use prepbite_catalog::{Catalog, MealKit};

use crate::views::{format_price, MealCard};

impl From<&'static MealKit> for MealCard {
    fn from(meal: &'static MealKit) -> Self {
        Self {
            id: meal.id,
            name: meal.name,
            price_label: format_price(meal.base_price),
            prep_label: format!("{} prep", meal.prep_time),
            description: meal.description,
            customize_href: format!("customize.html?meal={}", meal.id),
        }
    }
}

/// Menu listing, in catalog order
pub fn meal_cards() -> Vec<MealCard> {
    Catalog::all().iter().map(MealCard::from).collect()
}
