use serde::{Deserialize, Serialize};

use crate::customization::{
    CustomizationOption, CustomizationSelection, DietPreference, ProteinLevel, Servings,
};
use crate::meal::MealKit;

/// Flat add-ons charged on top of the scaled base price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Charged when the diet preference is Non-Vegetarian
    pub non_vegetarian_surcharge: i64,

    /// Charged when the protein level is High Protein
    pub high_protein_surcharge: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            non_vegetarian_surcharge: 20,
            high_protein_surcharge: 20,
        }
    }
}

/// How a final price was reached. `total` is what the shopper pays per kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_price: i64,
    pub scaled_price: i64,
    pub diet_surcharge: i64,
    pub protein_surcharge: i64,
    pub total: i64,
}

/// Base price multiplier for a servings choice.
///
/// An unrecognized servings value leaves the price unscaled. No UI path
/// offers such a value today; a new option added to the form without a row
/// here would silently be sold at the single-serving price.
pub fn servings_multiplier(servings: &Servings) -> f64 {
    match servings {
        Servings::OnePerson => 1.0,
        Servings::TwoPersons => 1.5,
        Servings::ThreePersons => 2.0,
        Servings::Unrecognized(raw) => {
            tracing::warn!("No price multiplier for servings {:?}, pricing as unscaled", raw);
            1.0
        }
    }
}

/// Holds the meal being configured and its current selection, and prices it.
#[derive(Debug, Clone, Default)]
pub struct MealCustomizer {
    selected_meal: Option<&'static MealKit>,
    selection: CustomizationSelection,
    config: PricingConfig,
}

impl MealCustomizer {
    pub fn new(config: PricingConfig) -> Self {
        Self {
            selected_meal: None,
            selection: CustomizationSelection::default(),
            config,
        }
    }

    pub fn set_meal(&mut self, meal: &'static MealKit) {
        self.selected_meal = Some(meal);
    }

    pub fn selected_meal(&self) -> Option<&'static MealKit> {
        self.selected_meal
    }

    pub fn selection(&self) -> &CustomizationSelection {
        &self.selection
    }

    pub fn update_customization(&mut self, field: &str, value: &str) -> bool {
        self.selection.update(field, value)
    }

    pub fn set_option(&mut self, option: CustomizationOption, value: &str) {
        self.selection.set(option, value);
    }

    pub fn customization_summary(&self) -> String {
        self.selection.summary()
    }

    /// Price `base_price` under the current selection.
    ///
    /// Servings scale the base first, then the diet and protein surcharges are
    /// added, then the result is rounded to the nearest whole rupee.
    pub fn price_breakdown(&self, base_price: i64) -> PriceBreakdown {
        let scaled = base_price as f64 * servings_multiplier(&self.selection.servings);

        let diet_surcharge = match self.selection.diet_preference {
            DietPreference::NonVegetarian => self.config.non_vegetarian_surcharge,
            DietPreference::Vegetarian | DietPreference::Unrecognized(_) => 0,
        };

        let protein_surcharge = match self.selection.protein_level {
            ProteinLevel::HighProtein => self.config.high_protein_surcharge,
            ProteinLevel::Regular | ProteinLevel::Unrecognized(_) => 0,
        };

        let total = (scaled + diet_surcharge as f64 + protein_surcharge as f64).round() as i64;

        PriceBreakdown {
            base_price,
            scaled_price: scaled.round() as i64,
            diet_surcharge,
            protein_surcharge,
            total,
        }
    }

    pub fn calculate_price(&self, base_price: i64) -> i64 {
        self.price_breakdown(base_price).total
    }

    /// Price of the selected meal, if one has been chosen
    pub fn selected_meal_price(&self) -> Option<i64> {
        self.selected_meal
            .map(|meal| self.calculate_price(meal.base_price))
    }
}
