pub mod meal;
pub mod customization;
pub mod pricing;

pub use meal::{Catalog, MealKit, DEFAULT_MEAL_ID};
pub use customization::{
    CustomizationOption, CustomizationSelection, DietPreference, ProteinLevel, Servings, SpiceLevel,
};
pub use pricing::{servings_multiplier, MealCustomizer, PriceBreakdown, PricingConfig};
