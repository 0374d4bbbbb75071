use serde::Serialize;

/// Id of the meal shown when a lookup misses.
pub const DEFAULT_MEAL_ID: &str = "hakka";

/// A meal kit on the menu. Prices are whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealKit {
    pub id: &'static str,
    pub name: &'static str,
    pub base_price: i64,
    pub prep_time: &'static str,
    pub description: &'static str,
}

static MEALS: [MealKit; 6] = [
    MealKit {
        id: "hakka",
        name: "Hakka Noodles Kit",
        base_price: 120,
        prep_time: "10 min",
        description: "Classic Indo-Chinese noodles with fresh vegetables and flavorful sauces.",
    },
    MealKit {
        id: "pasta",
        name: "White Sauce Pasta Kit",
        base_price: 140,
        prep_time: "12 min",
        description: "Creamy pasta with herbs and rich white sauce.",
    },
    MealKit {
        id: "friedrice",
        name: "Fried Rice Kit",
        base_price: 130,
        prep_time: "10 min",
        description: "Perfectly seasoned rice with mixed vegetables and sauces.",
    },
    MealKit {
        id: "paneertikka",
        name: "Paneer Tikka Kit",
        base_price: 150,
        prep_time: "15 min",
        description: "Marinated paneer cubes with authentic spices.",
    },
    MealKit {
        id: "korean",
        name: "Korean Rice Kit",
        base_price: 160,
        prep_time: "15 min",
        description: "Korean-style rice bowl with flavorful sauces and vegetables.",
    },
    MealKit {
        id: "manchurian",
        name: "Manchurian Kit",
        base_price: 140,
        prep_time: "12 min",
        description: "Crispy vegetable balls with tangy Manchurian sauce.",
    },
];

/// The compiled-in menu. Read-only for the lifetime of the process.
pub struct Catalog;

impl Catalog {
    /// All meals in menu order
    pub fn all() -> &'static [MealKit] {
        &MEALS
    }

    pub fn find(id: &str) -> Option<&'static MealKit> {
        MEALS.iter().find(|meal| meal.id == id)
    }

    pub fn default_meal() -> &'static MealKit {
        &MEALS[0]
    }

    /// Look up a meal by id, falling back to the default meal for a missing
    /// or unknown id.
    pub fn resolve(id: Option<&str>) -> &'static MealKit {
        match id {
            Some(id) => Self::find(id).unwrap_or_else(|| {
                tracing::warn!("Unknown meal id {:?}, showing {}", id, DEFAULT_MEAL_ID);
                Self::default_meal()
            }),
            None => Self::default_meal(),
        }
    }
}
