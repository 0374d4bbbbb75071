use chrono::{DateTime, SubsecRound, Utc};
use prepbite_catalog::{MealCustomizer, MealKit};
use prepbite_shared::Masked;
use serde::{Deserialize, Serialize};

/// One add-to-cart action, frozen at the moment it happened.
///
/// Later changes to the customizer never reach an item already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub base_price: i64,
    pub price: i64,
    pub customization: String,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(
        name: impl Into<String>,
        base_price: i64,
        price: i64,
        customization: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_price,
            price,
            customization: customization.into(),
            quantity: 1,
        }
    }

    /// Snapshot `meal` as priced and described by `customizer` right now.
    pub fn from_customizer(meal: &MealKit, customizer: &MealCustomizer) -> Self {
        Self::new(
            meal.name,
            meal.base_price,
            customizer.calculate_price(meal.base_price),
            customizer.customization_summary(),
        )
    }

    /// Quantities below one are raised to one.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    /// Price times quantity, saturating at the `i64` bounds.
    pub fn line_total(&self) -> i64 {
        self.price.saturating_mul(i64::from(self.quantity))
    }
}

/// Sum of line totals, saturating like [`LineItem::line_total`].
pub(crate) fn items_total(items: &[LineItem]) -> i64 {
    items
        .iter()
        .map(LineItem::line_total)
        .fold(0, i64::saturating_add)
}

/// A completed checkout. Appended to the order log once and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub customer_name: String,
    pub phone: Masked<String>,
    pub address: Masked<String>,
    pub city: String,
    pub pincode: String,
    pub items: Vec<LineItem>,
    pub total: i64,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl OrderRecord {
    pub fn new(
        customer_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        pincode: impl Into<String>,
        items: Vec<LineItem>,
        placed_at: DateTime<Utc>,
    ) -> Self {
        let total = items_total(&items);
        Self {
            customer_name: customer_name.into(),
            phone: Masked::new(phone.into()),
            address: Masked::new(address.into()),
            city: city.into(),
            pincode: pincode.into(),
            items,
            total,
            // Stored with millisecond precision; truncate so a reload compares equal.
            timestamp: placed_at.trunc_subsecs(3),
        }
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

/// ISO-8601 UTC with milliseconds, e.g. `2025-03-01T09:30:00.250Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
