use prepbite_catalog::CustomizationSelection;
use prepbite_order::OrderRecord;
use serde::Serialize;

pub fn format_price(amount: i64) -> String {
    format!("₹{}", amount)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealCard {
    pub id: &'static str,
    pub name: &'static str,
    pub price_label: String,
    pub prep_label: String,
    pub description: &'static str,
    pub customize_href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomizeView {
    pub meal_id: &'static str,
    pub meal_name: &'static str,
    pub base_price_label: String,
    pub final_price: i64,
    pub final_price_label: String,
    pub summary: String,
    pub selection: CustomizationSelection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartRow {
    /// Position to pass back when removing this row
    pub index: usize,
    pub name: String,
    pub customization: String,
    pub price_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CartView {
    Empty { message: String, hint: String },
    Items { rows: Vec<CartRow>, total_label: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub label: String,
    pub amount_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    pub rows: Vec<SummaryRow>,
    pub total_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub heading: String,
    pub message: String,
    pub order: OrderRecord,
}
