use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a closed option set whose values arrive as UI strings.
///
/// Every set carries an `Unrecognized` variant holding the raw string, so a
/// value outside the known labels still round-trips and displays as sent.
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Unrecognized(String),
        }

        impl $name {
            /// Known values in the order the UI offers them
            pub fn known() -> Vec<Self> {
                vec![$($name::$variant),+]
            }

            pub fn parse(value: &str) -> Self {
                match value {
                    $($label => $name::$variant,)+
                    other => $name::Unrecognized(other.to_string()),
                }
            }

            pub fn label(&self) -> &str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Unrecognized(raw) => raw.as_str(),
                }
            }

            pub fn is_recognized(&self) -> bool {
                !matches!(self, $name::Unrecognized(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.label().to_string()
            }
        }
    };
}

option_set! {
    /// Heat of the sauce pack. Display only, never priced.
    SpiceLevel, default = Medium {
        Mild => "Mild",
        Medium => "Medium",
        Hot => "Hot",
    }
}

option_set! {
    DietPreference, default = Vegetarian {
        Vegetarian => "Vegetarian",
        NonVegetarian => "Non-Vegetarian",
    }
}

option_set! {
    /// How many people the kit feeds.
    Servings, default = OnePerson {
        OnePerson => "1 Person",
        TwoPersons => "2 Persons",
        ThreePersons => "3 Persons",
    }
}

option_set! {
    ProteinLevel, default = Regular {
        Regular => "Regular",
        HighProtein => "High Protein",
    }
}

/// Which field of the selection a UI control writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomizationOption {
    SpiceLevel,
    DietPreference,
    Servings,
    ProteinLevel,
}

impl CustomizationOption {
    /// Parse the form field name (`spiceLevel`, `dietPreference`, ...).
    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "spiceLevel" => Some(Self::SpiceLevel),
            "dietPreference" => Some(Self::DietPreference),
            "servings" => Some(Self::Servings),
            "proteinLevel" => Some(Self::ProteinLevel),
            _ => None,
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            Self::SpiceLevel => "spiceLevel",
            Self::DietPreference => "dietPreference",
            Self::Servings => "servings",
            Self::ProteinLevel => "proteinLevel",
        }
    }
}

/// The in-progress choices for the meal being configured.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationSelection {
    pub spice_level: SpiceLevel,
    pub diet_preference: DietPreference,
    pub servings: Servings,
    pub protein_level: ProteinLevel,
}

impl CustomizationSelection {
    pub fn set(&mut self, option: CustomizationOption, value: &str) {
        tracing::debug!("Customization {} set to {:?}", option.field(), value);
        match option {
            CustomizationOption::SpiceLevel => self.spice_level = SpiceLevel::parse(value),
            CustomizationOption::DietPreference => {
                self.diet_preference = DietPreference::parse(value)
            }
            CustomizationOption::Servings => self.servings = Servings::parse(value),
            CustomizationOption::ProteinLevel => self.protein_level = ProteinLevel::parse(value),
        }
    }

    /// Apply a raw `(field, value)` pair from a form control.
    ///
    /// Returns `false` and leaves the selection untouched for an unknown field.
    pub fn update(&mut self, field: &str, value: &str) -> bool {
        match CustomizationOption::from_field(field) {
            Some(option) => {
                self.set(option, value);
                true
            }
            None => {
                tracing::warn!("Ignoring unknown customization field {:?}", field);
                false
            }
        }
    }

    /// One-line description stored on the cart item.
    pub fn summary(&self) -> String {
        format!(
            "{} Spice | {} Serving(s) | {}",
            self.spice_level, self.servings, self.diet_preference
        )
    }
}
