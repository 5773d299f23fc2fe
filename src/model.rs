use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of numbered ingredient/measure pairs a catalog record can carry
pub const SLOT_COUNT: usize = 15;

/// A search hit from `search.php`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrinkSummary {
    #[serde(rename = "idDrink")]
    pub id: String,
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strDrinkThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strAlcoholic", default)]
    pub alcoholic: Option<String>,
    #[serde(rename = "strGlass", default)]
    pub glass: Option<String>,
}

/// One numbered ingredient/measure pair, exactly as the catalog sent it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSlot {
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

/// A full recipe record from `lookup.php`.
///
/// The catalog flattens ingredients into `strIngredient1..15` and
/// `strMeasure1..15`. Decoding looks each of those keys up by name and
/// stores them positionally in `slots`, so `slots[0]` is slot 1. Keys the
/// record doesn't know about are dropped, and non-string values are treated
/// the same as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct DrinkDetail {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: String,
    pub alcoholic: String,
    pub glass: String,
    pub instructions: String,
    pub slots: [IngredientSlot; SLOT_COUNT],
}

/// An ingredient line extracted from a [`DrinkDetail`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    /// Trimmed, never empty
    pub name: String,
    /// Trimmed, empty when the catalog had no measure
    pub measure: String,
}

fn ingredient_key(slot: usize) -> String {
    format!("strIngredient{slot}")
}

fn measure_key(slot: usize) -> String {
    format!("strMeasure{slot}")
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

impl DrinkDetail {
    /// Decode a single record (not the `{"drinks": [...]}` envelope)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Slot by its 1-based catalog index
    pub fn slot(&self, index: usize) -> Option<&IngredientSlot> {
        index.checked_sub(1).and_then(|i| self.slots.get(i))
    }
}

impl From<Map<String, Value>> for DrinkDetail {
    fn from(fields: Map<String, Value>) -> Self {
        let field = |key: &str| text_field(&fields, key).unwrap_or_default();

        let slots = std::array::from_fn(|i| IngredientSlot {
            ingredient: text_field(&fields, &ingredient_key(i + 1)),
            measure: text_field(&fields, &measure_key(i + 1)),
        });

        DrinkDetail {
            id: field("idDrink"),
            name: field("strDrink"),
            thumbnail: field("strDrinkThumb"),
            category: field("strCategory"),
            alcoholic: field("strAlcoholic"),
            glass: field("strGlass"),
            instructions: field("strInstructions"),
            slots,
        }
    }
}

impl From<DrinkDetail> for Map<String, Value> {
    fn from(drink: DrinkDetail) -> Self {
        let mut fields = Map::new();
        fields.insert("idDrink".into(), drink.id.into());
        fields.insert("strDrink".into(), drink.name.into());
        fields.insert("strDrinkThumb".into(), drink.thumbnail.into());
        fields.insert("strCategory".into(), drink.category.into());
        fields.insert("strAlcoholic".into(), drink.alcoholic.into());
        fields.insert("strGlass".into(), drink.glass.into());
        fields.insert("strInstructions".into(), drink.instructions.into());

        for (i, slot) in drink.slots.into_iter().enumerate() {
            fields.insert(ingredient_key(i + 1), slot.ingredient.into());
            fields.insert(measure_key(i + 1), slot.measure.into());
        }

        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fixed_fields_decode() {
        let drink: DrinkDetail = serde_json::from_value(json!({
            "idDrink": "11007",
            "strDrink": "Margarita",
            "strDrinkThumb": "https://example.com/margarita.jpg",
            "strCategory": "Ordinary Drink",
            "strAlcoholic": "Alcoholic",
            "strGlass": "Cocktail glass",
            "strInstructions": "Rub the rim of the glass with the lime slice.",
            "strTags": "IBA,ContemporaryClassic"
        }))
        .unwrap();

        assert_eq!(drink.id, "11007");
        assert_eq!(drink.name, "Margarita");
        assert_eq!(drink.glass, "Cocktail glass");
        assert!(drink.slots.iter().all(|s| s.ingredient.is_none()));
    }

    #[test]
    fn test_null_and_missing_fixed_fields_become_empty() {
        let drink: DrinkDetail = serde_json::from_value(json!({
            "idDrink": "1",
            "strDrink": "Test",
            "strCategory": null
        }))
        .unwrap();

        assert_eq!(drink.category, "");
        assert_eq!(drink.instructions, "");
    }

    #[test]
    fn test_slots_are_positional() {
        let drink: DrinkDetail = serde_json::from_value(json!({
            "strIngredient3": "Lime",
            "strMeasure3": "1 wedge",
            "strIngredient1": "Vodka",
            "strMeasure15": "garnish",
            "strIngredient16": "ignored"
        }))
        .unwrap();

        assert_eq!(drink.slot(1).unwrap().ingredient.as_deref(), Some("Vodka"));
        assert_eq!(drink.slot(1).unwrap().measure, None);
        assert_eq!(drink.slot(3).unwrap().measure.as_deref(), Some("1 wedge"));
        assert_eq!(drink.slot(15).unwrap().measure.as_deref(), Some("garnish"));
        assert!(drink.slot(0).is_none());
        assert!(drink.slot(16).is_none());
    }

    #[test]
    fn test_non_string_values_are_treated_as_null() {
        let drink: DrinkDetail = serde_json::from_value(json!({
            "idDrink": 42,
            "strIngredient1": ["Vodka"],
            "strMeasure1": 2
        }))
        .unwrap();

        assert_eq!(drink.id, "");
        assert_eq!(drink.slots[0], IngredientSlot::default());
    }

    #[test]
    fn test_serializes_back_to_flat_record() {
        let drink = DrinkDetail::from_json(
            r#"{"idDrink": "1", "strDrink": "Test", "strIngredient2": "Gin", "strMeasure2": "2 oz"}"#,
        )
        .unwrap();

        let value = serde_json::to_value(&drink).unwrap();
        assert_eq!(value["strIngredient2"], "Gin");
        assert_eq!(value["strMeasure2"], "2 oz");
        assert_eq!(value["strIngredient1"], Value::Null);

        let back: DrinkDetail = serde_json::from_value(value).unwrap();
        assert_eq!(back, drink);
    }

    #[test]
    fn test_summary_optional_fields() {
        let summary: DrinkSummary = serde_json::from_value(json!({
            "idDrink": "11007",
            "strDrink": "Margarita",
            "strDrinkThumb": null
        }))
        .unwrap();

        assert_eq!(summary.name, "Margarita");
        assert!(summary.thumbnail.is_none());
        assert!(summary.category.is_none());
    }
}
