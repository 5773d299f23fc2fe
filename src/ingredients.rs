use crate::model::{DrinkDetail, Ingredient, IngredientSlot};

/// Build the ingredient list of a drink in slot order.
///
/// A slot whose ingredient is missing or blank is skipped whatever its
/// measure says. An ingredient without a measure is kept with an empty
/// measure. Repeated names are not merged.
pub fn extract_ingredients(drink: &DrinkDetail) -> Vec<Ingredient> {
    drink.slots.iter().filter_map(slot_to_ingredient).collect()
}

fn slot_to_ingredient(slot: &IngredientSlot) -> Option<Ingredient> {
    let name = slot.ingredient.as_deref().map(str::trim)?;
    if name.is_empty() {
        return None;
    }

    Some(Ingredient {
        name: name.to_string(),
        measure: slot
            .measure
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
    })
}
