use serde::Serialize;

use crate::ingredients::extract_ingredients;
use crate::measure::normalize_measure;
use crate::model::{DrinkDetail, Ingredient};
use crate::palette::color_for;

/// One wedge of the ingredient proportion chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub name: String,
    /// Fluid-ounce weight, always greater than zero
    pub value: f64,
    pub color: &'static str,
}

/// An ingredient as shown in the ingredient list, with its swatch color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLine {
    pub name: String,
    pub measure: String,
    pub color: &'static str,
}

impl IngredientLine {
    /// `name`, or `name (measure)` when there is a measure
    pub fn label(&self) -> String {
        if self.measure.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.measure)
        }
    }
}

/// Chart wedges for `ingredients`.
///
/// Colors are assigned by list position before anything is dropped, so a
/// wedge always matches its swatch in the ingredient list. Ingredients whose
/// measure weighs nothing are left out.
pub fn chart_slices(ingredients: &[Ingredient]) -> Vec<ChartSlice> {
    ingredients
        .iter()
        .enumerate()
        .map(|(index, ingredient)| ChartSlice {
            name: ingredient.name.clone(),
            value: normalize_measure(&ingredient.measure),
            color: color_for(index),
        })
        .filter(|slice| slice.value > 0.0)
        .collect()
}

/// Percentage of the chart taken by each slice, in slice order.
/// Empty when there is nothing to divide.
pub fn slice_shares(slices: &[ChartSlice]) -> Vec<f64> {
    let total: f64 = slices.iter().map(|slice| slice.value).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    slices
        .iter()
        .map(|slice| slice.value / total * 100.0)
        .collect()
}

pub fn ingredient_lines(ingredients: &[Ingredient]) -> Vec<IngredientLine> {
    ingredients
        .iter()
        .enumerate()
        .map(|(index, ingredient)| IngredientLine {
            name: ingredient.name.clone(),
            measure: ingredient.measure.clone(),
            color: color_for(index),
        })
        .collect()
}

/// Everything a detail page needs for one drink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrinkCard {
    pub drink: DrinkDetail,
    pub ingredients: Vec<Ingredient>,
    pub lines: Vec<IngredientLine>,
    pub slices: Vec<ChartSlice>,
}

impl DrinkCard {
    pub fn from_detail(drink: DrinkDetail) -> Self {
        let ingredients = extract_ingredients(&drink);
        let lines = ingredient_lines(&ingredients);
        let slices = chart_slices(&ingredients);

        DrinkCard {
            drink,
            ingredients,
            lines,
            slices,
        }
    }
}

impl From<DrinkDetail> for DrinkCard {
    fn from(drink: DrinkDetail) -> Self {
        DrinkCard::from_detail(drink)
    }
}
