//! Plain-text rendering of search results and drink cards for the terminal.

use std::fmt::Write;

use crate::chart::{slice_shares, DrinkCard};
use crate::config::ChartConfig;
use crate::model::DrinkSummary;
use crate::palette::hex_to_rgb;

const SWATCH: &str = "■";
const BAR: char = '█';

/// Colored block for `color`, or a bare block when colors are off
fn swatch(color: &str, use_color: bool) -> String {
    match hex_to_rgb(color) {
        Some((r, g, b)) if use_color => format!("\x1b[38;2;{r};{g};{b}m{SWATCH}\x1b[0m"),
        _ => SWATCH.to_string(),
    }
}

pub fn render_search_results(drinks: &[DrinkSummary]) -> String {
    if drinks.is_empty() {
        return "No drinks found\n".to_string();
    }

    let id_width = drinks.iter().map(|d| d.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for drink in drinks {
        let _ = write!(out, "{:>id_width$}  {}", drink.id, drink.name);
        if let Some(category) = drink.category.as_deref().filter(|c| !c.is_empty()) {
            let _ = write!(out, "  [{category}]");
        }
        out.push('\n');
    }
    out
}

/// Render a drink detail page: header, ingredient list, proportion bars
/// and instructions.
pub fn render_card(card: &DrinkCard, chart: &ChartConfig) -> String {
    let drink = &card.drink;
    let mut out = String::new();

    let _ = writeln!(out, "{}", drink.name);
    let facts: Vec<&str> = [&drink.category, &drink.glass, &drink.alcoholic]
        .into_iter()
        .map(|fact| fact.trim())
        .filter(|fact| !fact.is_empty())
        .collect();
    if !facts.is_empty() {
        let _ = writeln!(out, "{}", facts.join(" · "));
    }
    let thumbnail = drink.thumbnail.trim();
    if !thumbnail.is_empty() {
        let _ = writeln!(out, "{thumbnail}");
    }

    out.push_str("\nIngredients:\n");
    if card.lines.is_empty() {
        out.push_str("  (none listed)\n");
    }
    for line in &card.lines {
        let _ = writeln!(out, "  {} {}", swatch(line.color, chart.use_color), line.label());
    }

    if chart.show_chart && !card.slices.is_empty() {
        out.push_str("\nProportions:\n");
        let name_width = card
            .slices
            .iter()
            .map(|slice| slice.name.chars().count())
            .max()
            .unwrap_or(0);

        for (slice, share) in card.slices.iter().zip(slice_shares(&card.slices)) {
            let filled = (share / 100.0 * chart.bar_width as f64).round() as usize;
            let bar: String = std::iter::repeat(BAR).take(filled).collect();
            let _ = writeln!(
                out,
                "  {} {:<name_width$}  {:<bar_width$}  {:>5.1}%",
                swatch(slice.color, chart.use_color),
                slice.name,
                bar,
                share,
                bar_width = chart.bar_width,
            );
        }
    }

    let instructions = drink.instructions.trim();
    if !instructions.is_empty() {
        let _ = write!(out, "\n{instructions}\n");
    }

    out
}
