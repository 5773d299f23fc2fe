//! Ounce-equivalent conversion tables.
//!
//! Both tables are ordered and searched front to back; the first keyword
//! that occurs anywhere in the measure wins. Keep plural forms after their
//! singular, and when adding an entry remember that anything it is a
//! substring of will now match it too.

/// Volume units, converted to fluid ounces
pub const VOLUME_UNITS: &[(&str, f64)] = &[
    ("oz", 1.0),
    ("ounce", 1.0),
    ("ounces", 1.0),
    ("shot", 1.5),
    ("shots", 1.5),
    ("jigger", 1.5),
    ("cl", 0.338),
    ("ml", 0.0338),
    ("tsp", 0.167),
    ("teaspoon", 0.167),
    ("teaspoons", 0.167),
    ("tbsp", 0.5),
    ("tablespoon", 0.5),
    ("tablespoons", 0.5),
    ("cup", 8.0),
    ("cups", 8.0),
    ("pint", 16.0),
    ("pints", 16.0),
    ("dash", 0.03),
    ("dashes", 0.03),
    ("splash", 0.25),
    ("splashes", 0.25),
    ("drop", 0.0017),
    ("drops", 0.0017),
    ("part", 1.0),
    ("parts", 1.0),
    ("glass", 8.0),
    ("can", 12.0),
    ("bottle", 12.0),
];

/// Garnish counts, given a nominal ounce weight so they still show up small
pub const GARNISH_UNITS: &[(&str, f64)] = &[
    ("twist", 0.1),
    ("twists", 0.1),
    ("slice", 0.2),
    ("slices", 0.2),
    ("wedge", 0.3),
    ("wedges", 0.3),
    ("sprig", 0.1),
    ("sprigs", 0.1),
    ("leaf", 0.05),
    ("leaves", 0.05),
    ("piece", 0.2),
    ("pieces", 0.2),
    ("cube", 0.2),
    ("cubes", 0.2),
    ("scoop", 4.0),
    ("scoops", 4.0),
];

/// First `(keyword, factor)` in `table` whose keyword occurs in `text`
pub fn find_unit(
    table: &'static [(&'static str, f64)],
    text: &str,
) -> Option<(&'static str, f64)> {
    table
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .copied()
}
