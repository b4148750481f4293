#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dimension {
    Mass,
    Volume,
}

/// Base-unit factors: grams for mass, millilitres for volume.
const CONVERSIONS: &[(&str, Dimension, f64)] = &[
    ("g", Dimension::Mass, 1.0),
    ("kg", Dimension::Mass, 1000.0),
    ("ml", Dimension::Volume, 1.0),
    ("l", Dimension::Volume, 1000.0),
    ("tsp", Dimension::Volume, 5.0),
    ("tbsp", Dimension::Volume, 15.0),
    ("cup", Dimension::Volume, 240.0),
];

const ALIASES: &[(&str, &str)] = &[
    ("gram", "g"),
    ("kilogram", "kg"),
    ("millilitre", "ml"),
    ("milliliter", "ml"),
    ("litre", "l"),
    ("liter", "l"),
    ("teaspoon", "tsp"),
    ("tablespoon", "tbsp"),
    ("tbs", "tbsp"),
];

/// Lowercased, trimmed unit with a plural "s" and long spellings folded away.
pub fn canonical_unit(unit: &str) -> String {
    let unit = unit.trim().to_lowercase();
    if let Some((_, canonical)) = ALIASES.iter().find(|(alias, _)| *alias == unit) {
        return (*canonical).to_owned();
    }

    let singular = singular(&unit);

    ALIASES
        .iter()
        .find(|(alias, _)| *alias == singular)
        .map(|(_, unit)| *unit)
        .unwrap_or(singular)
        .to_owned()
}

fn singular(unit: &str) -> &str {
    if let Some(stem) = unit.strip_suffix("es") {
        if ["ch", "sh", "x"].iter().any(|end| stem.ends_with(end)) {
            return stem;
        }
    }

    match unit.strip_suffix('s') {
        Some(stem) if stem.len() > 1 && !stem.ends_with('s') => stem,
        _ => unit,
    }
}

fn factor(unit: &str) -> Option<(Dimension, f64)> {
    CONVERSIONS
        .iter()
        .find(|(name, _, _)| *name == unit)
        .map(|(_, dimension, factor)| (*dimension, *factor))
}

/// Expresses `quantity` of `from` in `to`. `None` when the units cannot be compared.
///
/// Identical units return the quantity untouched so same-unit sums stay exact.
pub fn convert(quantity: f64, from: &str, to: &str) -> Option<f64> {
    let from = canonical_unit(from);
    let to = canonical_unit(to);

    if from == to {
        return Some(quantity);
    }

    let (from_dimension, from_factor) = factor(&from)?;
    let (to_dimension, to_factor) = factor(&to)?;

    (from_dimension == to_dimension).then(|| quantity * from_factor / to_factor)
}
