//! Display colors for the language bars.

/// Fill color used for languages not present in the lookup table.
pub const FALLBACK_COLOR: &str = "#58a6ff";

/// Fixed lookup table from language name to bar fill color.
const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("Python", "#0080FF"),
    ("JavaScript", "#FFD700"),
    ("TypeScript", "#00CED1"),
    ("Rust", "#dea584"),
    ("Go", "#00ADD8"),
    ("Java", "#b07219"),
    ("Ruby", "#701516"),
    ("C", "#555555"),
    ("C++", "#f34b7d"),
    ("C#", "#178600"),
    ("PHP", "#4F5D95"),
    ("Swift", "#ffac45"),
    ("Kotlin", "#F18E33"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("Sass", "#CC0066"),
    ("SCSS", "#c6538c"),
    ("Shell", "#89e051"),
    ("Haskell", "#5e5086"),
    ("Vue", "#41b883"),
    ("JSON", "#b30000"),
];

/// Look up the display color for a language.
#[must_use]
pub fn color_for(language: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .copied()
        .find(|&(name, _)| name == language)
        .map_or(FALLBACK_COLOR, |(_, color)| color)
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
