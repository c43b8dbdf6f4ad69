//! Static SVG stats card rendering.
//!
//! Fixed-layout card: totals in the header, a red accent gradient strip,
//! and one horizontal bar per top-ranked language.

mod card;
mod format;
mod palette;

pub use card::{BadgeCard, CARD_HEIGHT, CARD_WIDTH};
pub use format::{format_thousands, xml_escape};
pub use palette::{FALLBACK_COLOR, color_for};
