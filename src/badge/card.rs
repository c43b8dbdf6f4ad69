//! The stats card itself: fixed 800x320 layout with a totals header and a
//! top-languages bar chart.

use std::fmt::Write;

use crate::stats::{Breakdown, DEFAULT_TOP_LANGUAGES};

use super::format::{format_thousands, xml_escape};
use super::palette::color_for;

/// Rendered card dimensions.
pub const CARD_WIDTH: u32 = 800;
pub const CARD_HEIGHT: u32 = 320;

/// Vertical position of the first language row and the step between rows.
const ROW_START_Y: u32 = 160;
const ROW_STEP: u32 = 25;

/// Bar geometry: the track starts at `BAR_X` and spans the card width minus
/// room for the name and count columns.
const BAR_X: u32 = 180;
const BAR_HEIGHT: u32 = 16;
const BAR_TRACK_WIDTH: u32 = CARD_WIDTH - 350;

const MARGIN_X: u32 = 40;

const FONT_FAMILY: &str = "'SF Mono', 'Monaco', 'Courier New', monospace";

const BACKGROUND_COLOR: &str = "#000000";
const ACCENT_COLOR: &str = "#b30000";
const ACCENT_GRADIENT_END: &str = "#ff0000";
const DIVIDER_COLOR: &str = "#30363d";
const TRACK_COLOR: &str = "#21262d";
const TEXT_COLOR: &str = "#ffffff";
const FOOTER_COLOR: &str = "#00FFFF";

/// Renderer for the stats card.
#[derive(Debug)]
pub struct BadgeCard<'a> {
    breakdown: &'a Breakdown,
    top: usize,
}

impl<'a> BadgeCard<'a> {
    #[must_use]
    pub const fn new(breakdown: &'a Breakdown) -> Self {
        Self {
            breakdown,
            top: DEFAULT_TOP_LANGUAGES,
        }
    }

    /// Limit the chart to the first `n` ranked languages.
    #[must_use]
    pub const fn with_top(mut self, n: usize) -> Self {
        self.top = n;
        self
    }

    /// Render the complete card as an SVG document.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::new();
        Self::render_frame(&mut svg);
        self.render_header(&mut svg);
        self.render_chart(&mut svg);
        Self::render_footer(&mut svg);
        svg.push_str("</svg>\n");
        svg
    }

    /// Document open tag, gradient definition, background, and accent strip.
    fn render_frame(svg: &mut String) {
        let _ = writeln!(
            svg,
            r#"<svg width="{CARD_WIDTH}" height="{CARD_HEIGHT}" xmlns="http://www.w3.org/2000/svg">"#
        );
        let _ = writeln!(svg, "  <defs>");
        let _ = writeln!(
            svg,
            r#"    <linearGradient id="accent-gradient" x1="0%" y1="0%" x2="100%" y2="0%">"#
        );
        let _ = writeln!(
            svg,
            r#"      <stop offset="0%" style="stop-color:{ACCENT_COLOR};stop-opacity:1"/>"#
        );
        let _ = writeln!(
            svg,
            r#"      <stop offset="100%" style="stop-color:{ACCENT_GRADIENT_END};stop-opacity:0.8"/>"#
        );
        let _ = writeln!(svg, "    </linearGradient>");
        let _ = writeln!(svg, "  </defs>");
        let _ = writeln!(
            svg,
            r#"  <rect width="{CARD_WIDTH}" height="{CARD_HEIGHT}" fill="{BACKGROUND_COLOR}" rx="10"/>"#
        );
        let _ = writeln!(
            svg,
            r##"  <rect x="10" y="10" width="{}" height="3" fill="url(#accent-gradient)" rx="1.5"/>"##,
            CARD_WIDTH - 20
        );
    }

    /// Totals, divider, and the chart section heading.
    fn render_header(&self, svg: &mut String) {
        let total_code = format_thousands(self.breakdown.total_code);
        let total_files = format_thousands(self.breakdown.total_files);

        let _ = writeln!(
            svg,
            r#"  <text x="{MARGIN_X}" y="55" font-family="{FONT_FAMILY}" font-size="32" font-weight="700" fill="{TEXT_COLOR}">{total_code}</text>"#
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{MARGIN_X}" y="80" font-family="{FONT_FAMILY}" font-size="14" fill="{TEXT_COLOR}">LINES OF CODE</text>"#
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="55" font-family="{FONT_FAMILY}" font-size="24" font-weight="600" fill="{TEXT_COLOR}" text-anchor="end">{total_files}</text>"#,
            CARD_WIDTH - MARGIN_X
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="75" font-family="{FONT_FAMILY}" font-size="12" fill="{TEXT_COLOR}" text-anchor="end">FILES</text>"#,
            CARD_WIDTH - MARGIN_X
        );
        let _ = writeln!(
            svg,
            r#"  <line x1="30" y1="100" x2="{}" y2="100" stroke="{DIVIDER_COLOR}" stroke-width="1"/>"#,
            CARD_WIDTH - 30
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{MARGIN_X}" y="130" font-family="{FONT_FAMILY}" font-size="16" font-weight="600" fill="{ACCENT_COLOR}">TOP LANGUAGES</text>"#
        );
    }

    /// One row per ranked language: name, track, proportional bar, count,
    /// and share of the total.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn render_chart(&self, svg: &mut String) {
        let top = self.breakdown.top(self.top);

        // Safe denominators for the empty chart and the all-zero document.
        let max_code = top.first().map_or(1, |lang| lang.code).max(1);
        let total_code = self.breakdown.total_code.max(1);

        for (index, language) in top.iter().enumerate() {
            let y = ROW_START_Y + ROW_STEP * index as u32;
            let bar_y = y - 12;
            let bar_width = (language.code as f64 / max_code as f64) * f64::from(BAR_TRACK_WIDTH);
            let percentage = (language.code as f64 / total_code as f64) * 100.0;
            let color = color_for(&language.name);
            let name = xml_escape(&language.name);
            let code = format_thousands(language.code);

            let _ = writeln!(
                svg,
                r#"  <text x="{MARGIN_X}" y="{y}" font-family="{FONT_FAMILY}" font-size="13" fill="{TEXT_COLOR}">{name}</text>"#
            );
            let _ = writeln!(
                svg,
                r#"  <rect x="{BAR_X}" y="{bar_y}" width="{BAR_TRACK_WIDTH}" height="{BAR_HEIGHT}" fill="{TRACK_COLOR}" rx="4"/>"#
            );
            let _ = writeln!(
                svg,
                r#"  <rect x="{BAR_X}" y="{bar_y}" width="{bar_width:.1}" height="{BAR_HEIGHT}" fill="{color}" rx="4" opacity="0.8"/>"#
            );
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{y}" font-family="{FONT_FAMILY}" font-size="12" fill="{TEXT_COLOR}">{code}</text>"#,
                BAR_X + BAR_TRACK_WIDTH + 20
            );
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{y}" font-family="{FONT_FAMILY}" font-size="12" fill="{TEXT_COLOR}" text-anchor="end">{percentage:.1}%</text>"#,
                CARD_WIDTH - MARGIN_X
            );
        }
    }

    fn render_footer(svg: &mut String) {
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" font-family="{FONT_FAMILY}" font-size="10" fill="{FOOTER_COLOR}" text-anchor="end">Updated automatically via GitHub Actions</text>"#,
            CARD_WIDTH - 20,
            CARD_HEIGHT - 10
        );
    }
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
