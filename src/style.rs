use alloc::vec::Vec;

use crate::sample::StampPlacement;

/// Vertical anchoring of a stamp glyph relative to the curve.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

/// Dash pattern for the curve itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineDash {
    Solid,
    Dashed,
}

/// The visual recipe of one front type: which symbols repeat along the
/// curve and how they and the curve are drawn.
///
/// Symbols rotate along the placements. Colours and baselines are cycled
/// against the symbol list: with fewer entries than symbols they wrap back
/// to the start, surplus entries are ignored. Meteorological glyphs in the
/// presets live in a private-use codepoint block and need the matching
/// symbol font to render.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrontStyle {
    pub name: &'static str,
    pub symbols: &'static [&'static str],
    pub colours: &'static [&'static str],
    pub baselines: &'static [TextBaseline],
    pub line_colour: &'static str,
    /// Colour of the parallel guide line, if the style draws one.
    pub guide_colour: Option<&'static str>,
    pub line_dash: LineDash,
}

/// A placement bound to its cycled symbol, colour, and baseline, ready for
/// a renderer to draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stamp<F> {
    pub placement: StampPlacement<F>,
    pub symbol: &'static str,
    pub colour: &'static str,
    pub baseline: TextBaseline,
}

impl FrontStyle {
    const fn plain(
        name: &'static str,
        symbols: &'static [&'static str],
        colours: &'static [&'static str],
    ) -> Self {
        FrontStyle {
            name,
            symbols,
            colours,
            baselines: &[TextBaseline::Bottom],
            line_colour: "black",
            guide_colour: None,
            line_dash: LineDash::Solid,
        }
    }

    /// Warm front: red semicircles on the advancing side.
    pub const fn warm() -> Self {
        Self::plain("warm", &["\u{f0187}"], &["red"])
    }

    /// Cold front: blue triangles on the advancing side.
    pub const fn cold() -> Self {
        Self::plain("cold", &["\u{f0186}"], &["blue"])
    }

    /// Occluded front: alternating semicircles and triangles, one colour.
    pub const fn occluded() -> Self {
        Self::plain("occluded", &["\u{f0187}", "\u{f0186}"], &["purple"])
    }

    /// Stationary front: warm and cold symbols alternating on opposite
    /// sides of the line, each in its own colour.
    pub const fn stationary() -> Self {
        FrontStyle {
            baselines: &[TextBaseline::Bottom, TextBaseline::Top],
            colours: &["#ff0000", "#0000ff"],
            ..Self::plain("stationary", &["\u{f0187}", "\u{f0188}"], &[])
        }
    }

    /// Dry intrusion: filled bars with a secondary guide line.
    pub const fn dry_intrusion() -> Self {
        FrontStyle {
            line_colour: "#00aaff",
            guide_colour: Some("fuchsia"),
            ..Self::plain("dryintrusion", &["\u{25ae}"], &["#00aaff"])
        }
    }

    /// Dry advection: cold-front symbols on a dashed line.
    pub const fn dry_advection() -> Self {
        FrontStyle {
            line_dash: LineDash::Dashed,
            ..Self::plain("dryadvection", &["\u{f0186}"], &["blue"])
        }
    }

    /// Warm advection: warm-front symbols on a dashed line.
    pub const fn warm_advection() -> Self {
        FrontStyle {
            line_dash: LineDash::Dashed,
            ..Self::plain("warmadvection", &["\u{f0187}"], &["red"])
        }
    }

    /// Convergence line.
    pub const fn convergence() -> Self {
        FrontStyle {
            baselines: &[TextBaseline::Middle],
            line_colour: "orange",
            ..Self::plain("convergence", &["\u{f0229}"], &["orange"])
        }
    }

    /// Squall line.
    pub const fn squall() -> Self {
        FrontStyle {
            baselines: &[TextBaseline::Middle],
            line_colour: "red",
            line_dash: LineDash::Dashed,
            ..Self::plain("squall", &["\u{f0226}"], &["red"])
        }
    }

    /// Streamline arrowed with dots.
    pub const fn streamline() -> Self {
        FrontStyle {
            baselines: &[TextBaseline::Middle],
            line_colour: "#00fe00",
            ..Self::plain("streamline", &["\u{25cf}"], &["#0000f0"])
        }
    }

    /// Low-level jet axis.
    pub const fn low_level_jet() -> Self {
        FrontStyle {
            baselines: &[TextBaseline::Middle],
            line_colour: "olive",
            ..Self::plain("lowleveljet", &["\u{f0200}"], &["olive"])
        }
    }

    /// The full preset catalogue in toolbar order.
    pub fn catalogue() -> [FrontStyle; 11] {
        [
            Self::warm(),
            Self::cold(),
            Self::occluded(),
            Self::stationary(),
            Self::dry_intrusion(),
            Self::dry_advection(),
            Self::warm_advection(),
            Self::convergence(),
            Self::squall(),
            Self::streamline(),
            Self::low_level_jet(),
        ]
    }

    /// Symbol for the placement at `index`, rotating through the list.
    pub fn symbol(&self, index: usize) -> &'static str {
        self.symbols[index % self.symbols.len()]
    }

    /// Colour for the symbol at `symbol_index`, wrapping when the colour
    /// list is shorter. Falls back to the line colour when no stamp colours
    /// are given.
    pub fn colour(&self, symbol_index: usize) -> &'static str {
        if self.colours.is_empty() {
            self.line_colour
        } else {
            self.colours[symbol_index % self.colours.len()]
        }
    }

    /// Baseline for the symbol at `symbol_index`, wrapping like colours.
    pub fn baseline(&self, symbol_index: usize) -> TextBaseline {
        if self.baselines.is_empty() {
            TextBaseline::Bottom
        } else {
            self.baselines[symbol_index % self.baselines.len()]
        }
    }

    /// Bind placements to their cycled symbols in drawing order. The
    /// rotation index runs over the whole placement sequence, so styles
    /// with alternating symbols keep alternating across segment joins.
    pub fn stamps<F: Copy>(&self, placements: &[StampPlacement<F>]) -> Vec<Stamp<F>> {
        if self.symbols.is_empty() {
            return Vec::new();
        }
        placements
            .iter()
            .enumerate()
            .map(|(index, &placement)| {
                let symbol_index = index % self.symbols.len();
                Stamp {
                    placement,
                    symbol: self.symbols[symbol_index],
                    colour: self.colour(symbol_index),
                    baseline: self.baseline(symbol_index),
                }
            })
            .collect()
    }
}
