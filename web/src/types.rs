//! Display data shapes rendered by the landing sections.
//!
//! Everything here is a compile-time literal: created at module load,
//! passed by reference as props, never mutated.

/// A partner shown in the logo marquee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partner {
    /// Display name, also used as the image `alt` text
    pub name: &'static str,
    /// Absolute CDN URL of the logo
    pub logo: &'static str,
}

/// A product feature rendered as a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Card heading
    pub title: &'static str,
    /// One or two sentences under the heading
    pub description: &'static str,
    /// Glyph shown in the icon tile
    pub icon: &'static str,
    /// Tailwind gradient stops for the icon tile, e.g. `from-emerald-500 to-teal-600`
    pub gradient: Option<&'static str>,
}

/// A numbered step in the "how it works" walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Short step name
    pub title: &'static str,
    /// What the user does in this step
    pub description: &'static str,
}

/// An ERC-20 token the page offers to register in the user's wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAsset {
    /// Contract address (`0x`-prefixed hex)
    pub address: &'static str,
    /// Ticker symbol
    pub symbol: &'static str,
    /// Token decimals
    pub decimals: u8,
}

/// A headline number in the hero strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: f64,
    /// Rendered before the number, e.g. `$`
    pub prefix: &'static str,
    /// Rendered after the number, e.g. `%`
    pub suffix: &'static str,
}
