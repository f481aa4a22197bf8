//! # bondfi-web
//!
//! Leptos components and browser utilities for the BondFi landing page.
//!
//! The same components back two outputs:
//!
//! - the CSR single-page app in `bondfi-landing` (compiled to WASM and
//!   mounted into the document body), and
//! - [`render_landing`], which renders the page to a static HTML document.
//!
//! ## Modules
//!
//! - [`components`] - page sections (header, hero, partners, features, ...)
//! - [`content`] - static display data and site constants
//! - [`types`] - the shapes of that display data
//! - [`utils`] - class merging, address shortening, decimal rounding
//! - [`wallet`] - wallet connection config and the MetaMask watch-asset call
//! - [`logging`] - `tracing` subscriber that writes to the browser console
//!
//! ## Static export
//!
//! Behind the default `ssr` feature.
//!
//! ```rust
//! let html = bondfi_web::render_landing();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod components;
pub mod content;
pub mod logging;
pub mod types;
pub mod utils;
pub mod wallet;

#[cfg(feature = "ssr")]
use components::BondfiLanding;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the landing page to a complete HTML document.
///
/// Event handlers are not attached in the output; the markup matches what
/// the CSR app mounts on first paint.
#[cfg(feature = "ssr")]
pub fn render_landing() -> String {
    let body = view! { <BondfiLanding /> }.to_html();

    // Leptos doesn't include DOCTYPE or the document shell
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"/>\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\
         <title>{}</title></head><body>{}</body></html>",
        content::PAGE_TITLE,
        body
    )
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn renders_full_document() {
        let html = render_landing();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>BondFi"));
        assert!(html.contains(content::DASHBOARD_ROUTE));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn document_contains_every_section() {
        let html = render_landing();

        for id in ["id=\"hero\"", "id=\"partners\"", "id=\"features\"", "id=\"how-it-works\""] {
            assert!(html.contains(id), "missing {id}");
        }
        // marquee track holds the list twice
        assert_eq!(
            html.matches("<img").count() - 2,
            content::PARTNERS.len() * 2
        );
    }
}
