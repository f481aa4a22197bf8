use leptos::prelude::*;

use super::{FeaturesSection, Footer, Header, HeroSection, HowItWorks, Partners};

/// The full landing page. Sections render top to bottom and share no state.
#[component]
pub fn BondfiLanding() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-950 font-sans text-slate-100 antialiased">
            <Header />
            <main>
                <HeroSection />
                <Partners />
                <FeaturesSection />
                <HowItWorks />
            </main>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn sections_render_in_fixed_order() {
        let html = view! { <BondfiLanding /> }.to_html();

        let markers = [
            "<header",
            "id=\"hero\"",
            "id=\"partners\"",
            "id=\"features\"",
            "id=\"how-it-works\"",
            "<footer",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|marker| {
                html.find(marker)
                    .unwrap_or_else(|| panic!("missing section marker {marker}"))
            })
            .collect();

        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "sections out of order: {positions:?}"
        );
    }
}
