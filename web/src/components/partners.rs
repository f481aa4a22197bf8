use leptos::prelude::*;

use crate::content::PARTNERS;
use crate::types::Partner;

/// Partner logo marquee.
///
/// The list is rendered twice in one track so the CSS animation can
/// translate by half its width and loop without a gap.
#[component]
pub fn Partners(#[prop(default = PARTNERS)] partners: &'static [Partner]) -> impl IntoView {
    view! {
        <section id="partners" class="border-y border-white/5 bg-slate-900/40 py-14">
            <p class="mb-8 text-center text-sm uppercase tracking-widest text-slate-400">
                "Built with the best in Web3"
            </p>
            <div class="relative flex overflow-hidden [mask-image:linear-gradient(to_right,transparent,black_10%,black_90%,transparent)]">
                <div class="flex min-w-max animate-marquee items-center gap-16 pr-16">
                    {partners
                        .iter()
                        .chain(partners.iter())
                        .map(|partner| view! {
                            <img
                                src=partner.logo
                                alt=partner.name
                                loading="lazy"
                                class="h-10 w-auto opacity-70 grayscale transition hover:opacity-100 hover:grayscale-0"
                            />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_each_partner_twice() {
        let html = view! { <Partners /> }.to_html();

        assert_eq!(html.matches("<img").count(), PARTNERS.len() * 2);
        for partner in PARTNERS {
            assert_eq!(html.matches(partner.logo).count(), 2, "{}", partner.name);
        }
    }

    #[test]
    fn custom_partner_list() {
        static TWO: &[Partner] = &[
            Partner {
                name: "Alpha",
                logo: "https://cdn.example/alpha.png",
            },
            Partner {
                name: "Alpha",
                logo: "https://cdn.example/alpha.png",
            },
        ];

        let html = view! { <Partners partners=TWO /> }.to_html();

        assert_eq!(html.matches("<img").count(), 4);
        assert_eq!(html.matches("alt=\"Alpha\"").count(), 4);
    }

    #[test]
    fn empty_partner_list_renders_empty_track() {
        let html = view! { <Partners partners=&[] /> }.to_html();

        assert_eq!(html.matches("<img").count(), 0);
        assert!(html.contains("id=\"partners\""));
    }
}
