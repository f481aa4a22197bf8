use leptos::prelude::*;

use crate::cn;
use crate::content::{BRAND, DASHBOARD_ROUTE, LOGO, NAV_LINKS};
use crate::wallet::{WalletConfig, wallet_config};

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    // The app shell provides the config; static rendering has no context.
    let config = use_context::<&'static WalletConfig>().unwrap_or_else(wallet_config);
    let network = config
        .default_chain()
        .map(|chain| chain.name.clone())
        .unwrap_or_default();

    view! {
        <header class="sticky top-0 z-50 w-full border-b border-white/10 bg-slate-950/80 backdrop-blur">
            <nav class="mx-auto flex max-w-7xl items-center justify-between px-6 py-4">
                <a href="/" class="flex items-center gap-2">
                    <img src=LOGO alt=BRAND class="h-8 w-8" />
                    <span class="text-xl font-bold tracking-tight text-white">{BRAND}</span>
                </a>

                <div class="hidden items-center gap-8 md:flex">
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| view! {
                            <a href=*href class="text-sm text-slate-300 transition hover:text-white">
                                {*label}
                            </a>
                        })
                        .collect_view()}
                </div>

                <div class="hidden items-center gap-3 md:flex">
                    <span class="rounded-full border border-emerald-400/40 px-3 py-1 text-xs text-emerald-300">
                        {network.clone()}
                    </span>
                    <a
                        href=DASHBOARD_ROUTE
                        class="rounded-lg bg-emerald-500 px-4 py-2 text-sm font-semibold text-slate-950 hover:bg-emerald-400"
                    >
                        "Launch App"
                    </a>
                </div>

                <button
                    class="rounded-md p-2 text-slate-200 md:hidden"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </nav>

            // Mobile drawer
            <div class=move || {
                cn!(
                    "flex flex-col gap-3 border-t border-white/10 px-6 pb-4 pt-3 md:hidden",
                    (!menu_open.get()).then_some("hidden")
                )
            }>
                {NAV_LINKS
                    .iter()
                    .map(|(label, href)| view! {
                        <a
                            href=*href
                            class="text-slate-300"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            {*label}
                        </a>
                    })
                    .collect_view()}
                <span class="text-xs text-emerald-300">{network}</span>
                <a href=DASHBOARD_ROUTE class="rounded-lg bg-emerald-500 px-4 py-2 text-center font-semibold text-slate-950">
                    "Launch App"
                </a>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn shows_network_and_dashboard_link() {
        let html = view! { <Header /> }.to_html();

        assert!(html.contains("Sepolia"));
        assert!(html.contains("href=\"/bondfi/dashboard\""));
        assert!(html.contains("href=\"#features\""));
    }

    #[test]
    fn mobile_drawer_starts_closed() {
        let html = view! { <Header /> }.to_html();

        // `flex` and `hidden` share the display group; the closed drawer keeps only `hidden`
        assert!(html.contains("class=\"flex-col gap-3 border-t border-white/10 px-6 pb-4 pt-3 md:hidden hidden\""));
    }
}
