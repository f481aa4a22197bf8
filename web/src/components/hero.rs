use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::content::{BFI_TOKEN, DASHBOARD_ROUTE, HERO_IMAGE, STATS};
use crate::types::Stat;
use crate::utils::{round_to_two_decimal_places, shorten_address_default};
use crate::wallet::add_token_to_metamask;

#[component]
pub fn HeroSection() -> impl IntoView {
    // Fire and forget: the outcome only reaches the log.
    let add_token = move |_| {
        spawn_local(add_token_to_metamask(
            BFI_TOKEN.address,
            BFI_TOKEN.symbol,
            BFI_TOKEN.decimals,
        ));
    };

    view! {
        <section id="hero" class="relative overflow-hidden">
            <div class="mx-auto grid max-w-7xl items-center gap-12 px-6 py-20 md:grid-cols-2 md:py-28">
                <div>
                    <span class="inline-flex items-center gap-2 rounded-full bg-emerald-500/10 px-3 py-1 text-xs font-medium text-emerald-300">
                        <span class="h-2 w-2 rounded-full bg-emerald-400"></span>
                        "Now live on Sepolia"
                    </span>
                    <h1 class="mt-6 text-4xl font-extrabold leading-tight text-white md:text-6xl">
                        "Save together."
                        <br />
                        <span class="bg-gradient-to-r from-emerald-400 to-sky-400 bg-clip-text text-transparent">
                            "Send anywhere."
                        </span>
                    </h1>
                    <p class="mt-6 max-w-xl text-lg text-slate-300">
                        "BondFi brings community savings circles on-chain and makes sending money "
                        "across borders as simple as a message. No middlemen holding the pot."
                    </p>
                    <div class="mt-8 flex flex-wrap gap-4">
                        <a
                            href=DASHBOARD_ROUTE
                            class="rounded-lg bg-emerald-500 px-6 py-3 font-semibold text-slate-950 hover:bg-emerald-400"
                        >
                            "Get Started"
                        </a>
                        <button
                            class="rounded-lg border border-white/20 px-6 py-3 font-semibold text-white hover:bg-white/5"
                            title=BFI_TOKEN.address
                            on:click=add_token
                        >
                            {format!("Add {} to MetaMask", BFI_TOKEN.symbol)}
                        </button>
                    </div>
                    <p class="mt-3 font-mono text-xs text-slate-500">
                        {format!("{} token: {}", BFI_TOKEN.symbol, shorten_address_default(BFI_TOKEN.address))}
                    </p>
                    <dl class="mt-10 grid grid-cols-3 gap-6">
                        {STATS.iter().map(|stat| view! { <StatItem stat=*stat /> }).collect_view()}
                    </dl>
                </div>
                <img
                    src=HERO_IMAGE
                    alt="Friends saving together in a BondFi circle"
                    class="w-full rounded-3xl shadow-2xl shadow-emerald-500/10"
                />
            </div>
        </section>
    }
}

#[component]
fn StatItem(stat: Stat) -> impl IntoView {
    let value = format!(
        "{}{}{}",
        stat.prefix,
        round_to_two_decimal_places(stat.value),
        stat.suffix
    );
    view! {
        <div>
            <dt class="text-xs uppercase tracking-wide text-slate-400">{stat.label}</dt>
            <dd class="mt-1 text-2xl font-bold text-white">{value}</dd>
        </div>
    }
}
