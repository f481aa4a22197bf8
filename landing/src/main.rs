// BondFi landing page, Leptos 0.8 CSR entry point
#![recursion_limit = "256"]

use bondfi_web::components::BondfiLanding;
use bondfi_web::content::BRAND;
use bondfi_web::wallet::{WalletConfig, wallet_config};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

fn main() {
    console_error_panic_hook::set_once();
    bondfi_web::logging::init(option_env!("BONDFI_LOG"));
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let config = wallet_config();
    if let Some(chain) = config.default_chain() {
        tracing::info!(
            chain = %chain.name,
            connectors = config.connectors.len(),
            "wallet config loaded"
        );
    }
    provide_context::<&'static WalletConfig>(config);

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=BondfiLanding />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="flex min-h-screen flex-col items-center justify-center gap-6 bg-slate-950 text-slate-100">
            <h1 class="text-5xl font-extrabold">"404"</h1>
            <p class="text-slate-400">"This page isn't part of the circle."</p>
            <a href="/" class="rounded-lg bg-emerald-500 px-5 py-2 font-semibold text-slate-950">
                {format!("Back to {BRAND}")}
            </a>
        </main>
    }
}
