use leptos::prelude::*;

use crate::cn;
use crate::content::FEATURES;

/// Icon tile gradient for features that don't bring their own
pub const DEFAULT_GRADIENT: &str = "from-indigo-500 to-purple-600";

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="mx-auto max-w-7xl px-6 py-24">
            <div class="mx-auto max-w-2xl text-center">
                <p class="text-sm font-semibold uppercase tracking-widest text-emerald-400">"Why BondFi"</p>
                <h2 class="mt-3 text-3xl font-bold text-white md:text-4xl">
                    "Everything your savings group needs"
                </h2>
                <p class="mt-4 text-slate-400">
                    "The trust of a traditional savings circle, with the transparency of a public ledger."
                </p>
            </div>
            <div class="mt-16 grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                {FEATURES
                    .iter()
                    .map(|feature| view! {
                        <FeatureCard
                            title=feature.title
                            description=feature.description
                            icon=feature.icon
                            gradient=feature.gradient
                        />
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn FeatureCard(
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    gradient: Option<&'static str>,
) -> impl IntoView {
    let icon_class = cn!(
        "mb-5 flex h-12 w-12 items-center justify-center rounded-xl bg-gradient-to-br text-2xl text-white",
        DEFAULT_GRADIENT,
        gradient
    );

    view! {
        <article class="rounded-2xl border border-white/10 bg-slate-900/60 p-6 transition hover:border-emerald-400/40">
            <div class=icon_class aria-hidden="true">{icon}</div>
            <h3 class="text-lg font-semibold text-white">{title}</h3>
            <p class="mt-2 text-sm leading-relaxed text-slate-400">{description}</p>
        </article>
    }
}
