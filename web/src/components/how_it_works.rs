use leptos::prelude::*;

use crate::content::STEPS;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="bg-slate-900/40 py-24">
            <div class="mx-auto max-w-5xl px-6">
                <h2 class="text-center text-3xl font-bold text-white md:text-4xl">"How it works"</h2>
                <ol class="mt-14 grid gap-8 md:grid-cols-3">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(idx, step)| view! {
                            <li class="relative rounded-2xl border border-white/10 p-6">
                                <span class="flex h-10 w-10 items-center justify-center rounded-full bg-emerald-500 font-bold text-slate-950">
                                    {idx + 1}
                                </span>
                                <h3 class="mt-4 text-lg font-semibold text-white">{step.title}</h3>
                                <p class="mt-2 text-sm text-slate-400">{step.description}</p>
                            </li>
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn numbers_steps_from_one() {
        let html = view! { <HowItWorks /> }.to_html();

        assert_eq!(html.matches("<li").count(), STEPS.len());
        let first = html.find(STEPS[0].title).unwrap();
        let last = html.find(STEPS[STEPS.len() - 1].title).unwrap();
        assert!(first < last);
    }
}
