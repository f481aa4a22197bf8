use leptos::prelude::*;

use crate::content::{BFI_TOKEN, BRAND, DASHBOARD_ROUTE};
use crate::utils::shorten_address_default;
use crate::wallet::{WalletConfig, wallet_config};

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<&'static WalletConfig>().unwrap_or_else(wallet_config);
    let chain = config.default_chain();
    let explorer = chain.and_then(|chain| chain.address_url(BFI_TOKEN.address));
    let network = chain.map(|chain| chain.name.clone()).unwrap_or_default();

    view! {
        <footer class="border-t border-white/10 py-12">
            <div class="mx-auto flex max-w-7xl flex-col items-center justify-between gap-6 px-6 md:flex-row">
                <div>
                    <span class="text-lg font-bold text-white">{BRAND}</span>
                    <p class="mt-1 text-sm text-slate-500">"Community savings and remittances, on-chain."</p>
                </div>
                <nav class="flex flex-wrap items-center gap-6 text-sm text-slate-400">
                    <a href="#features" class="hover:text-white">"Features"</a>
                    <a href="#how-it-works" class="hover:text-white">"How it works"</a>
                    <a href=DASHBOARD_ROUTE class="hover:text-white">"Dashboard"</a>
                    {explorer.map(|url| view! {
                        <a href=url target="_blank" rel="noopener noreferrer" class="font-mono hover:text-white">
                            {format!("{} on {}", shorten_address_default(BFI_TOKEN.address), network)}
                        </a>
                    })}
                </nav>
                <p class="text-xs text-slate-600">
                    {format!("© 2025 {BRAND}. All rights reserved.")}
                </p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::{Chain, Connector, Transport};
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn links_token_on_explorer() {
        let html = view! { <Footer /> }.to_html();

        assert!(html.contains(
            "href=\"https://sepolia.etherscan.io/address/0x8a4f3f5c2b9e6d1a7c0e4b3d2f1a9e8c7b6d5a40\""
        ));
        assert!(html.contains("0x8a4f...5a40 on Sepolia"));
        assert!(html.contains("© 2025 BondFi"));
    }

    #[test]
    fn prefers_provided_config() {
        let mainnet = Chain {
            id: 1,
            name: "Mainnet".into(),
            network: "homestead".into(),
            block_explorer: Some("https://etherscan.io".into()),
            testnet: false,
            ..Chain::sepolia()
        };
        let custom: &'static WalletConfig = Box::leak(Box::new(
            WalletConfig::builder()
                .chain(mainnet)
                .connector(Connector::Injected)
                .transport(1, Transport::http())
                .build()
                .unwrap(),
        ));

        let html = Owner::new().with(|| {
            provide_context(custom);
            view! { <Footer /> }.to_html()
        });

        assert!(html.contains("href=\"https://etherscan.io/address/"));
        assert!(html.contains("0x8a4f...5a40 on Mainnet"));
    }
}
