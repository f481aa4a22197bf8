//! Static site content and constants.
//!
//! Partner and feature lists are display data: order is display order and
//! nothing enforces uniqueness.

use crate::types::{Feature, Partner, Stat, Step, TokenAsset};

/// Brand name used in the header and footer
pub const BRAND: &str = "BondFi";

/// Document title for the static export
pub const PAGE_TITLE: &str = "BondFi | Save together, send anywhere";

/// Dashboard route the call-to-action links point at
pub const DASHBOARD_ROUTE: &str = "/bondfi/dashboard";

/// Base URL of the image CDN
pub const CDN_BASE: &str = "https://res.cloudinary.com/bondfi/image/upload";

/// Hero illustration
pub const HERO_IMAGE: &str =
    "https://res.cloudinary.com/bondfi/image/upload/v1745312400/landing/hero-circle.png";

/// Brand logo
pub const LOGO: &str = "https://res.cloudinary.com/bondfi/image/upload/v1745312400/landing/logo.svg";

/// The BFI token registered by the hero call-to-action
pub const BFI_TOKEN: TokenAsset = TokenAsset {
    address: "0x8a4f3f5c2b9e6d1a7c0e4b3d2f1a9e8c7b6d5a40",
    symbol: "BFI",
    decimals: 18,
};

/// Partners in marquee order
pub static PARTNERS: &[Partner] = &[
    Partner {
        name: "Ethereum",
        logo: "https://res.cloudinary.com/bondfi/image/upload/v1745312400/partners/ethereum.png",
    },
    Partner {
        name: "MetaMask",
        logo: "https://res.cloudinary.com/bondfi/image/upload/v1745312400/partners/metamask.png",
    },
    Partner {
        name: "Chainlink",
        logo: "https://res.cloudinary.com/bondfi/image/upload/v1745312400/partners/chainlink.png",
    },
    Partner {
        name: "Circle",
        logo: "https://res.cloudinary.com/bondfi/image/upload/v1745312400/partners/circle.png",
    },
    Partner {
        name: "Etherscan",
        logo: "https://res.cloudinary.com/bondfi/image/upload/v1745312400/partners/etherscan.png",
    },
    Partner {
        name: "WalletConnect",
        logo: "https://res.cloudinary.com/bondfi/image/upload/v1745312400/partners/walletconnect.png",
    },
];

/// Feature cards in grid order
pub static FEATURES: &[Feature] = &[
    Feature {
        title: "Savings Circles",
        description: "Join or start a rotating savings group with friends and family. \
                      Contributions and payouts are enforced on-chain, so nobody has to hold the pot.",
        icon: "◎",
        gradient: Some("from-emerald-500 to-teal-600"),
    },
    Feature {
        title: "Cross-Border Transfers",
        description: "Send stablecoins home in minutes instead of days, \
                      with fees you can see before you confirm.",
        icon: "⇄",
        gradient: Some("from-sky-500 to-indigo-600"),
    },
    Feature {
        title: "Yield on Idle Funds",
        description: "Circle balances waiting for the next payout earn yield \
                      instead of sitting still.",
        icon: "↗",
        gradient: Some("from-amber-400 to-orange-600"),
    },
    Feature {
        title: "On-Chain Reputation",
        description: "Every contribution you make on time builds a portable \
                      credit history that unlocks larger circles.",
        icon: "★",
        gradient: None,
    },
];

/// Hero stats; values are rounded to two places when rendered
pub static STATS: &[Stat] = &[
    Stat {
        label: "Saved in circles",
        value: 182_450.237,
        prefix: "$",
        suffix: "",
    },
    Stat {
        label: "Average circle yield",
        value: 6.4851,
        prefix: "",
        suffix: "%",
    },
    Stat {
        label: "Transfer fee",
        value: 0.499,
        prefix: "",
        suffix: "%",
    },
];

/// Primary navigation anchors as (label, href)
pub static NAV_LINKS: &[(&str, &str)] = &[
    ("Features", "#features"),
    ("How it works", "#how-it-works"),
    ("Partners", "#partners"),
];

/// "How it works" steps in order
pub static STEPS: &[Step] = &[
    Step {
        title: "Connect your wallet",
        description: "Use MetaMask or any browser wallet on the Sepolia test network.",
    },
    Step {
        title: "Join a circle",
        description: "Pick a group, contribution amount and schedule that fits you.",
    },
    Step {
        title: "Contribute and receive",
        description: "Pay in each round; when your turn comes, the pot is sent to you automatically.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partner_logos_come_from_cdn() {
        for partner in PARTNERS {
            assert!(
                partner.logo.starts_with(CDN_BASE),
                "{} logo not on CDN",
                partner.name
            );
        }
        assert!(HERO_IMAGE.starts_with(CDN_BASE));
        assert!(LOGO.starts_with(CDN_BASE));
    }

    #[test]
    fn bfi_token_is_a_valid_watch_asset() {
        let asset = crate::wallet::WatchAsset::new(
            BFI_TOKEN.address,
            BFI_TOKEN.symbol,
            BFI_TOKEN.decimals,
        );
        assert!(asset.is_ok());
    }
}
