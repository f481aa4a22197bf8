//! Landing page sections.

mod features;
mod footer;
mod header;
mod hero;
mod how_it_works;
mod landing;
mod partners;

pub use features::{DEFAULT_GRADIENT, FeatureCard, FeaturesSection};
pub use footer::Footer;
pub use header::Header;
pub use hero::HeroSection;
pub use how_it_works::HowItWorks;
pub use landing::BondfiLanding;
pub use partners::Partners;
