mod analysis;
mod community;
mod dashboard;
mod landing;
mod marketplace;

pub use analysis::Analysis;
pub use community::Community;
pub use dashboard::{DashboardHome, DashboardShell};
pub use landing::{CtaSection, FeaturesSection, HeroSection, Landing, SiteFooter, StatsSection};
pub use marketplace::Marketplace;
