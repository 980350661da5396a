//! Locale-keyed display copy.
//!
//! A [`ContentBundle`] is read out of a Fluent loader once per locale (see
//! [`crate::i18n::content`]) and never mutated afterwards. Views receive a
//! `&'static ContentBundle` and only ever read from it.

use i18n_embed::fluent::FluentLanguageLoader;
use serde::Serialize;

use crate::core::geolocation::GeolocationError;
use crate::state::{AuthMode, ViewState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentBundle {
    pub nav: NavContent,
    pub hero: HeroContent,
    pub stats: Vec<Stat>,
    pub features: FeaturesContent,
    pub cta: CtaContent,
    pub footer: FooterContent,
    pub auth: AuthContent,
    pub dashboard: DashboardContent,
    pub analysis: AnalysisContent,
    pub marketplace: MarketplaceContent,
    pub community: CommunityContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavContent {
    pub solutions: String,
    pub company: String,
    pub contact: String,
    pub language_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub get_started: String,
    pub watch_demo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturesContent {
    pub title: String,
    pub items: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CtaContent {
    pub title: String,
    pub subtitle: String,
    pub button: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterGroup {
    /// Stable anchor id (`solutions`, `company`, `connect`).
    pub id: &'static str,
    pub title: String,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterContent {
    pub tagline: String,
    pub groups: Vec<FooterGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthModeCopy {
    pub title: String,
    pub subtitle: String,
    pub button: String,
    pub alt_text: String,
    pub alt_action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthContent {
    pub login: AuthModeCopy,
    pub signup: AuthModeCopy,
    pub fields: AuthFields,
    pub close: String,
}

impl AuthContent {
    pub fn mode(&self, mode: AuthMode) -> &AuthModeCopy {
        match mode {
            AuthMode::Login => &self.login,
            AuthMode::Signup => &self.signup,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickAction {
    pub view: ViewState,
    pub icon: &'static str,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardContent {
    pub welcome: String,
    pub greeting: String,
    pub default_user: String,
    pub quick_actions_title: String,
    pub actions: Vec<QuickAction>,
    pub logout: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisContent {
    pub title: String,
    pub subtitle: String,
    pub latitude: String,
    pub longitude: String,
    pub latitude_placeholder: String,
    pub longitude_placeholder: String,
    pub use_location: String,
    pub locating: String,
    pub samples: String,
    pub submit: String,
    pub submitting: String,
    pub cancel: String,
    pub failed: String,
    pub vegetation: String,
    pub healthy: String,
    pub stressed: String,
    pub soil: String,
    pub moisture_average: String,
    pub needs_irrigation: String,
    pub land_use: String,
    pub cropland: String,
    pub baresoil: String,
    pub critical: String,
    pub moisture_hotspots: String,
    pub stress_hotspots: String,
    pub severity_suffix: String,
    pub no_critical: String,
    pub geo_unavailable: String,
    pub geo_denied: String,
    pub geo_failed: String,
}

impl AnalysisContent {
    /// Localized notice for a failed location lookup. Platform error text is
    /// logged, never shown.
    pub fn geolocation_message(&self, err: &GeolocationError) -> &str {
        match err {
            GeolocationError::Unavailable => &self.geo_unavailable,
            GeolocationError::Denied => &self.geo_denied,
            GeolocationError::Failed(_) => &self.geo_failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketplaceContent {
    pub title: String,
    pub subtitle: String,
    pub add: String,
    pub search_placeholder: String,
    pub in_stock: String,
    pub out_of_stock: String,
    pub inquire: String,
    pub empty: String,
    pub add_title: String,
    pub field_name: String,
    pub field_name_placeholder: String,
    pub field_category: String,
    pub field_unit: String,
    pub field_unit_placeholder: String,
    pub field_price_min: String,
    pub field_price_max: String,
    pub field_price_min_placeholder: String,
    pub field_price_max_placeholder: String,
    pub field_description: String,
    pub field_description_placeholder: String,
    pub field_available: String,
    pub cancel: String,
    pub inquiry_title: String,
    pub inquiry_quantity: String,
    pub inquiry_message: String,
    pub inquiry_message_placeholder: String,
    pub inquiry_send: String,
    pub inquiry_sent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityContent {
    pub title: String,
    pub body: String,
}

impl ContentBundle {
    /// Read every message the views need out of `loader`.
    pub fn from_loader(loader: &FluentLanguageLoader) -> Self {
        let t = |id: &str| loader.get(id);

        let auth_mode = |prefix: &str| AuthModeCopy {
            title: t(&format!("{prefix}-title")),
            subtitle: t(&format!("{prefix}-subtitle")),
            button: t(&format!("{prefix}-button")),
            alt_text: t(&format!("{prefix}-alt-text")),
            alt_action: t(&format!("{prefix}-alt-action")),
        };

        Self {
            nav: NavContent {
                solutions: t("nav-solutions"),
                company: t("nav-company"),
                contact: t("nav-contact"),
                language_label: t("nav-language-label"),
            },
            hero: HeroContent {
                title: t("hero-title"),
                subtitle: t("hero-subtitle"),
                get_started: t("hero-get-started"),
                watch_demo: t("hero-watch-demo"),
            },
            stats: ["waste", "yield", "farmers"]
                .into_iter()
                .map(|key| Stat {
                    number: t(&format!("stat-{key}-number")),
                    label: t(&format!("stat-{key}-label")),
                })
                .collect(),
            features: FeaturesContent {
                title: t("features-title"),
                items: ["analysis", "recommendations", "community"]
                    .into_iter()
                    .map(|key| Feature {
                        icon: t(&format!("feature-{key}-icon")),
                        title: t(&format!("feature-{key}-title")),
                        description: t(&format!("feature-{key}-description")),
                    })
                    .collect(),
            },
            cta: CtaContent {
                title: t("cta-title"),
                subtitle: t("cta-subtitle"),
                button: t("cta-button"),
            },
            footer: FooterContent {
                tagline: t("footer-tagline"),
                groups: vec![
                    FooterGroup {
                        id: "solutions",
                        title: t("footer-solutions-title"),
                        links: vec![
                            t("footer-solutions-soil"),
                            t("footer-solutions-yield"),
                            t("footer-solutions-waste"),
                        ],
                    },
                    FooterGroup {
                        id: "company",
                        title: t("footer-company-title"),
                        links: vec![
                            t("footer-company-about"),
                            t("footer-company-careers"),
                            t("footer-company-contact"),
                        ],
                    },
                    FooterGroup {
                        id: "connect",
                        title: t("footer-connect-title"),
                        links: vec![
                            t("footer-connect-twitter"),
                            t("footer-connect-linkedin"),
                            t("footer-connect-email"),
                        ],
                    },
                ],
            },
            auth: AuthContent {
                login: auth_mode("auth-login"),
                signup: auth_mode("auth-signup"),
                fields: AuthFields {
                    name: t("auth-field-name"),
                    email: t("auth-field-email"),
                    password: t("auth-field-password"),
                    confirm_password: t("auth-field-confirm-password"),
                },
                close: t("auth-close"),
            },
            dashboard: DashboardContent {
                welcome: t("dashboard-welcome"),
                greeting: t("dashboard-greeting"),
                default_user: t("dashboard-default-user"),
                quick_actions_title: t("dashboard-quick-actions"),
                actions: vec![
                    QuickAction {
                        view: ViewState::Analysis,
                        icon: "🌱",
                        title: t("dashboard-action-analysis-title"),
                        description: t("dashboard-action-analysis-description"),
                    },
                    QuickAction {
                        view: ViewState::Marketplace,
                        icon: "🛒",
                        title: t("dashboard-action-marketplace-title"),
                        description: t("dashboard-action-marketplace-description"),
                    },
                    QuickAction {
                        view: ViewState::Community,
                        icon: "👥",
                        title: t("dashboard-action-community-title"),
                        description: t("dashboard-action-community-description"),
                    },
                ],
                logout: t("dashboard-logout"),
            },
            analysis: AnalysisContent {
                title: t("analysis-title"),
                subtitle: t("analysis-subtitle"),
                latitude: t("analysis-latitude"),
                longitude: t("analysis-longitude"),
                latitude_placeholder: t("analysis-latitude-placeholder"),
                longitude_placeholder: t("analysis-longitude-placeholder"),
                use_location: t("analysis-use-location"),
                locating: t("analysis-locating"),
                samples: t("analysis-samples"),
                submit: t("analysis-submit"),
                submitting: t("analysis-submitting"),
                cancel: t("analysis-cancel"),
                failed: t("analysis-failed"),
                vegetation: t("analysis-vegetation"),
                healthy: t("analysis-healthy"),
                stressed: t("analysis-stressed"),
                soil: t("analysis-soil"),
                moisture_average: t("analysis-moisture-average"),
                needs_irrigation: t("analysis-needs-irrigation"),
                land_use: t("analysis-land-use"),
                cropland: t("analysis-cropland"),
                baresoil: t("analysis-baresoil"),
                critical: t("analysis-critical"),
                moisture_hotspots: t("analysis-moisture-hotspots"),
                stress_hotspots: t("analysis-stress-hotspots"),
                severity_suffix: t("analysis-severity-suffix"),
                no_critical: t("analysis-no-critical"),
                geo_unavailable: t("analysis-geo-unavailable"),
                geo_denied: t("analysis-geo-denied"),
                geo_failed: t("analysis-geo-failed"),
            },
            marketplace: MarketplaceContent {
                title: t("market-title"),
                subtitle: t("market-subtitle"),
                add: t("market-add"),
                search_placeholder: t("market-search-placeholder"),
                in_stock: t("market-in-stock"),
                out_of_stock: t("market-out-of-stock"),
                inquire: t("market-inquire"),
                empty: t("market-empty"),
                add_title: t("market-add-title"),
                field_name: t("market-field-name"),
                field_name_placeholder: t("market-field-name-placeholder"),
                field_category: t("market-field-category"),
                field_unit: t("market-field-unit"),
                field_unit_placeholder: t("market-field-unit-placeholder"),
                field_price_min: t("market-field-price-min"),
                field_price_max: t("market-field-price-max"),
                field_price_min_placeholder: t("market-field-price-min-placeholder"),
                field_price_max_placeholder: t("market-field-price-max-placeholder"),
                field_description: t("market-field-description"),
                field_description_placeholder: t("market-field-description-placeholder"),
                field_available: t("market-field-available"),
                cancel: t("market-cancel"),
                inquiry_title: t("market-inquiry-title"),
                inquiry_quantity: t("market-inquiry-quantity"),
                inquiry_message: t("market-inquiry-message"),
                inquiry_message_placeholder: t("market-inquiry-message-placeholder"),
                inquiry_send: t("market-inquiry-send"),
                inquiry_sent: t("market-inquiry-sent"),
            },
            community: CommunityContent {
                title: t("community-title"),
                body: t("community-body"),
            },
        }
    }

    /// Localized hotspot line, e.g. `Field A - High level`.
    pub fn hotspot_line(&self, location: &str, severity: &str) -> String {
        format!(
            "{location} - {severity} {}",
            self.analysis.severity_suffix
        )
    }
}
