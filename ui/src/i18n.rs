//! Internationalization (i18n) support for `farmsmart-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `unic-langid` (language identifiers)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en-US/farmsmart-ui.ftl   (fallback/reference)
//!   hi-IN/farmsmart-ui.ftl   (Hindi)
//! ```
//!
//! Unlike a single global loader that is re-pointed on every language switch,
//! each supported [`Locale`] gets its own loader, and the resulting
//! [`ContentBundle`] is built once and kept for the life of the process.
//! Switching language is a pointer swap; nothing is re-parsed at runtime.
//!
//! Public API surface:
//! - [`Locale`] – the closed set of supported locales.
//! - [`content`] – resolve the immutable bundle for a locale.
//! - [`load_persisted_locale`] / [`persist_locale`] – durable locale preference.
//! - [`embedded_languages`] – discover embedded language folders.
use std::fmt;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

use crate::content::ContentBundle;
use crate::core::storage::{self, StorageError};

/// Fluent "domain" (matches the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "farmsmart-ui";

const FALLBACK_TAG: &str = "en-US";

/// Preference key holding the locale token.
pub const LOCALE_STORAGE_KEY: &str = "farmsmart.locale";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Hi,
}

impl Locale {
    /// Picker order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Hi];

    /// Short token used for storage and form values.
    pub fn token(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
        }
    }

    /// Accepts the short token or the full language tag, case-insensitively.
    pub fn from_token(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" => Some(Locale::En),
            "hi" | "hi-in" => Some(Locale::Hi),
            _ => None,
        }
    }

    /// Folder name under `i18n/`.
    pub fn language_tag(self) -> &'static str {
        match self {
            Locale::En => FALLBACK_TAG,
            Locale::Hi => "hi-IN",
        }
    }

    pub fn language_id(self) -> LanguageIdentifier {
        self.language_tag()
            .parse()
            .expect("static language tags are valid identifiers")
    }

    /// Name shown in the language picker, written in the language itself.
    pub fn display_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Hi => "हिंदी",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Build a loader holding `locale` with the English fallback behind it.
fn loader_for(locale: Locale) -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = FALLBACK_TAG
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[locale.language_id()]) {
        warn!(%locale, %err, "failed selecting language; continuing with fallback");
    }
    loader
}

static EN_CONTENT: Lazy<ContentBundle> =
    Lazy::new(|| ContentBundle::from_loader(&loader_for(Locale::En)));
static HI_CONTENT: Lazy<ContentBundle> =
    Lazy::new(|| ContentBundle::from_loader(&loader_for(Locale::Hi)));

/// Resolve the content bundle for `locale`. Built on first use, never mutated.
pub fn content(locale: Locale) -> &'static ContentBundle {
    match locale {
        Locale::En => &EN_CONTENT,
        Locale::Hi => &HI_CONTENT,
    }
}

/// List embedded language folders (e.g. `en-US`).
pub fn embedded_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Read the stored locale preference, falling back to the default.
pub fn load_persisted_locale() -> Locale {
    resolve_stored_locale(storage::read_preference(LOCALE_STORAGE_KEY))
}

/// Store the locale preference. Failures are logged and otherwise ignored.
pub fn persist_locale(locale: Locale) {
    match storage::write_preference(LOCALE_STORAGE_KEY, locale.token()) {
        Ok(()) => debug!(%locale, "locale preference saved"),
        Err(err) => warn!(%locale, %err, "could not save locale preference"),
    }
}

fn resolve_stored_locale(stored: Result<Option<String>, StorageError>) -> Locale {
    match stored {
        Ok(Some(token)) => Locale::from_token(&token).unwrap_or_else(|| {
            warn!(token = %token, "ignoring unknown stored locale");
            Locale::default()
        }),
        Ok(None) => Locale::default(),
        Err(err) => {
            warn!(%err, "could not read locale preference");
            Locale::default()
        }
    }
}
