//! Registry and query configuration.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Data directories searched when `XDG_DATA_DIRS` is unset or empty.
pub const DEFAULT_DATA_DIRS: &[&str] = &["/usr/local/share", "/usr/share"];

/// Subdirectory of each data directory holding desktop entries.
pub const APPLICATIONS_SUBDIR: &str = "applications";

/// What to do when one application's label cannot be resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelFailurePolicy {
    /// Fail the whole query.
    #[default]
    Abort,
    /// Leave the application out of the result.
    Skip,
    /// Report the application under its identifier.
    UseIdentifier,
}

impl FromStr for LabelFailurePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            "use-identifier" => Ok(Self::UseIdentifier),
            other => Err(Error::new(ErrorKind::Config(format!(
                "unknown label failure policy {other:?} (expected abort, skip or use-identifier)"
            )))),
        }
    }
}

/// Options for a single inventory query.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Handling of per-record label failures.
    pub label_failure: LabelFailurePolicy,
}

impl QueryOptions {
    pub fn with_label_failure(mut self, policy: LabelFailurePolicy) -> Self {
        self.label_failure = policy;
        self
    }
}

/// A POSIX message locale, e.g. `sr_RS@latin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub lang: String,
    pub country: Option<String>,
    pub modifier: Option<String>,
}

impl Locale {
    /// Parse a `lang_COUNTRY.ENCODING@MODIFIER` locale string.
    ///
    /// Returns `None` for the `C` and `POSIX` locales and for empty input.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() || value == "C" || value == "POSIX" || value.starts_with("C.") {
            return None;
        }

        let (rest, modifier) = match value.split_once('@') {
            Some((rest, modifier)) => (rest, Some(modifier.to_string())),
            None => (value, None),
        };
        let rest = rest.split('.').next().unwrap_or(rest);
        let (lang, country) = match rest.split_once('_') {
            Some((lang, country)) => (lang, Some(country.to_string())),
            None => (rest, None),
        };
        if lang.is_empty() {
            return None;
        }

        Some(Self {
            lang: lang.to_string(),
            country,
            modifier,
        })
    }

    /// Key suffixes to try for localized desktop-entry values, most specific first.
    pub fn lookup_keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(4);
        if let (Some(country), Some(modifier)) = (&self.country, &self.modifier) {
            keys.push(format!("{}_{}@{}", self.lang, country, modifier));
        }
        if let Some(country) = &self.country {
            keys.push(format!("{}_{}", self.lang, country));
        }
        if let Some(modifier) = &self.modifier {
            keys.push(format!("{}@{}", self.lang, modifier));
        }
        keys.push(self.lang.clone());
        keys
    }
}

/// A directory scanned for desktop entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRoot {
    pub path: PathBuf,
    /// Entries found here are system-provided.
    pub is_system: bool,
}

/// Configuration for the desktop-entry registry.
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    /// User data directory (`$XDG_DATA_HOME`).
    pub data_home: Option<PathBuf>,
    /// System data directories (`$XDG_DATA_DIRS`), highest precedence first.
    pub data_dirs: Vec<PathBuf>,
    /// Locale used to pick localized names.
    pub locale: Option<Locale>,
}

impl RegistryConfig {
    /// Create a new registry config builder.
    pub fn builder() -> RegistryConfigBuilder {
        RegistryConfigBuilder::default()
    }

    /// Build a configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_home = lookup("XDG_DATA_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(dirs::data_dir);

        let mut data_dirs: Vec<PathBuf> = lookup("XDG_DATA_DIRS")
            .map(|value| {
                value
                    .split(':')
                    .map(PathBuf::from)
                    .filter(|p| p.is_absolute())
                    .collect()
            })
            .unwrap_or_default();
        if data_dirs.is_empty() {
            data_dirs = DEFAULT_DATA_DIRS.iter().map(PathBuf::from).collect();
        }

        let locale = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|key| lookup(*key))
            .find(|value| !value.is_empty())
            .and_then(|value| Locale::parse(&value));

        Self {
            data_home,
            data_dirs,
            locale,
        }
    }

    /// The `applications/` directories to scan, in precedence order.
    pub fn application_roots(&self) -> Vec<ApplicationRoot> {
        let user = self.data_home.iter().map(|dir| ApplicationRoot {
            path: dir.join(APPLICATIONS_SUBDIR),
            is_system: false,
        });
        let system = self
            .data_dirs
            .iter()
            .filter(|dir| Some(dir.as_path()) != self.data_home.as_deref())
            .map(|dir| ApplicationRoot {
                path: dir.join(APPLICATIONS_SUBDIR),
                is_system: true,
            });
        user.chain(system).collect()
    }
}

/// Builder for RegistryConfig.
#[derive(Debug, Default)]
pub struct RegistryConfigBuilder {
    config: RegistryConfig,
}

impl RegistryConfigBuilder {
    /// Set the user data directory.
    pub fn with_data_home(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.data_home = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Append a system data directory.
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.data_dirs.push(dir.as_ref().to_path_buf());
        self
    }

    /// Set the locale from a POSIX locale string.
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.config.locale = Locale::parse(locale);
        self
    }

    /// Build the registry configuration.
    pub fn build(self) -> RegistryConfig {
        self.config
    }
}
