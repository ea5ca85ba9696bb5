//! Parser for freedesktop `.desktop` files.
//!
//! Only the `[Desktop Entry]` group is kept; action groups and other
//! vendor groups are skipped. Values are unescaped (`\s`, `\n`, `\t`, `\r`,
//! `\\`); list values and `Exec` field codes are left as written.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::Locale;
use crate::error::{Error, ErrorKind, Result};

const DESKTOP_ENTRY_GROUP: &str = "Desktop Entry";

/// The `[Desktop Entry]` group of a desktop file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesktopEntry {
    fields: BTreeMap<String, String>,
}

impl DesktopEntry {
    /// Parse desktop-file contents. `path` is only used in error messages.
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        let mut fields = BTreeMap::new();
        let mut current_group: Option<&str> = None;
        let mut saw_entry_group = false;

        let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
        for (index, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(group) = line.strip_prefix('[') {
                let group = group
                    .strip_suffix(']')
                    .ok_or_else(|| parse_error(path, index, "unterminated group header"))?;
                if group == DESKTOP_ENTRY_GROUP {
                    if saw_entry_group {
                        return Err(parse_error(path, index, "duplicate [Desktop Entry] group"));
                    }
                    saw_entry_group = true;
                }
                current_group = Some(group);
                continue;
            }

            let group = current_group
                .ok_or_else(|| parse_error(path, index, "key outside of any group"))?;
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| parse_error(path, index, "expected key=value"))?;
            let key = key.trim_end();
            if key.is_empty() {
                return Err(parse_error(path, index, "empty key"));
            }

            if group == DESKTOP_ENTRY_GROUP {
                fields.insert(key.to_string(), unescape(value.trim_start()));
            }
        }

        if !saw_entry_group {
            return Err(parse_error(path, 0, "missing [Desktop Entry] group"));
        }

        Ok(Self { fields })
    }

    /// Build an entry from already-parsed fields.
    pub fn from_fields(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Boolean keys are true only when spelled `true`.
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    /// Look up `key[<locale>]` along the locale fallback chain, then `key`.
    pub fn get_localized(&self, key: &str, locale: Option<&Locale>) -> Option<&str> {
        if let Some(locale) = locale {
            for suffix in locale.lookup_keys() {
                if let Some(value) = self.get(&format!("{key}[{suffix}]")) {
                    return Some(value);
                }
            }
        }
        self.get(key)
    }

    pub fn entry_type(&self) -> Option<&str> {
        self.get("Type")
    }

    pub fn is_application(&self) -> bool {
        self.entry_type() == Some("Application")
    }

    /// `Hidden=true` means the entry was deleted by the user or admin.
    pub fn is_hidden(&self) -> bool {
        self.get_bool("Hidden")
    }

    /// Whether the entry can be launched from a menu.
    pub fn is_launchable(&self) -> bool {
        let has_exec = self.get("Exec").is_some_and(|exec| !exec.trim().is_empty());
        has_exec && !self.get_bool("NoDisplay")
    }

    pub fn into_fields(self) -> BTreeMap<String, String> {
        self.fields
    }
}

fn parse_error(path: &Path, index: usize, message: &str) -> Error {
    Error::new(ErrorKind::DesktopEntry {
        path: path.to_path_buf(),
        line: index + 1,
        message: message.to_string(),
    })
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('s') => out.push(' '),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            // `\;` and friends belong to list syntax; keep them verbatim
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
