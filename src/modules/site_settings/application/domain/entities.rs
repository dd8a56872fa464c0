use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::shared::validation::{optional_text, ValidationError};

/// Settings editable from the admin settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettingKey {
    SiteName,
    SiteTagline,
    ContactEmail,
    LinkedinUrl,
    GithubUrl,
}

impl SettingKey {
    pub const ALL: [SettingKey; 5] = [
        SettingKey::SiteName,
        SettingKey::SiteTagline,
        SettingKey::ContactEmail,
        SettingKey::LinkedinUrl,
        SettingKey::GithubUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::SiteName => "site_name",
            SettingKey::SiteTagline => "site_tagline",
            SettingKey::ContactEmail => "contact_email",
            SettingKey::LinkedinUrl => "linkedin_url",
            SettingKey::GithubUrl => "github_url",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown setting: {0}")]
pub struct UnknownSettingKey(pub String);

impl FromStr for SettingKey {
    type Err = UnknownSettingKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownSettingKey(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SiteSetting {
    pub setting_key: String,
    pub setting_value: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// `{ key: value }` view returned to the site.
pub type SettingsMap = BTreeMap<String, Option<String>>;

pub fn settings_map(rows: Vec<SiteSetting>) -> SettingsMap {
    rows.into_iter()
        .map(|s| (s.setting_key, s.setting_value))
        .collect()
}

/// Validated batch from `PUT /api/admin/settings`, in key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsUpdate(Vec<(SettingKey, Option<String>)>);

impl SettingsUpdate {
    pub fn entries(&self) -> &[(SettingKey, Option<String>)] {
        &self.0
    }

    pub fn into_entries(self) -> Vec<(SettingKey, Option<String>)> {
        self.0
    }
}

impl TryFrom<HashMap<String, Option<String>>> for SettingsUpdate {
    type Error = ValidationError;

    fn try_from(form: HashMap<String, Option<String>>) -> Result<Self, Self::Error> {
        let mut entries = form
            .into_iter()
            .map(|(key, value)| {
                let key = key
                    .parse::<SettingKey>()
                    .map_err(|e| ValidationError::new("settings", e.to_string()))?;
                Ok((key, optional_text(value)))
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        if entries.is_empty() {
            return Err(ValidationError::new("settings", "No settings to update"));
        }
        entries.sort_by_key(|(key, _)| *key);
        Ok(Self(entries))
    }
}
