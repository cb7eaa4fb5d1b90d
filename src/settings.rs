use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    core::{month::Month, zone::Zone},
    prelude::*,
    quantity::{energy::KilowattHours, rate::OrePerKilowattHour},
    rates::FIRST_PUBLISHED_YEAR,
};

const SCHEMA_VERSION: i64 = 2;

/// Inputs persisted between runs — the moral equivalent of the browser
/// version's local storage. Loaded and migrated once at startup, saved back
/// after a successful run.
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    schema_version: i64,

    pub zone: Zone,

    /// Historical year to price against. `None` follows the current calendar
    /// year.
    pub year: Option<i32>,

    /// Fallback adjustment for months without their own value.
    pub adjustment: Option<OrePerKilowattHour>,

    #[serde(default)]
    months: Vec<MonthSettings>,
}

#[skip_serializing_none]
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct MonthSettings {
    pub month: Month,
    pub consumption: Option<KilowattHours>,
    pub adjustment: Option<OrePerKilowattHour>,
}

impl MonthSettings {
    const fn empty(month: Month) -> Self {
        Self { month, consumption: None, adjustment: None }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            zone: Zone::NO1,
            year: None,
            adjustment: None,
            months: Month::ALL.map(MonthSettings::empty).to_vec(),
        }
    }
}

impl Settings {
    /// Load the settings file, migrating a pre-versioned one on the fly.
    /// A missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let document: toml::Table = text
            .parse()
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        match document.get("schema_version").and_then(toml::Value::as_integer) {
            Some(SCHEMA_VERSION) => {
                toml::from_str(&text).context("failed to deserialize the settings")
            }
            Some(version) => {
                bail!("settings schema {version} is newer than this build understands")
            }
            None => {
                info!(path = %path.display(), "migrating pre-versioned settings…");
                let legacy: LegacySettings =
                    toml::from_str(&text).context("failed to deserialize the legacy settings")?;
                Ok(legacy.into())
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result {
        let text = toml::to_string_pretty(self).context("failed to serialize the settings")?;
        fs::write(path, text).with_context(|| format!("failed to write `{}`", path.display()))?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    pub fn month(&self, month: Month) -> MonthSettings {
        self.months
            .iter()
            .find(|entry| entry.month == month)
            .copied()
            .unwrap_or(MonthSettings::empty(month))
    }

    pub fn month_mut(&mut self, month: Month) -> &mut MonthSettings {
        let index = match self.months.iter().position(|entry| entry.month == month) {
            Some(index) => index,
            None => {
                self.months.push(MonthSettings::empty(month));
                self.months.len() - 1
            }
        };
        &mut self.months[index]
    }
}

/// The original layout had no schema marker: a flat surcharge and a boolean
/// preferring the newest year with data.
#[derive(Deserialize)]
struct LegacySettings {
    zone: Zone,

    #[serde(default)]
    prefer_newer_year: bool,

    surcharge: Option<OrePerKilowattHour>,

    #[serde(default)]
    consumption: Vec<KilowattHours>,
}

impl From<LegacySettings> for Settings {
    fn from(legacy: LegacySettings) -> Self {
        let mut settings = Self {
            zone: legacy.zone,
            year: (!legacy.prefer_newer_year).then_some(FIRST_PUBLISHED_YEAR),
            adjustment: legacy.surcharge,
            ..Self::default()
        };
        for (month, consumption) in Month::ALL.into_iter().zip(legacy.consumption) {
            settings.month_mut(month).consumption = Some(consumption);
        }
        settings
    }
}
