//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BISTRO_TAX_BPS=900                                                 │
//! │     BISTRO_SELECTIONS=101x2,900x1                                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $BISTRO_CONFIG, or ~/.config/bistro-pos/bistro.toml (Linux)        │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     10% discount, 7% tax, 10% service charge                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [pricing]
//! discount_rate = 1000
//! tax_rate = 700
//! service_charge_rate = 1000
//! quantity_policy = "stamp_copy"
//!
//! [session]
//! table_id = 12
//! staff_id = 7
//! staff_name = "Ahmad"
//! member = true
//! output = "text"
//! show_menu = false
//! selections = [ { code = 101, quantity = 2 }, { code = 900, quantity = 1 } ]
//! ```

use bistro_core::{CoreError, PricingConfig, QuantityPolicy, Rate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

// =============================================================================
// Output Format
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Printed receipt.
    #[default]
    Text,
    /// `InvoiceSummary` as pretty JSON.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "receipt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidConfig(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// One menu code and how many to order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub code: u32,
    pub quantity: u32,
}

impl std::str::FromStr for Selection {
    type Err = CliError;

    /// Parses `CODExQTY`, e.g. `101x2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            CliError::InvalidConfig(format!("Invalid selection '{}', expected CODExQTY", s))
        };
        let (code, quantity) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        Ok(Selection {
            code: code.trim().parse().map_err(|_| invalid())?,
            quantity: quantity.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// The table being served in this run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_table_id")]
    pub table_id: u32,

    #[serde(default = "default_staff_id")]
    pub staff_id: u32,

    #[serde(default = "default_staff_name")]
    pub staff_name: String,

    #[serde(default)]
    pub member: bool,

    #[serde(default)]
    pub output: OutputFormat,

    /// Print the catalog before the invoice.
    #[serde(default)]
    pub show_menu: bool,

    #[serde(default = "default_selections")]
    pub selections: Vec<Selection>,
}

fn default_table_id() -> u32 {
    1
}

fn default_staff_id() -> u32 {
    1
}

fn default_staff_name() -> String {
    "Server".to_string()
}

fn default_selections() -> Vec<Selection> {
    vec![
        Selection { code: 101, quantity: 2 },
        Selection { code: 900, quantity: 1 },
    ]
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            table_id: default_table_id(),
            staff_id: default_staff_id(),
            staff_name: default_staff_name(),
            member: false,
            output: OutputFormat::default(),
            show_menu: false,
            selections: default_selections(),
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (bistro.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_toml(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> CliResult<()> {
        self.pricing.validate()?;

        if self.session.selections.is_empty() {
            return Err(CliError::InvalidConfig(
                "at least one selection is required".into(),
            ));
        }

        Ok(())
    }

    /// Applies `BISTRO_*` overrides read through `lookup`.
    ///
    /// Unparseable numbers are logged and ignored; an unknown policy, output
    /// format or selection list is an error.
    fn apply_env_overrides<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bps = |key: &str| -> Option<Rate> {
            let raw = lookup(key)?;
            match raw.trim().parse::<u32>() {
                Ok(v) => {
                    debug!(key, bps = v, "Overriding rate from environment");
                    Some(Rate::from_bps(v))
                }
                Err(_) => {
                    warn!(key, value = %raw, "Ignoring non-numeric rate in environment");
                    None
                }
            }
        };

        if let Some(rate) = bps("BISTRO_DISCOUNT_BPS") {
            self.pricing.discount_rate = rate;
        }
        if let Some(rate) = bps("BISTRO_TAX_BPS") {
            self.pricing.tax_rate = rate;
        }
        if let Some(rate) = bps("BISTRO_SERVICE_CHARGE_BPS") {
            self.pricing.service_charge_rate = rate;
        }

        if let Some(policy) = lookup("BISTRO_QUANTITY_POLICY") {
            self.pricing.quantity_policy = policy
                .parse::<QuantityPolicy>()
                .map_err(CoreError::from)?;
        }

        if let Some(table) = lookup("BISTRO_TABLE_ID") {
            match table.trim().parse() {
                Ok(id) => self.session.table_id = id,
                Err(_) => warn!(value = %table, "Ignoring invalid BISTRO_TABLE_ID"),
            }
        }

        if let Some(staff) = lookup("BISTRO_STAFF_ID") {
            match staff.trim().parse() {
                Ok(id) => self.session.staff_id = id,
                Err(_) => warn!(value = %staff, "Ignoring invalid BISTRO_STAFF_ID"),
            }
        }

        if let Some(member) = lookup("BISTRO_MEMBER") {
            self.session.member = matches!(
                member.trim().to_lowercase().as_str(),
                "1" | "true" | "yes"
            );
        }

        if let Some(output) = lookup("BISTRO_OUTPUT") {
            self.session.output = output.parse()?;
        }

        if let Some(list) = lookup("BISTRO_SELECTIONS") {
            self.session.selections = list
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(str::parse)
                .collect::<CliResult<Vec<Selection>>>()?;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "bistro", "bistro-pos")
            .map(|dirs| dirs.config_dir().join("bistro.toml"))
    }
}
