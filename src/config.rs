use crate::cli::CliArgs;
use crate::columns::{Column, ColumnToggles, select_columns};
use crate::model::RenderMode;
use crate::status::{LabelStyle, Thresholds};
use crate::units::{UnitFormatter, UnitPrefix, UnitSelection};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("can not set critical threshold less than warn threshold (warn:{warn} crit:{crit})")]
    InvalidThreshold { warn: i64, crit: i64 },

    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitName {
    B,
    K,
    M,
    G,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub warn_threshold: Option<i64>,
    #[serde(default)]
    pub crit_threshold: Option<i64>,
    #[serde(default)]
    pub unit: Option<UnitName>,
    #[serde(default)]
    pub binary_prefix: bool,
    #[serde(default)]
    pub without_unit: bool,
    #[serde(default)]
    pub no_color: bool,
    #[serde(default)]
    pub emoji: bool,
    #[serde(default)]
    pub no_metrics: bool,
}

impl ConfigFile {
    pub fn from_yaml(path: &Path, raw: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str::<Option<Self>>(raw)
            .map(Option::unwrap_or_default)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let Some(path) = explicit.map(Path::to_path_buf).or_else(discover_config_path) else {
            return Ok((Self::default(), None));
        };

        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let parsed = Self::from_yaml(&path, &raw)?;
        Ok((parsed, Some(path)))
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct NodeQuery {
    pub names: Vec<String>,
    pub label_selector: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FreeOptions {
    pub mode: RenderMode,
    pub units: UnitFormatter,
    pub style: LabelStyle,
    pub thresholds: Thresholds,
    pub metrics: bool,
    pub pod_detail: bool,
    pub list_image: bool,
    pub list_all: bool,
    pub headers: bool,
    pub nodes: NodeQuery,
}

impl Default for FreeOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::NodeSummary,
            units: UnitFormatter::new(UnitSelection::default(), UnitPrefix::Decimal, false),
            style: LabelStyle {
                color: true,
                emoji: false,
            },
            thresholds: Thresholds::default(),
            metrics: true,
            pod_detail: false,
            list_image: false,
            list_all: false,
            headers: true,
            nodes: NodeQuery::default(),
        }
    }
}

impl FreeOptions {
    pub fn resolve(args: &CliArgs, file: &ConfigFile) -> Result<Self, ConfigError> {
        let defaults = Thresholds::default();
        let thresholds = Thresholds {
            warn: args
                .warn_threshold
                .or(file.warn_threshold)
                .unwrap_or(defaults.warn),
            crit: args
                .crit_threshold
                .or(file.crit_threshold)
                .unwrap_or(defaults.crit),
        };
        validate_threshold(thresholds.warn, thresholds.crit)?;

        let cli_selection = UnitSelection {
            bytes: args.bytes,
            kilo: args.kilobytes,
            mega: args.megabytes,
            giga: args.gigabytes,
        };
        let selection = if cli_selection == UnitSelection::default() {
            file.unit.map(unit_selection).unwrap_or_default()
        } else {
            cli_selection
        };
        let prefix = if args.binary_prefix || file.binary_prefix {
            UnitPrefix::Binary
        } else {
            UnitPrefix::Decimal
        };

        Ok(Self {
            mode: if args.list {
                RenderMode::ContainerListing
            } else {
                RenderMode::NodeSummary
            },
            units: UnitFormatter::new(selection, prefix, args.without_unit || file.without_unit),
            style: LabelStyle {
                color: !(args.no_color || file.no_color),
                emoji: args.emoji || file.emoji,
            },
            thresholds,
            metrics: !(args.no_metrics || file.no_metrics),
            pod_detail: args.pod,
            list_image: args.list_image,
            list_all: args.list_all,
            headers: !args.no_headers,
            nodes: NodeQuery {
                names: args.nodes.clone(),
                label_selector: args
                    .label_selector
                    .as_deref()
                    .map(str::trim)
                    .filter(|selector| !selector.is_empty())
                    .map(str::to_string),
            },
        })
    }

    pub fn columns(&self) -> Vec<Column> {
        select_columns(
            self.mode,
            ColumnToggles {
                metrics: self.metrics,
                pod_detail: self.pod_detail,
                image: self.list_image,
            },
        )
    }
}

pub fn validate_threshold(warn: i64, crit: i64) -> Result<(), ConfigError> {
    if warn > crit {
        return Err(ConfigError::InvalidThreshold { warn, crit });
    }

    Ok(())
}

fn unit_selection(unit: UnitName) -> UnitSelection {
    let mut selection = UnitSelection::default();
    match unit {
        UnitName::B => selection.bytes = true,
        UnitName::K => selection.kilo = true,
        UnitName::M => selection.mega = true,
        UnitName::G => selection.giga = true,
    }
    selection
}

fn discover_config_path() -> Option<PathBuf> {
    let cwd_candidates = [
        PathBuf::from("kubectl-free.yaml"),
        PathBuf::from("kubectl-free.yml"),
    ];
    for candidate in cwd_candidates {
        if candidate.exists() {
            return Some(candidate);
        }
    }

    if let Ok(home) = std::env::var("HOME") {
        let user_candidates = [
            PathBuf::from(&home).join(".config/kubectl-free/config.yaml"),
            PathBuf::from(&home).join(".config/kubectl-free/config.yml"),
        ];
        for candidate in user_candidates {
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }

    None
}
