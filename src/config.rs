use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_BACKUP_SUFFIX;
use crate::core::formats::flat::DEFAULT_FLAT_INDENT;

pub const CONFIG_FILE_NAME: &str = ".wordlocrc.json";

/// Nested output indent for `apply --format csv`.
pub const CSV_NESTED_INDENT: usize = 4;
/// Nested output indent for `apply --format flat`.
pub const FLAT_NESTED_INDENT: usize = 2;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Folder of nested message files, relative to the config file.
    #[serde(default)]
    pub input_root: Option<String>,
    /// Flat translation folder or CSV catalog, relative to the config file.
    #[serde(default)]
    pub translations_root: Option<String>,
    #[serde(default = "default_backup_suffix")]
    pub backup_suffix: String,
    /// Overrides the per-format nested output indent.
    #[serde(default)]
    pub nested_indent: Option<usize>,
    #[serde(default = "default_flat_indent")]
    pub flat_indent: usize,
}

fn default_backup_suffix() -> String {
    DEFAULT_BACKUP_SUFFIX.to_string()
}

fn default_flat_indent() -> usize {
    DEFAULT_FLAT_INDENT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_root: None,
            translations_root: None,
            backup_suffix: default_backup_suffix(),
            nested_indent: None,
            flat_indent: default_flat_indent(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The backup suffix is appended to a file name, so it must be non-empty
    /// and must not contain a path separator.
    pub fn validate(&self) -> Result<()> {
        validate_backup_suffix(&self.backup_suffix)
    }
}

pub fn validate_backup_suffix(suffix: &str) -> Result<()> {
    if suffix.is_empty() {
        bail!("Invalid 'backupSuffix': must not be empty");
    }
    if suffix.contains('/') || suffix.contains('\\') {
        bail!(
            "Invalid 'backupSuffix': \"{}\" must not contain a path separator",
            suffix
        );
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative config paths resolve against: the config file's
    /// directory, or the start directory when no file was found.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

impl ConfigLoadResult {
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_dir.join(path)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}

/// The two roots a merge needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRoots {
    pub input_root: PathBuf,
    pub translations_root: PathBuf,
}

/// Roots gathered so far from arguments and config.
///
/// Whatever is still missing is either an error or filled in by the
/// interactive collector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRoots {
    pub input_root: Option<PathBuf>,
    pub translations_root: Option<PathBuf>,
}

impl PartialRoots {
    /// Fill unset roots from the config file. Arguments always win.
    pub fn with_config(self, loaded: &ConfigLoadResult) -> Self {
        let config = &loaded.config;
        Self {
            input_root: self
                .input_root
                .or_else(|| config.input_root.as_deref().map(|p| loaded.resolve(p))),
            translations_root: self.translations_root.or_else(|| {
                config
                    .translations_root
                    .as_deref()
                    .map(|p| loaded.resolve(p))
            }),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.input_root.is_some() && self.translations_root.is_some()
    }

    pub fn complete(self) -> Result<MergeRoots> {
        match (self.input_root, self.translations_root) {
            (Some(input_root), Some(translations_root)) => Ok(MergeRoots {
                input_root,
                translations_root,
            }),
            (None, _) => bail!(
                "Missing input folder.\n\
                 Hint: pass INPUT_ROOT, set 'inputRoot' in {} or use --interactive.",
                CONFIG_FILE_NAME
            ),
            (_, None) => bail!(
                "Missing translations source.\n\
                 Hint: pass TRANSLATIONS, set 'translationsRoot' in {} or use --interactive.",
                CONFIG_FILE_NAME
            ),
        }
    }
}
