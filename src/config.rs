use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::link::BibleLink;

pub const CONFIG_FILE_NAME: &str = ".quotealignrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Token data produced by the document engine.
    #[serde(default = "default_tokens")]
    pub tokens: String,
    /// Gateway-language Bibles, `org/repo[/ref]`.
    #[serde(default = "default_gl_links", alias = "bibleLinks")]
    pub gl_links: Vec<String>,
    #[serde(default)]
    pub try_separators: bool,
    #[serde(default)]
    pub reprocess_not_found: bool,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_tokens() -> String {
    "./tokens.json".to_string()
}

fn default_gl_links() -> Vec<String> {
    vec!["unfoldingWord/en_ult/master".to_string()]
}

fn default_includes() -> Vec<String> {
    vec!["**/*.tsv".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tokens: default_tokens(),
            gl_links: default_gl_links(),
            try_separators: false,
            reprocess_not_found: false,
            includes: default_includes(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a glob pattern or a Bible link is malformed.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for pattern in &self.includes {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'includes': \"{}\"", pattern))?;
        }

        for link in &self.gl_links {
            link.parse::<BibleLink>()
                .with_context(|| format!("Invalid entry in 'glLinks': \"{}\"", link))?;
        }

        Ok(())
    }
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
    /// Directory holding the config file; relative paths in it resolve here.
    pub config_dir: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.config_dir.is_some()
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
            Ok(ConfigLoadResult {
                config,
                config_dir: path.parent().map(Path::to_path_buf),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            config_dir: None,
        }),
    }
}
