use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tracing::info;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    convert::ConversionOptions,
    core::{BibleLink, TokenStore, VerseCache},
};

/// Everything a command needs to resolve quotes.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--tokens`, `--try-separators`)
/// 2. `.quotealignrc.json` config file
/// 3. Built-in defaults
pub struct ConvertContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,
    /// Directory relative config paths resolve against.
    pub root_dir: PathBuf,
    pub store: TokenStore,
    /// Verse streams already fetched during this run.
    pub cache: VerseCache,
    pub options: ConversionOptions,
    pub verbose: bool,
}

impl ConvertContext {
    /// Load configuration from the working directory upward, apply CLI
    /// overrides and read the token file.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the token file cannot
    /// be read or parsed.
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read the working directory")?;
        let config_result = load_config(&cwd)?;
        if !config_result.from_file() {
            info!("No {} found, using default configuration", CONFIG_FILE_NAME);
        }

        let mut config = config_result.config;
        let root_dir = config_result.config_dir.unwrap_or(cwd);

        let tokens_path = match &common.tokens {
            Some(path) => path.clone(),
            None => resolve_relative(&root_dir, Path::new(&config.tokens)),
        };
        config.tokens = tokens_path.to_string_lossy().to_string();

        let options = ConversionOptions {
            try_separators: common.try_separators || config.try_separators,
            reprocess_not_found: config.reprocess_not_found,
        };

        let store = TokenStore::load(&tokens_path)?;
        info!(tokens = %tokens_path.display(), repos = ?store.repos().collect::<Vec<_>>(), "loaded token data");

        Ok(Self {
            config,
            root_dir,
            store,
            cache: VerseCache::new(),
            options,
            verbose: common.verbose,
        })
    }

    /// Gateway-language links: CLI `--link` values if any, else config `glLinks`.
    pub fn links(&self, overrides: &[String]) -> Result<Vec<BibleLink>> {
        let links = if overrides.is_empty() {
            &self.config.gl_links
        } else {
            overrides
        };
        links
            .iter()
            .map(|link| {
                link.parse::<BibleLink>()
                    .with_context(|| format!("Invalid link \"{}\"", link))
            })
            .collect()
    }
}

fn resolve_relative(root_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let rel = path.strip_prefix(".").unwrap_or(path);
    root_dir.join(rel)
}
