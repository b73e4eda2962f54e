//! CLI command implementations
//!
//! `serve` boots the store, seeds it from the configured dataset, and runs
//! the HTTP server. `load` vets a dataset without serving.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::http::{AppState, HttpConfig, HttpServer};
use crate::loader;
use crate::observability::Logger;
use crate::store::{MemoryStore, RecipeStore};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Dataset seeded into the store at startup (optional)
    #[serde(default)]
    pub data_file: Option<String>,

    /// HTTP server settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("invalid config JSON: {}", e)))?;

        Ok(config)
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Load { config, file } => load(&config, file),
    }
}

/// Start the HTTP server
///
/// Boot sequence:
/// 1. Configuration load
/// 2. Store construction (injected into the routes, never global)
/// 3. Dataset seed, if configured
/// 4. HTTP server start on a tokio runtime
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let store = Arc::new(MemoryStore::new());

    if let Some(data_file) = &config.data_file {
        let outcome = loader::read_dataset(Path::new(data_file))
            .map_err(|e| CliError::load_failed(e.to_string()))?;

        let loaded = outcome.loaded();
        for draft in outcome.drafts {
            store
                .insert(draft)
                .map_err(|e| CliError::load_failed(e.to_string()))?;
        }

        if outcome.skipped > 0 {
            Logger::warn(
                "seed_records_skipped",
                &[
                    ("file", data_file.as_str()),
                    ("skipped", &outcome.skipped.to_string()),
                ],
            );
        }

        Logger::info(
            "store_seeded",
            &[("file", data_file.as_str()), ("loaded", &loaded.to_string())],
        );
    }

    let mut http_config = config.http;
    if let Some(port) = port {
        http_config.port = port;
    }

    let server = HttpServer::new(http_config, AppState::new(store));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Vet a dataset and print the load report as JSON
///
/// Uses the explicit `--file` if given, otherwise the configured
/// `data_file`. Nothing is served and nothing is kept.
pub fn load(config_path: &Path, file: Option<PathBuf>) -> CliResult<()> {
    let path = match file {
        Some(path) => path,
        None => {
            let config = Config::load(config_path)?;
            PathBuf::from(config.data_file.ok_or_else(|| {
                CliError::config_error("no --file given and no data_file configured")
            })?)
        }
    };

    let outcome =
        loader::read_dataset(&path).map_err(|e| CliError::load_failed(e.to_string()))?;

    write_response(json!({
        "file": path.to_string_lossy(),
        "loaded": outcome.loaded(),
        "skipped": outcome.skipped,
    }))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: serde_json::Value) -> PathBuf {
        let path = dir.path().join("ladle.json");
        fs::write(&path, body.to_string()).unwrap();
        path
    }

    #[test]
    fn test_config_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, json!({}));

        let config = Config::load(&path).unwrap();
        assert_eq!(config.data_file, None);
        assert_eq!(config.http.port, 7878);
    }

    #[test]
    fn test_config_missing_file_is_config_error() {
        let result = Config::load(Path::new("/nonexistent/ladle.json"));
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_config_invalid_json_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ladle.json");
        fs::write(&path, "not json").unwrap();

        let result = Config::load(&path);
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_load_reports_counts() {
        let dir = TempDir::new().unwrap();
        let dataset = dir.path().join("recipes.json");
        fs::write(
            &dataset,
            json!([
                {"title": "Apple Pie"},
                {"title": ""}
            ])
            .to_string(),
        )
        .unwrap();

        let config_path = write_config(&dir, json!({}));
        load(&config_path, Some(dataset)).unwrap();
    }

    #[test]
    fn test_load_without_file_or_data_file_fails() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, json!({}));

        let result = load(&config_path, None);
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_load_uses_configured_data_file() {
        let dir = TempDir::new().unwrap();
        let dataset = dir.path().join("recipes.json");
        fs::write(&dataset, json!([{"title": "Stew"}]).to_string()).unwrap();

        let config_path = write_config(
            &dir,
            json!({"data_file": dataset.to_string_lossy()}),
        );

        load(&config_path, None).unwrap();
    }
}
