use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{info, warn};
use replyomat_model::{DefaultPool, ResourceError, ResponseTable};

use super::config::ResponderConfig;
use super::parser;

pub fn load_response_table(path: &Path) -> ResponseTable {
    info!("Responses file: {}", path.to_string_lossy());
    let table = ResponseTable::new(parser::table_entries(read_blocks(path)));
    let n = table.len();
    if n == 0 {
        warn!("Loaded {n} keywords");
    } else {
        let keywords: String = table.keywords().join(", ");
        info!("Loaded {n} keywords: {keywords}");
    }
    table
}

pub fn load_default_pool(path: &Path) -> DefaultPool {
    info!("Default responses file: {}", path.to_string_lossy());
    let bodies = parser::pool_bodies(read_blocks(path));
    if bodies.is_empty() {
        warn!("No default responses loaded, using the fixed fallback");
    } else {
        info!("Loaded {} default responses", bodies.len());
    }
    DefaultPool::new(bodies)
}

pub fn load_config(path: &Path) -> Result<ResponderConfig> {
    info!("Config file: {}", path.to_string_lossy());
    if !path.exists() {
        info!("Config file does not exist, creating.");
        store_default_config(path)?;
    }
    let config_file = File::open(path)?;
    Ok(serde_yaml::from_reader(config_file)?)
}

pub fn store_default_config(path: &Path) -> Result<()> {
    ensure_dir_created(path)?;
    let config_file = File::create(path)?;
    Ok(serde_yaml::to_writer(config_file, &ResponderConfig::default())?)
}

/// Opens the resource and parses it into blocks. Failures degrade to
/// whatever was parsed before the failure; the handle is released on all
/// paths.
fn read_blocks(path: &Path) -> Vec<Vec<String>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            warn!("{}", ResourceError::NotFound(path.to_owned()));
            return Vec::new();
        }
    };
    let mut read_failure = None;
    let blocks = {
        let lines = BufReader::new(file).lines().map_while(|line| match line {
            Ok(line) => Some(line),
            Err(e) => {
                read_failure = Some(e);
                None
            }
        });
        parser::parse_blocks(lines)
    };
    if let Some(e) = read_failure {
        warn!("{}", ResourceError::ReadFailure(path.to_owned(), e));
    }
    blocks
}

fn ensure_dir_created(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create {}", dir.to_string_lossy()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempdir::TempDir;

    use super::*;

    fn init_test_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn write_resource(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_response_table_from_file() {
        init_test_logging();
        let dir = TempDir::new("replyomat").unwrap();
        let path = write_resource(
            &dir,
            "responses.txt",
            "greeting\nHello there!\n\nbad\nDon't swear.\n",
        );
        let table = load_response_table(&path);
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("BAD"), Some("Don't swear.\n"));
        assert_eq!(table.lookup("greeting"), Some("Hello there!\n"));
    }

    #[test]
    fn missing_responses_file_yields_empty_table() {
        init_test_logging();
        let dir = TempDir::new("replyomat").unwrap();
        let table = load_response_table(&dir.path().join("nope.txt"));
        assert!(table.is_empty());
    }

    #[test]
    fn double_blank_line_ends_the_table() {
        init_test_logging();
        let dir = TempDir::new("replyomat").unwrap();
        let path = write_resource(
            &dir,
            "responses.txt",
            "bad\nDon't swear.\n\n\nignored\nNever loaded.\n",
        );
        let table = load_response_table(&path);
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("ignored"), None);
    }

    #[test]
    fn loads_default_pool_from_file() {
        init_test_logging();
        let dir = TempDir::new("replyomat").unwrap();
        let path = write_resource(
            &dir,
            "default.txt",
            "Could you elaborate?\n\nWhy do you say that?\n",
        );
        let pool = load_default_pool(&path);
        assert_eq!(pool.len(), 2);
        assert!(pool.contains("Could you elaborate?"));
        assert!(pool.contains("Why do you say that?"));
    }

    #[test]
    fn missing_default_file_yields_fallback_pool() {
        init_test_logging();
        let dir = TempDir::new("replyomat").unwrap();
        let pool = load_default_pool(&dir.path().join("nope.txt"));
        assert_eq!(pool.responses(), [replyomat_model::FALLBACK_RESPONSE]);
    }

    #[test]
    fn empty_default_file_yields_fallback_pool() {
        init_test_logging();
        let dir = TempDir::new("replyomat").unwrap();
        let path = write_resource(&dir, "default.txt", "");
        let pool = load_default_pool(&path);
        assert_eq!(pool.responses(), [replyomat_model::FALLBACK_RESPONSE]);
    }

    #[test]
    fn load_config_creates_default_file_when_missing() {
        init_test_logging();
        let dir = TempDir::new("replyomat").unwrap();
        let path = dir.path().join("config.yaml");
        let config = load_config(&path).unwrap();
        assert_eq!(config, ResponderConfig::default());
        assert!(path.is_file());
        // A second load reads the stored file back.
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn load_config_reads_existing_file() {
        init_test_logging();
        let dir = TempDir::new("replyomat").unwrap();
        let path = write_resource(&dir, "config.yaml", "responsesFile: canned.txt\n");
        let config = load_config(&path).unwrap();
        assert_eq!(config.responses_file, PathBuf::from("canned.txt"));
        assert_eq!(config.default_responses_file, PathBuf::from("default.txt"));
    }

    #[test]
    fn load_or_default_degrades_on_malformed_config() {
        init_test_logging();
        let dir = TempDir::new("replyomat").unwrap();
        let path = write_resource(&dir, "config.yaml", "responsesFile: [not, a, path]\n");
        assert_eq!(
            ResponderConfig::load_or_default(&path),
            ResponderConfig::default()
        );
    }
}
