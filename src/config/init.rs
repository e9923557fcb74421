use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{get_config_path, Config};
use crate::scoring::ScoringConfig;

const HEADER: &str = "\
# contact-rank scoring configuration
#
# Roles and countries are matched case-insensitively; company sizes must match
# the bucket label exactly. Unknown roles and sizes score 20, countries outside
# both tiers get the `other` score. Weights should sum to 1.0 to keep final
# scores on a 0-100 scale.
";

/// Write the reference scoring configuration as YAML.
///
/// If `path` is None, writes to the default config path. Refuses to replace an
/// existing file unless `force` is set. Returns the path written.
pub fn write_default_config(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let config_path = path.unwrap_or_else(get_config_path);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config {
        scoring: Some(ScoringConfig::default()),
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    write_atomically(&config_path, &format!("{}\n{}", HEADER, yaml))?;
    Ok(config_path)
}

fn write_atomically(path: &Path, content: &str) -> Result<()> {
    // Create parent directories
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;

    #[test]
    fn test_written_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contact-rank").join("config.yaml");

        let written = write_default_config(Some(path.clone()), false).unwrap();
        assert_eq!(written, path);

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.effective_scoring(), ScoringConfig::default());
    }

    #[test]
    fn test_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "scoring: {}\n").unwrap();

        let err = write_default_config(Some(path.clone()), false)
            .unwrap_err()
            .to_string();
        assert!(err.contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "scoring: {}\n");

        write_default_config(Some(path.clone()), true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("company_sizes"));
    }
}
