use crate::error::{CliError, Result};
use nucleoseek::engine::config::EngineParams;
use std::path::Path;
use tracing::info;

/// Loads engine parameters from an optional TOML file; absent fields (or an
/// absent file) fall back to the built-in defaults. Validation happens when
/// the parameters are handed to the session.
pub fn load_params(path: Option<&Path>) -> Result<EngineParams> {
    let Some(path) = path else {
        return Ok(EngineParams::default());
    };
    let content = std::fs::read_to_string(path)?;
    let params: EngineParams = toml::from_str(&content).map_err(|e| CliError::ConfigParsing {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), "loaded engine parameters from config file");
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_yields_defaults() {
        let params = load_params(None).unwrap();
        assert_eq!(params, EngineParams::default());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_params(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        std::fs::write(&path, "valley_move_prob = \"lots\"").unwrap();
        let err = load_params(Some(&path)).unwrap_err();
        assert!(matches!(err, CliError::ConfigParsing { .. }));
    }

    #[test]
    fn well_formed_toml_overrides_only_named_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        std::fs::write(&path, "global_jump_prob = 0.2\n").unwrap();
        let params = load_params(Some(&path)).unwrap();
        assert_eq!(params.global_jump_prob, 0.2);
        assert_eq!(params.valley_move_prob, EngineParams::default().valley_move_prob);
    }
}
