//! The engine's state between invocations lives in a JSON snapshot file.

use std::fs;
use std::path::Path;

use token_engine::{EngineConfig, Snapshot, TokenLifecycle};
use tracing::{debug, warn};

use crate::error::CliError;

/// A missing state file means a fresh, uninitialized lifecycle. A state file
/// written for another program is refused.
pub fn load_state(path: &Path, config: &EngineConfig) -> Result<TokenLifecycle, CliError> {
    if !path.exists() {
        debug!("No state at {}, starting fresh", path.display());
        return Ok(TokenLifecycle::from_config(config)?);
    }

    let contents = fs::read_to_string(path)?;
    let snapshot = Snapshot::from_json(&contents)
        .map_err(|e| CliError::StateError(format!("{}: {}", path.display(), e)))?;
    if snapshot.program_id != config.program_id {
        warn!(
            "State file was written for program {}, config names {}",
            snapshot.program_id, config.program_id
        );
        return Err(CliError::StateError(format!(
            "{} belongs to program {}, not {}",
            path.display(),
            snapshot.program_id,
            config.program_id
        )));
    }

    Ok(TokenLifecycle::restore(&snapshot)?)
}

pub fn save_state(path: &Path, engine: &TokenLifecycle) -> Result<(), CliError> {
    let json = engine.snapshot().to_json()?;
    fs::write(path, json)?;
    debug!("Saved state to {}", path.display());
    Ok(())
}
