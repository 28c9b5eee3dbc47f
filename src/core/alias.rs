//! Destination alias resolution.
//!
//! Drush is asked for the alias in machine-readable form and its stdout is
//! parsed with serde; alias definitions are data here, never code. This runs
//! before anything destructive, so a bad alias aborts the sync with the
//! destination untouched.

use serde_json::{Map, Value};
use std::process::Command;

use crate::error::{Error, Result};

/// The first alias definition drush returned for a name.
#[derive(Debug, Clone)]
pub struct AliasRecord {
    pub name: String,
    pub definition: Value,
}

/// Narrow seam for alias lookup, mirroring the `Environment` trait: the
/// sync core validates the destination through this before anything
/// destructive runs.
pub trait AliasResolver {
    fn resolve(&self, alias: &str) -> Result<AliasRecord>;
}

/// Resolves a user-supplied alias through `drush site:alias`.
pub struct DrushAliasResolver;

impl AliasResolver for DrushAliasResolver {
    fn resolve(&self, alias: &str) -> Result<AliasRecord> {
        let output = Command::new("drush")
            .args(["site:alias", alias, "--format=json"])
            .output()
            .map_err(|e| Error::Environment(format!("failed to run drush: {}", e)))?;

        if !output.status.success() {
            return Err(Error::InvalidAlias(format!(
                "drush could not resolve '{}'",
                alias
            )));
        }

        parse_alias_output(alias, &String::from_utf8_lossy(&output.stdout))
    }
}

/// Pick the first entry out of drush's alias map. Empty or malformed output
/// means the alias name has no usable definition.
fn parse_alias_output(alias: &str, stdout: &str) -> Result<AliasRecord> {
    let definitions: Map<String, Value> = serde_json::from_str(stdout)
        .map_err(|_| Error::InvalidAlias(format!("unparseable definition for '{}'", alias)))?;

    let (name, definition) = definitions
        .into_iter()
        .next()
        .ok_or_else(|| Error::InvalidAlias(format!("no definition found for '{}'", alias)))?;

    Ok(AliasRecord { name, definition })
}
