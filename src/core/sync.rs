//! Orchestrates one database sync: resolve, wake, assemble, run.

use serde::Serialize;
use std::time::Instant;

use crate::alias::AliasResolver;
use crate::environment::{self, Environment};
use crate::error::Result;
use crate::pipeline;
use crate::runner;
use crate::shell::Escaper;

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Insert a byte-counting progress stage. Requires pv on the machine
    /// running the pipeline.
    pub show_progress: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct SyncResult {
    pub alias: String,
    pub stages: Vec<String>,
    pub exit_code: i32,
    pub success: bool,
    pub setup_ms: u128,
    pub run_ms: u128,
}

/// Stream the environment's database into the destination alias.
///
/// The alias is validated first so an unknown destination fails before the
/// destructive drop stage can run. The whole pipeline executes as one child
/// process; success is solely a zero exit code from it.
pub fn sync(
    environment: &dyn Environment,
    resolver: &dyn AliasResolver,
    dest_alias: &str,
    options: SyncOptions,
) -> Result<SyncResult> {
    let setup_start = Instant::now();

    let record = resolver.resolve(dest_alias)?;
    log_status!("pipe", "Resolved destination alias '{}'", record.name);

    environment.wake()?;
    let info = environment::resolve(environment)?;

    let escaper = Escaper::detected();
    let pipeline = pipeline::assemble(&info, dest_alias, options.show_progress, &escaper);

    let setup = setup_start.elapsed();
    log_status!("pipe", "Bootstrapping time: {}ms", setup.as_millis());
    log_status!("pipe", "Running: {}", pipeline.command_line());
    log_status!("pipe", "Importing database...");

    let execution = runner::run(&pipeline)?;

    Ok(SyncResult {
        alias: dest_alias.to_string(),
        stages: pipeline
            .stage_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        exit_code: execution.exit_code,
        success: true,
        setup_ms: setup.as_millis(),
        run_ms: execution.elapsed.as_millis(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasRecord;
    use crate::environment::ConnectionInfo;
    use crate::error::Error;
    use std::cell::Cell;

    struct RejectingResolver;

    impl AliasResolver for RejectingResolver {
        fn resolve(&self, alias: &str) -> Result<AliasRecord> {
            Err(Error::InvalidAlias(format!(
                "no definition found for '{}'",
                alias
            )))
        }
    }

    struct TrackingEnvironment {
        woken: Cell<bool>,
    }

    impl Environment for TrackingEnvironment {
        fn connection_info(&self) -> Result<ConnectionInfo> {
            panic!("connection info must not be read for an invalid alias");
        }

        fn wake(&self) -> Result<()> {
            self.woken.set(true);
            Ok(())
        }
    }

    #[test]
    fn invalid_alias_aborts_before_touching_the_environment() {
        let environment = TrackingEnvironment {
            woken: Cell::new(false),
        };

        let err = sync(
            &environment,
            &RejectingResolver,
            "@nope",
            SyncOptions::default(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::InvalidAlias(_)));
        assert!(!environment.woken.get());
    }
}
