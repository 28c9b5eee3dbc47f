use clap::Args;

use sitepipe::alias::DrushAliasResolver;
use sitepipe::environment::TerminusEnvironment;
use sitepipe::sync::{self, SyncOptions, SyncResult};

#[derive(Args)]
pub struct PipeArgs {
    /// Drush alias of the destination to sync to
    pub alias: String,

    /// Site to sync from
    #[arg(long)]
    pub site: String,

    /// Environment to sync from
    #[arg(long, default_value = "dev")]
    pub env: String,

    /// Show progress. Requires pv on the machine running the pipeline.
    #[arg(long)]
    pub progress: bool,
}

pub fn run(args: PipeArgs) -> sitepipe::Result<SyncResult> {
    let environment = TerminusEnvironment::new(args.site, args.env);

    sync::sync(
        &environment,
        &DrushAliasResolver,
        &args.alias,
        SyncOptions {
            show_progress: args.progress,
        },
    )
}
