use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::pipe;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "sitepipe")]
#[command(version = VERSION)]
#[command(about = "Streams a managed site's database into a Drush alias")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sync a site's database to a Drush alias
    #[command(visible_alias = "sync")]
    Pipe(pipe::PipeArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        // The pipeline itself streams to the terminal; only the final
        // result envelope goes to stdout.
        Commands::Pipe(args) => output::print_result(pipe::run(args)),
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
