//! Assembles command fragments into the single piped shell line that moves
//! the database: drop, remote dump+gzip, optional progress, gunzip, import.

use crate::command::{export_command, import_command, inline_alias_url};
use crate::environment::ConnectionInfo;
use crate::shell::Escaper;

/// One external program invocation within the pipeline.
#[derive(Debug, Clone)]
pub struct PipelineStage {
    pub name: &'static str,
    pub command: String,
    pub optional: bool,
}

/// Ordered stages, joined with a pipe operator into one shell line.
/// Stage order is fixed; optional stages may be omitted, never reordered.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub stages: Vec<PipelineStage>,
}

impl Pipeline {
    /// The full shell line. Every interpolated value was escaped when the
    /// stage commands were built, so this is passable to a single shell
    /// invocation as-is.
    pub fn command_line(&self) -> String {
        self.stages
            .iter()
            .map(|stage| stage.command.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name).collect()
    }
}

/// Build the sync pipeline for one source environment and destination alias.
///
/// The dump runs remotely: the `mysqldump … | gzip` line is escaped once and
/// wrapped in a `passthru(…)` snippet, which is escaped again as a single
/// opaque token and handed to `drush <inline-alias> ev`. Inner escape first,
/// outer escape wraps the already-escaped string.
pub fn assemble(
    info: &ConnectionInfo,
    dest_alias: &str,
    show_progress: bool,
    escaper: &Escaper,
) -> Pipeline {
    let dest = escaper.escape(dest_alias);
    let source_alias = escaper.escape(&inline_alias_url(info));

    let dump_line = format!("{} | gzip", export_command(info, escaper));
    let remote_snippet = escaper.escape(&format!("passthru({})", escaper.escape(&dump_line)));

    let mut stages = vec![
        PipelineStage {
            name: "drop",
            // Destination starts empty so repeated runs converge on the
            // source's current data.
            command: format!("drush {} sql-drop -y 1>/dev/null", dest),
            optional: false,
        },
        PipelineStage {
            name: "export",
            command: format!("drush {} ev {}", source_alias, remote_snippet),
            optional: false,
        },
    ];

    if show_progress {
        stages.push(PipelineStage {
            name: "progress",
            command: "pv -cfN importing".to_string(),
            optional: true,
        });
    }

    stages.push(PipelineStage {
        name: "decompress",
        command: "gunzip".to_string(),
        optional: false,
    });
    stages.push(PipelineStage {
        name: "import",
        command: import_command(dest_alias, escaper),
        optional: false,
    });

    Pipeline { stages }
}
