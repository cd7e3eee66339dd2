use rank_core::ids::generate_task_id;

use crate::cli::GlobalFlags;
use crate::cli::task_args::TaskArgs;
use crate::output::output;

/// Handle `trk new`: validate form fields and print the resulting record.
pub fn handle(args: TaskArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let draft = args.into_fields().validate()?;
    let record = draft.into_record(generate_task_id());
    tracing::debug!(id = %record.id, "built task record");
    output(&record, flags.format)
}
