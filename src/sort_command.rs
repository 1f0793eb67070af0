use std::thread;

use command_executor::command::Command;

use crate::partial_result::{capture_panic, lock_slot, Slot, SlotState};
use crate::sort_job::SortJob;

/// Sorts the lines of one slot in place
pub(crate) struct SortCommand {
    slot: Slot,
    job: SortJob,
}

impl SortCommand {
    pub(crate) fn new(slot: Slot, job: SortJob) -> SortCommand {
        SortCommand { slot, job }
    }
}

impl Command for SortCommand {
    fn execute(&self) -> Result<(), anyhow::Error> {
        let (lines, context) = {
            let mut partial = lock_slot(&self.slot)?;
            (partial.take_read(), partial.describe())
        };
        // failed reads stay failed
        let Some(lines) = lines else {
            return Ok(());
        };
        log::debug!(
            "Sorting {} lines, {}, job: {}, thread: {}",
            lines.len(),
            context,
            self.job.name(),
            thread::current().name().unwrap_or("unnamed")
        );

        let state = capture_panic(&context, || SlotState::Sorted(self.job.sort(lines)));
        lock_slot(&self.slot)?.set_state(state);
        Ok(())
    }
}
