use std::thread;

use command_executor::command::Command;

use crate::line_reader::read_lines;
use crate::partial_result::{capture_panic, lock_slot, Slot, SlotState};

/// Reads one input file into its slot
pub(crate) struct ReadCommand {
    slot: Slot,
}

impl ReadCommand {
    pub(crate) fn new(slot: Slot) -> ReadCommand {
        ReadCommand { slot }
    }
}

impl Command for ReadCommand {
    fn execute(&self) -> Result<(), anyhow::Error> {
        let (path, context) = {
            let partial = lock_slot(&self.slot)?;
            (partial.path().clone(), partial.describe())
        };
        log::debug!("Reading {}, thread: {}", context, thread::current().name().unwrap_or("unnamed"));

        let state = capture_panic(&context, || match read_lines(&path) {
            Ok(lines) => SlotState::Read(lines),
            Err(e) => SlotState::Failed(e),
        });
        lock_slot(&self.slot)?.set_state(state);
        Ok(())
    }
}
