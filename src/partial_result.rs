use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{SortError, SortResult};

/// A partial result shared between the orchestrator and the single worker that owns it in a phase
pub(crate) type Slot = Arc<Mutex<PartialResult>>;

#[derive(Debug)]
pub(crate) enum SlotState {
    Pending,
    Read(Vec<String>),
    Sorted(Vec<String>),
    Failed(SortError),
}

/// Lines of one input file during the parallel read and sort phases
#[derive(Debug)]
pub(crate) struct PartialResult {
    index: usize,
    path: PathBuf,
    state: SlotState,
}

impl PartialResult {
    pub(crate) fn new(index: usize, path: PathBuf) -> PartialResult {
        PartialResult {
            index,
            path,
            state: SlotState::Pending,
        }
    }

    pub(crate) fn slot(index: usize, path: PathBuf) -> Slot {
        Arc::new(Mutex::new(PartialResult::new(index, path)))
    }

    pub(crate) fn path(&self) -> &PathBuf {
        &self.path
    }

    pub(crate) fn state(&self) -> &SlotState {
        &self.state
    }

    pub(crate) fn set_state(&mut self, state: SlotState) {
        self.state = state;
    }

    /// Move the read lines out for sorting, leaving the slot pending
    pub(crate) fn take_read(&mut self) -> Option<Vec<String>> {
        match std::mem::replace(&mut self.state, SlotState::Pending) {
            SlotState::Read(lines) => Some(lines),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Context used in errors and log messages
    pub(crate) fn describe(&self) -> String {
        format!("slot: {}, file: {}", self.index, self.path.display())
    }

    /// Fail a slot whose worker left it in the state it had before the phase
    pub(crate) fn fail_unfinished(&mut self, phase: &str) {
        let unfinished = match &self.state {
            SlotState::Pending => true,
            SlotState::Read(_) => phase != "reading",
            SlotState::Sorted(_) | SlotState::Failed(_) => false,
        };
        if unfinished {
            let error = SortError::concurrency(self.describe(), format!("{} worker did not complete", phase));
            self.state = SlotState::Failed(error);
        }
    }

    /// Move the sorted lines out of the slot, or the failure that left it empty
    pub(crate) fn take_lines(&mut self) -> Result<Vec<String>, (PathBuf, SortError)> {
        match std::mem::replace(&mut self.state, SlotState::Pending) {
            SlotState::Sorted(lines) => Ok(lines),
            SlotState::Failed(e) => Err((self.path.clone(), e)),
            SlotState::Pending | SlotState::Read(_) => {
                let error = SortError::concurrency(self.describe(), "partial result was not sorted");
                Err((self.path.clone(), error))
            }
        }
    }
}

pub(crate) fn lock_slot(slot: &Slot) -> SortResult<MutexGuard<'_, PartialResult>> {
    slot.lock()
        .map_err(|e| SortError::concurrency("partial result slot", e.to_string()))
}

/// Run the work of one worker, turning a panic into a failed slot state
pub(crate) fn capture_panic<F>(context: &str, work: F) -> SlotState
where
    F: FnOnce() -> SlotState,
{
    match panic::catch_unwind(AssertUnwindSafe(work)) {
        Ok(state) => state,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            log::warn!("Worker panicked, {}: {}", context, message);
            SlotState::Failed(SortError::concurrency(context, message))
        }
    }
}

/// Text of a caught panic payload
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::error::SortError;
    use crate::partial_result::{capture_panic, panic_message, PartialResult, SlotState};

    #[test]
    fn test_take_read() {
        let mut partial = PartialResult::new(0, PathBuf::from("a.txt"));
        assert!(partial.take_read().is_none());
        partial.set_state(SlotState::Read(vec!["x".to_string()]));
        assert_eq!(partial.take_read(), Some(vec!["x".to_string()]));
        assert!(matches!(partial.state(), SlotState::Pending));
    }

    #[test]
    fn test_fail_unfinished() {
        let mut read = PartialResult::new(1, PathBuf::from("b.txt"));
        read.set_state(SlotState::Read(vec![]));
        read.fail_unfinished("reading");
        assert!(matches!(read.state(), SlotState::Read(_)));
        read.fail_unfinished("sorting");
        match read.take_lines() {
            Err((path, SortError::Concurrency { context, .. })) => {
                assert_eq!(path, PathBuf::from("b.txt"));
                assert_eq!(context, "slot: 1, file: b.txt");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_panic_message() {
        let payload = std::panic::catch_unwind(|| panic!("boom {}", 7)).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "boom 7");
    }

    #[test]
    fn test_capture_panic() {
        let state = capture_panic("slot: 2, file: c.txt", || SlotState::Sorted(vec!["a".to_string()]));
        assert!(matches!(state, SlotState::Sorted(_)));

        let mut partial = PartialResult::new(2, PathBuf::from("c.txt"));
        partial.set_state(capture_panic("slot: 2, file: c.txt", || panic!("index out of bounds")));
        match partial.take_lines() {
            Err((path, SortError::Concurrency { context, message })) => {
                assert_eq!(path, PathBuf::from("c.txt"));
                assert_eq!(context, "slot: 2, file: c.txt");
                assert_eq!(message, "index out of bounds");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
