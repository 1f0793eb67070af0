use std::cmp::max;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Instant;

use command_executor::command::Command;
use command_executor::shutdown_mode::ShutdownMode;
use command_executor::thread_pool_builder::ThreadPoolBuilder;
use rlimit::{getrlimit, setrlimit, Resource};

use crate::config::Config;
use crate::error::{SortError, SortResult};
use crate::merge::merge_all;
use crate::partial_result::{lock_slot, PartialResult, Slot};
use crate::quick_sort::quick_sort;
use crate::read_command::ReadCommand;
use crate::single::Outcome;
use crate::sort_command::SortCommand;
use crate::sort_job::SortJob;

/// Phases of a parallel run, in order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Idle,
    Reading,
    Sorting,
    Merging,
    FinalResort,
    Done,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Reading => "reading",
            Phase::Sorting => "sorting",
            Phase::Merging => "merging",
            Phase::FinalResort => "final resort",
            Phase::Done => "done",
        };
        write!(f, "{}", name)
    }
}

struct ParallelRun<'a> {
    job: &'a SortJob,
    phase: Phase,
}

impl<'a> ParallelRun<'a> {
    fn new(job: &'a SortJob) -> ParallelRun<'a> {
        ParallelRun {
            job,
            phase: Phase::Idle,
        }
    }

    fn enter(&mut self, phase: Phase) {
        log::debug!("Parallel sort, job: {}, {} -> {}", self.job.name(), self.phase, phase);
        self.phase = phase;
    }
}

/// Read, sort and merge `files` with one worker thread per file.
///
/// Each phase runs on a fresh pool that is joined before the next phase starts. Worker failures
/// are isolated to their slot: the file contributes no lines and is reported as skipped. The
/// elapsed time covers reading through merging, the final resort is not included.
pub(crate) fn run_parallel(files: &[PathBuf], job: &SortJob, config: &Config) -> SortResult<Outcome> {
    run_parallel_with(files, job, config, |slot| SortCommand::new(slot, job.clone()))
}

fn run_parallel_with<C, F>(files: &[PathBuf], job: &SortJob, config: &Config, sort_command: F) -> SortResult<Outcome>
where
    C: Command + Send + Sync + 'static,
    F: Fn(Slot) -> C,
{
    log::info!("Start multi threaded sort, job: {}, files: {}", job.name(), files.len());
    let mut run = ParallelRun::new(job);
    let slots: Vec<Slot> = files
        .iter()
        .enumerate()
        .map(|(index, path)| PartialResult::slot(index, path.clone()))
        .collect();

    let limits = raise_open_files_limit(files.len());
    let start = Instant::now();
    run.enter(Phase::Reading);
    let read_result = run_phase(
        Phase::Reading,
        slots.iter().map(|slot| ReadCommand::new(slot.clone())).collect(),
        config,
    );
    if let Some((soft, hard)) = limits {
        restore_open_files_limit(soft, hard);
    }
    read_result?;
    fail_unfinished(&slots, Phase::Reading)?;

    run.enter(Phase::Sorting);
    run_phase(
        Phase::Sorting,
        slots.iter().map(|slot| sort_command(slot.clone())).collect(),
        config,
    )?;
    fail_unfinished(&slots, Phase::Sorting)?;

    run.enter(Phase::Merging);
    let (partials, skipped) = collect_partials(&slots)?;
    let merged = merge_all(partials, job.order());
    let elapsed = start.elapsed();

    let lines = if config.final_resort() {
        run.enter(Phase::FinalResort);
        quick_sort(merged, job.order())
    } else {
        merged
    };
    run.enter(Phase::Done);
    log::info!(
        "Finish multi threaded sort, job: {}, lines: {}, elapsed: {:?}",
        job.name(),
        lines.len(),
        elapsed
    );
    Ok(Outcome::new(lines, elapsed, skipped))
}

fn run_phase<C>(phase: Phase, commands: Vec<C>, config: &Config) -> SortResult<()>
where
    C: Command + Send + Sync + 'static,
{
    if commands.is_empty() {
        return Ok(());
    }
    let mut thread_pool_builder = ThreadPoolBuilder::new();
    let mut pool = thread_pool_builder
        .with_name(phase.to_string())
        .with_tasks(commands.len())
        .with_queue_size(max(config.queue_size(), commands.len()))
        .with_shutdown_mode(ShutdownMode::CompletePending)
        .build()
        .map_err(|e| SortError::concurrency(format!("{} pool", phase), e.to_string()))?;

    for command in commands {
        pool.submit(Box::new(command));
    }
    pool.shutdown();
    pool.join()
        .map_err(|e| SortError::concurrency(format!("{} pool", phase), e.to_string()))?;
    Ok(())
}

fn fail_unfinished(slots: &[Slot], phase: Phase) -> SortResult<()> {
    for slot in slots {
        lock_slot(slot)?.fail_unfinished(&phase.to_string());
    }
    Ok(())
}

/// Partials in slot order, failed slots contribute an empty partial
fn collect_partials(slots: &[Slot]) -> SortResult<(Vec<Vec<String>>, Vec<PathBuf>)> {
    let mut partials = Vec::with_capacity(slots.len());
    let mut skipped = Vec::new();
    for slot in slots {
        match lock_slot(slot)?.take_lines() {
            Ok(lines) => partials.push(lines),
            Err((path, e)) => {
                log::warn!("Skipping input file, {}", e);
                partials.push(Vec::new());
                skipped.push(path);
            }
        }
    }
    Ok((partials, skipped))
}

fn raise_open_files_limit(files: usize) -> Option<(u64, u64)> {
    let (current_soft, current_hard) = match getrlimit(Resource::NOFILE) {
        Ok(limits) => limits,
        Err(e) => {
            log::warn!("Failed to get rlimit NOFILE: {}", e);
            return None;
        }
    };
    let new_soft = max((files + 256) as u64, current_soft).min(current_hard);
    if new_soft == current_soft {
        return None;
    }
    log::info!("Set new rlimit NOFILE, soft: {}, hard: {}", new_soft, current_hard);
    match setrlimit(Resource::NOFILE, new_soft, current_hard) {
        Ok(()) => Some((current_soft, current_hard)),
        Err(e) => {
            log::warn!("Failed to set rlimit NOFILE, soft: {}, hard: {}, error: {}", new_soft, current_hard, e);
            None
        }
    }
}

fn restore_open_files_limit(soft: u64, hard: u64) {
    log::info!("Restore rlimit NOFILE, soft: {}, hard: {}", soft, hard);
    if let Err(e) = setrlimit(Resource::NOFILE, soft, hard) {
        log::warn!("Failed to restore rlimit NOFILE: {}", e);
    }
}
