//! This crate sorts the lines of all text files in a directory by three ordering rules and compares
//! a single threaded and a multi threaded way of doing it.
//!
//! The rules are [order::Order::Ascending], [order::Order::Descending] and
//! [order::Order::LastLetter], the last one ordering lines by their final character, then the one
//! before it and so on. Each rule is applied by a partition-exchange sort.
//!
//! * The single threaded strategy reads the files one after another into one collection and sorts
//!   it on the calling thread.
//! * The multi threaded strategy reads every file on its own thread, sorts every file on its own
//!   thread, merges the sorted partial results and sorts the merged result once more.
//!
//! Every run writes its result to `Single{Rule}.txt` or `Multi{Rule}.txt` in the output directory
//! and reports the time it took.
//!
//! # Examples
//! ```no_run
//! use std::path::PathBuf;
//! use line_order_sort::sort::Sort;
//!
//! fn sort_all(input: PathBuf, output: PathBuf) -> Result<(), anyhow::Error> {
//!     let mut line_sort = Sort::new(input, output);
//!
//!     // the accumulated lines are sorted after every input file by default, sorting once after
//!     // the last file produces the same output with less work
//!     line_sort.with_resort_each_file(false);
//!
//!     for report in line_sort.sort()? {
//!         println!("{}", report);
//!     }
//!     Ok(())
//! }
//! ```
//!

pub(crate) mod config;
pub(crate) mod partial_result;
pub(crate) mod read_command;
pub(crate) mod sort_command;
pub(crate) mod single;
pub(crate) mod parallel;

pub mod algorithm;
pub mod comparator;
pub mod error;
pub mod input;
pub mod line_reader;
pub mod merge;
pub mod order;
pub mod output;
pub mod quick_sort;
pub mod sort;
pub mod sort_job;
