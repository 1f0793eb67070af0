use std::path::PathBuf;

use regex::Regex;

use crate::sort_job::SortJob;

#[derive(Clone)]
pub(crate) struct Config {
    input_dir: PathBuf,
    output_dir: PathBuf,
    jobs: Vec<SortJob>,
    single_threaded: bool,
    multi_threaded: bool,
    resort_each_file: bool,
    final_resort: bool,
    file_filter: Option<Regex>,
    queue_size: usize,
}

impl Config {
    pub(crate) fn new(
        input_dir: PathBuf,
        output_dir: PathBuf,
        jobs: Vec<SortJob>,
        single_threaded: bool,
        multi_threaded: bool,
        resort_each_file: bool,
        final_resort: bool,
        file_filter: Option<Regex>,
    ) -> Config {
        let queue_size = 1024;
        Config {
            input_dir,
            output_dir,
            jobs,
            single_threaded,
            multi_threaded,
            resort_each_file,
            final_resort,
            file_filter,
            queue_size,
        }
    }

    pub(crate) fn input_dir(&self) -> &PathBuf {
        &self.input_dir
    }

    pub(crate) fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    pub(crate) fn jobs(&self) -> &Vec<SortJob> {
        &self.jobs
    }

    pub(crate) fn single_threaded(&self) -> bool {
        self.single_threaded
    }

    pub(crate) fn multi_threaded(&self) -> bool {
        self.multi_threaded
    }

    pub(crate) fn resort_each_file(&self) -> bool {
        self.resort_each_file
    }

    pub(crate) fn final_resort(&self) -> bool {
        self.final_resort
    }

    pub(crate) fn file_filter(&self) -> &Option<Regex> {
        &self.file_filter
    }

    pub(crate) fn queue_size(&self) -> usize {
        self.queue_size
    }
}
