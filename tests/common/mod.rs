use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use data_encoding::HEXLOWER;
use rand::seq::SliceRandom;

pub fn setup() -> PathBuf {
    let results_dir_path = PathBuf::from("./target/results/");
    if !results_dir_path.exists() {
        fs::create_dir_all(&results_dir_path).unwrap_or_else(|_|
            panic!("Failed to create results directory: {:?}", results_dir_path)
        );
    }
    results_dir_path
}

#[allow(dead_code)]
pub fn read_lines(path: PathBuf) -> Result<Vec<String>, anyhow::Error> {
    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().map(|x| x.unwrap()).collect();
    Ok(lines)
}

pub fn temp_dir_name(dir: &PathBuf) -> PathBuf {
    let mut result = dir.clone();
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result
}

/// Create a fresh input directory under ./target/results with one file per entry of `contents`
#[allow(dead_code)]
pub fn create_input_dir(contents: &[String]) -> Result<PathBuf, anyhow::Error> {
    let input_dir = temp_dir_name(&setup());
    fs::create_dir_all(&input_dir)?;
    for (i, content) in contents.iter().enumerate() {
        fs::write(input_dir.join(format!("input-{:03}.txt", i)), content)?;
    }
    Ok(input_dir)
}

/// Shuffled words split over `files` file contents, newline terminated
#[allow(dead_code)]
pub fn random_contents(words: usize, files: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let mut lines: Vec<String> = (0..words)
        .map(|i| {
            let word = HEXLOWER.encode(&rand::random::<[u8; 4]>());
            // a few duplicates, prefixes and empty lines
            match i % 10 {
                0 => String::new(),
                1 => word[..3].to_string(),
                2 => "duplicate".to_string(),
                _ => word,
            }
        })
        .collect();
    lines.shuffle(&mut rng);
    let chunk = (lines.len() + files - 1) / files;
    lines
        .chunks(chunk.max(1))
        .map(|part| part.iter().map(|line| format!("{}\n", line)).collect())
        .collect()
}

#[allow(dead_code)]
pub fn cleanup(dir: &PathBuf) -> Result<(), anyhow::Error> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    Ok(())
}
