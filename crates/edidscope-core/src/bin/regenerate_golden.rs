use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use edidscope_core::{InputFormat, inspect_file};

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(input) = find_input(&path) else {
            continue;
        };
        let output = path.join("expected_report.json");
        regenerate_one(&input, &output)?;
    }

    Ok(())
}

fn find_input(dir: &Path) -> Option<PathBuf> {
    ["input.hex", "input.bin"]
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.exists())
}

fn regenerate_one(input: &Path, output: &Path) -> Result<(), String> {
    let report = inspect_file(input, InputFormat::Auto)
        .map_err(|err| format!("decode failed for {}: {}", input.display(), err))?;
    let json = serde_json::to_string_pretty(&report)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    fs::write(output, json + "\n")
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
