use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Read raw task JSON from `path`, or from stdin when `path` is `None` or `-`.
///
/// The text is returned untouched; validation is the scoring client's job.
pub fn read_raw_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read task input from {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read task input from stdin")?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_file_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, "  [ ]\n").unwrap();
        assert_eq!(read_raw_input(Some(&path)).unwrap(), "  [ ]\n");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_raw_input(Some(Path::new("/nonexistent/tasks.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/tasks.json"));
    }
}
