use chrono::{Datelike, Local};
use std::path::{Path, PathBuf};

/// Generate default report filename with format: {directory}/state-fuel-{YYMMDD}.{extension}
pub fn generate_default_report_filename(directory: &Path, extension: &str) -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year

    let filename = format!(
        "state-fuel-{:02}{:02}{:02}.{}",
        year,
        now.month(),
        now.day(),
        extension
    );
    directory.join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::DEFAULT_OUTPUT_DIR;

    #[test]
    fn test_generate_default_report_filename() {
        let filename = generate_default_report_filename(Path::new(DEFAULT_OUTPUT_DIR), "json");
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.starts_with("output/"));
        assert!(filename_str.ends_with(".json"));

        let parts: Vec<&str> = filename_str.split('/').collect();
        assert_eq!(parts.len(), 2);

        // state-fuel-YYMMDD.json
        let file_part = parts[1];
        assert!(file_part.starts_with("state-fuel-"));
        assert_eq!(file_part.len(), "state-fuel-".len() + 6 + ".json".len());
    }

    #[test]
    fn test_extension_is_respected() {
        let filename = generate_default_report_filename(Path::new("reports"), "csv");
        assert_eq!(filename.extension().and_then(|e| e.to_str()), Some("csv"));
        assert!(filename.starts_with("reports"));
    }
}
