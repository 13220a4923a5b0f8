use std::path::PathBuf;

use serde::Serialize;

pub fn extract_base_name(path: &str) -> &str {
    std::path::Path::new(path)
        .file_stem() // Get the base name component of the path
        .and_then(|name| name.to_str())
        .expect("Unable to extract base name")
}

/// Build (and create on disk) `out/<command>/<base>[/<datetime>]`.
pub fn build_output_path_with_date_time(
    command: &str,
    base_name: &str,
    datetime: &Option<String>,
) -> PathBuf {
    let mut dirs = vec!["out", command, base_name];
    if let Some(inner_datetime_str) = datetime {
        dirs.push(inner_datetime_str);
    }

    let directory_path: PathBuf = dirs.iter().collect();
    std::fs::create_dir_all(&directory_path).unwrap();
    directory_path
}

pub fn date_time_string() -> String {
    use chrono::{Datelike, Local, Timelike};
    let local_time = Local::now();
    format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}",
        local_time.year(),
        local_time.month(),
        local_time.day(),
        local_time.hour(),
        local_time.minute(),
        local_time.second()
    )
}

pub fn maybe_date_time_string(enable: bool) -> Option<String> {
    if enable {
        Option::Some(date_time_string())
    } else {
        Option::None
    }
}

/**
 * Store a path and prefix together, making it easy to quickly generate
 * a collection of files with the same prefix, but separate suffixes.
 */
#[derive(Clone, Debug)]
pub struct FilePrefix {
    pub directory_path: PathBuf,
    pub file_base: String,
}

impl FilePrefix {
    pub fn with_suffix(&self, suffix: &str) -> PathBuf {
        self.directory_path.join(self.file_base.clone() + suffix)
    }
}

/// Boundary IO never reaches the core contracts; a failure to write an
/// output file is fatal and reported directly.
pub fn serialize_to_json_or_panic<T: Serialize>(filename: PathBuf, value: &T) {
    let contents = serde_json::to_string(value)
        .unwrap_or_else(|err| panic!("ERROR:  Unable to serialize parameters: {}", err));
    std::fs::write(&filename, contents)
        .unwrap_or_else(|_| panic!("ERROR:  Unable to write file: {}", filename.display()));
    log::info!("Wrote parameter file to: {}", filename.display());
}

pub fn write_image_to_file_or_panic<F, T, E>(filename: PathBuf, save_lambda: F)
where
    F: FnOnce(&PathBuf) -> Result<T, E>,
{
    save_lambda(&filename)
        .unwrap_or_else(|_| panic!("ERROR:  Unable to write image file: {}", filename.display()));
    log::info!("Wrote image file to: {}", filename.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_base_name() {
        assert_eq!(extract_base_name("params/render/default.json"), "default");
        assert_eq!(extract_base_name("default.json"), "default");
    }

    #[test]
    fn test_file_prefix_suffix_join() {
        let file_prefix = FilePrefix {
            directory_path: PathBuf::from("out/render/default"),
            file_base: "default".to_owned(),
        };
        assert_eq!(
            file_prefix.with_suffix(".png"),
            PathBuf::from("out/render/default/default.png")
        );
    }

    #[test]
    fn test_maybe_date_time_string() {
        assert_eq!(maybe_date_time_string(false), None);
        // Format: YYYYMMDD_HHMMSS
        assert_eq!(maybe_date_time_string(true).unwrap().len(), 15);
    }
}
