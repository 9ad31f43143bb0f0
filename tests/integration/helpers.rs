use std::io::Write;
use tempfile::NamedTempFile;

/// Config with near-zero pacing and plain output
pub fn fast_config(extra: &str) -> NamedTempFile {
    write_config(&format!(
        "[playback]\nstandard_delay_secs = 0.001\nquick_delay_secs = 0.001\n\n{}",
        extra
    ))
}

pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(content.as_bytes()).expect("write temp config");
    file
}
