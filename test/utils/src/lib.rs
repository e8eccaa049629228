use std::env;
use std::fs;
use std::path::PathBuf;

/// Writes `bytes` into a per-process temp directory and returns the path.
/// Callers should pass a unique name, tests run in parallel.
pub fn write_fixture_file(name: &str, bytes: &[u8]) -> PathBuf {
    let dir = env::temp_dir().join(format!("careermatch-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();

    return path;
}

/// Smallest valid PNG: a single transparent pixel.
pub fn png_fixture() -> Vec<u8> {
    return vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];
}

pub fn resume_fixture() -> &'static str {
    return r#"
Jane Doe
Backend Engineer, 5 years

- Built payment APIs in Go and Rust serving 2M requests a day.
- Migrated a monolith to Kubernetes, cutting deploy time from 40 to 8 minutes.
- Mentored three junior engineers.
"#
    .trim();
}

pub fn analysis_fixture() -> &'static str {
    return r##"{"refinedResume":"# Jane Doe\n\n## Summary\n\nBackend engineer with **5 years** of experience.\n\n- Built payment APIs\n- Led a Kubernetes migration","keyMatchingPoints":["Rust experience matches the stack","Payments background fits the domain","Kubernetes migration shows ownership"]}"##;
}
