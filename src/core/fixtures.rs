//! Test/recording helpers for persisting downloaded sheets as fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn get_fixture_dir() -> PathBuf {
    env::var("HC_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

pub(crate) fn record_fixture(
    endpoint: &str,
    ticker: &str,
    ext: &str,
    body: &[u8],
) -> Result<(), std::io::Error> {
    let dir = get_fixture_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    let path = dir.join(format!("{endpoint}_{ticker}.{ext}"));
    fs::write(&path, body)?;

    tracing::debug!(path = %path.display(), "HC_RECORD: wrote fixture");
    Ok(())
}
