#![allow(clippy::style)]

use std::env;
use std::fs;
use std::io;
use std::num::NonZeroUsize;
use std::path::Path;

const DEBUG_DIGIT_LIMIT_VAR: &str = "RUST_DECIMAL_BIGINT_DEBUG_DIGIT_LIMIT";
const DEFAULT_DEBUG_DIGIT_LIMIT: usize = 64;

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-env-changed={}", DEBUG_DIGIT_LIMIT_VAR);

    let Some(outdir) = env::var_os("OUT_DIR") else {
        return Ok(());
    };

    let limit = debug_digit_limit()?;
    let source = format!("const DEBUG_DIGIT_LIMIT: usize = {limit};");
    write_if_changed(&Path::new(&outdir).join("debug_digit_limit.rs"), &source)
}

/// Digit count up to which `Debug` prints a value in full
fn debug_digit_limit() -> io::Result<usize> {
    let Ok(value) = env::var(DEBUG_DIGIT_LIMIT_VAR) else {
        return Ok(DEFAULT_DEBUG_DIGIT_LIMIT);
    };

    value
        .trim()
        .parse::<NonZeroUsize>()
        .map(NonZeroUsize::get)
        .map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("${DEBUG_DIGIT_LIMIT_VAR} must be an integer > 0, got {value:?}: {err}"),
            )
        })
}

/// Leave an up-to-date file untouched, so its mtime does not force a rebuild
fn write_if_changed(path: &Path, contents: &str) -> io::Result<()> {
    if fs::read_to_string(path).ok().as_deref() != Some(contents) {
        fs::write(path, contents)?;
    }
    println!("cargo:rerun-if-changed={}", path.display());
    Ok(())
}
