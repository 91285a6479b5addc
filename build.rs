use std::{env, error::Error, fs, path::Path};

#[path = "src/secrets_file.rs"]
mod secrets_file;

use secrets_file::{RawSecrets, Source, SECRETS_FILE, TEMPLATE_FILE};

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-env-changed=SECRETS_PATH");

    let source = Source::select(env::var("SECRETS_PATH").ok(), Path::new(SECRETS_FILE).exists());
    let path = source.path();

    // Tell Cargo to rerun if the secrets file changes
    for watched in source.watched() {
        println!("cargo:rerun-if-changed={}", watched.display());
    }

    if source == Source::Template {
        println!(
            "cargo:warning={} not found, building with empty values from {}. \
             After creating it, run `cargo clean -p {}` to pick it up",
            SECRETS_FILE,
            TEMPLATE_FILE,
            env!("CARGO_PKG_NAME"),
        );
    }

    // Read and parse
    let toml_str = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let raw = RawSecrets::parse(&toml_str)
        .map_err(|e| format!("failed to parse {}: {}", path.display(), e))?;

    for name in raw.empty_keys() {
        println!("cargo:warning=secret `{}` is empty in {}", name, path.display());
    }

    if env::var_os("CARGO_FEATURE_STRICT").is_some() {
        raw.require_complete()
            .map_err(|e| format!("{} in {}", e, path.display()))?;
    }

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, raw.to_rust())?;
    Ok(())
}
