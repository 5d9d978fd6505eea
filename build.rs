use std::env;
use std::fs;
use std::path::Path;

/// Keys forwarded from `.env` into `option_env!` lookups in `src/config.rs`.
const CONFIG_KEYS: &[&str] = &[
    "AUTH_BASE_URL",
    "AUTH_TOKEN_PATH",
    "CREDENTIAL_STORAGE_KEY",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=.env exists but could not be read, using defaults");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            if !CONFIG_KEYS.contains(&key) {
                println!("cargo:warning=Ignoring unknown .env key {}", key);
                continue;
            }

            // A real environment variable wins over the file.
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
}
