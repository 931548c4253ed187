use std::fs;

/// Claves de `.env` que lee `AppConfig::from_env`
const CONFIG_KEYS: &[&str] = &[
    "STORAGE_KEY",
    "TICK_INTERVAL_MS",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "ROOT_ELEMENT_ID",
    "SELECTION_POLICY",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    // Sin .env se usan los valores por defecto de AppConfig
    let Ok(contents) = fs::read_to_string(".env") else {
        return;
    };

    for (key, value) in contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim().trim_matches('"')))
    {
        // Una variable del entorno real tiene prioridad sobre .env
        if CONFIG_KEYS.contains(&key) && std::env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
