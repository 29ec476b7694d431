use std::fs;
use std::path::Path;

/// Compile-time settings read from `updater_config.h`, with their fallbacks.
const SETTINGS: &[(&str, &str)] = &[
    ("WIFI_SSID", ""),
    ("WIFI_PASSWORD", ""),
    ("DISPLAY_HOST", "192.168.1.99"),
    ("DISPLAY_PATH", "/nextion/sejour.tft"),
    ("DEVICE_NAME", "nextion-updater"),
    ("OTA_PASSWORD", ""),
];

fn main() -> anyhow::Result<()> {
    // Necessary for ESP-IDF
    embuild::espidf::sysenv::output();

    // Add crash log helper for better panic diagnostics
    println!("cargo:rustc-link-arg=-Wl,--undefined=esp_backtrace_print_app_description");

    let config_path = "updater_config.h";
    println!("cargo:rerun-if-changed={}", config_path);

    let contents = if Path::new(config_path).exists() {
        fs::read_to_string(config_path)?
    } else {
        println!("cargo:warning=updater_config.h not found! Copy updater_config.h.example to updater_config.h and fill in your values.");
        String::new()
    };

    for (name, fallback) in SETTINGS {
        let value = define_value(&contents, name).unwrap_or_else(|| {
            if !contents.is_empty() && !fallback.is_empty() {
                println!("cargo:warning={} not set in updater_config.h, using '{}'", name, fallback);
            }
            fallback.to_string()
        });
        println!("cargo:rustc-env={}={}", name, value);
    }

    Ok(())
}

/// Value of `#define NAME "value"`, if present.
fn define_value(contents: &str, name: &str) -> Option<String> {
    contents
        .lines()
        .map(str::trim)
        .find(|l| {
            l.strip_prefix("#define")
                .and_then(|rest| rest.split_whitespace().next())
                == Some(name)
        })
        .and_then(|l| l.split('"').nth(1))
        .map(str::to_string)
}
