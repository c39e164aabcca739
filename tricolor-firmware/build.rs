//! Build script for tricolor-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates signal.toml at compile time with the core parser

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tricolor_core::config::parse_config;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).expect("create memory.x");
    f.write_all(memory_x).expect("write memory.x");

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate signal.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=signal.toml");

    let config_path = Path::new("signal.toml");

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Cannot read signal.toml", &[e.to_string()]),
    };

    // TOML syntax errors come with line and column
    if let Err(e) = toml::from_str::<toml::Value>(&content) {
        fail(
            "Invalid TOML syntax in signal.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        );
    }

    // Same parser the firmware runs at boot
    match parse_config(&content) {
        Ok(config) => println!(
            "cargo:warning=signal.toml validated: red=gpio{} yellow=gpio{} green=gpio{} phase={}ms",
            config.red.pin, config.yellow.pin, config.green.pin, config.phase_ms
        ),
        Err(e) => fail("Invalid signal.toml", &[e.to_string()]),
    }
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| format!("║  • {:<62} ║", line))
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
