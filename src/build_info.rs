//! Build metadata
//!
//! `build.rs` stamps every compilation with a build number and a UTC time;
//! both are reported in the startup banner and by `GET /api/status`.

use std::fmt;

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const BUILD_NUMBER: u64 = match option_env!("NUTRICALC_BUILD_NUMBER") {
    Some(raw) => match parse_build_number(raw) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

const BUILT_AT: &str = match option_env!("NUTRICALC_BUILD_TIMESTAMP") {
    Some(raw) => raw,
    None => "unknown",
};

/// Decimal digits only; `str::parse` isn't const
const fn parse_build_number(raw: &str) -> Option<u64> {
    let bytes = raw.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut value: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        if !digit.is_ascii_digit() {
            return None;
        }
        value = value * 10 + (digit - b'0') as u64;
        i += 1;
    }
    Some(value)
}

/// Identity of the running binary, flattened into the status response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    #[serde(rename = "buildTimestamp")]
    pub built_at: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: VERSION,
            build_number: BUILD_NUMBER,
            built_at: BUILT_AT,
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{} (build {}, {})",
            self.name, self.version, self.build_number, self.built_at
        )
    }
}

/// Startup banner, written to stderr before logging starts
pub fn print_startup_banner() {
    eprintln!("===============================================");
    eprintln!("  Nutrient Intake Calculator");
    eprintln!("  {}", BuildInfo::current());
    eprintln!("===============================================");
}
