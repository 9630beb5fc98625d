// Runtime version resolution for the default configuration
//
// Resolution order: the crate's own manifest (baked-in absolute path, present
// in dev and test environments), then a manifest relative to the current
// directory, then the literal fallback. Every failure along the chain is
// swallowed: a missing display version must never prevent the library from
// functioning.

use std::fs;
use std::path::Path;

/// Version reported when no manifest can be read or parsed
pub const FALLBACK_VERSION: &str = "0.0.0-development";

/// Resolve the library version at runtime
///
/// Reads `package.version` from `Cargo.toml`, trying the manifest directory
/// recorded at compile time first and the current directory second. Returns
/// [`FALLBACK_VERSION`] when neither location yields a parseable manifest.
///
/// This is the only filesystem touch point in the crate; it runs at
/// default-config time, never on the calculator/string hot path.
pub fn resolve() -> String {
    manifest_version(&Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml"))
        .or_else(|| manifest_version(Path::new("Cargo.toml")))
        .unwrap_or_else(|| FALLBACK_VERSION.to_string())
}

/// Extract `package.version` from a manifest file, if possible
///
/// Any failure (unreadable file, invalid TOML, missing table or field,
/// non-string version) yields `None`.
fn manifest_version(path: &Path) -> Option<String> {
    let raw = fs::read_to_string(path).ok()?;
    let manifest: toml::Value = toml::from_str(&raw).ok()?;

    manifest
        .get("package")?
        .get("version")?
        .as_str()
        .map(str::to_string)
}
