//! This tool's own release history, backing `--list-versions`.

/// Every released version of update-version, oldest first. The last entry
/// matches the crate version in Cargo.toml.
pub const RELEASES: &[(u64, u64, u64)] = &[(0, 1, 0), (0, 1, 1), (0, 1, 2)];

/// Renders the release history, one version per line.
pub fn listing() -> String {
    RELEASES
        .iter()
        .map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
        .collect::<Vec<_>>()
        .join("\n")
}
