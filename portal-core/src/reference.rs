//! Shareable file references

/// URL schemes a remote streaming session can resolve.
pub const SHAREABLE_SCHEMES: [&str; 3] = ["omniverse://", "http://", "https://"];

/// Returns true if `path` names a file the remote session can reach.
///
/// Local paths and other schemes (`file://`, `ftp://`) are rejected. The
/// check is case-sensitive.
pub fn validate_reference(path: &str) -> bool {
    !path.is_empty() && SHAREABLE_SCHEMES.iter().any(|scheme| path.starts_with(scheme))
}
