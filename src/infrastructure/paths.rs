//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is reachable under `/host`, which Zellij
//! points at the cwd of the focused terminal (usually the user's home directory).

use std::path::PathBuf;

/// Sandbox path standing in for the user's home directory.
const HOST_ROOT: &str = "/host";

/// Returns the directory holding memberdesk's span file.
///
/// ```
/// use memberdesk::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/memberdesk"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("memberdesk")
}

/// Maps a `~`-prefixed path (as users write it in the plugin config) into the
/// sandbox. Other paths are returned unchanged.
///
/// ```
/// use memberdesk::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dusk.toml"), "/host/themes/dusk.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_ROOT}/{rest}")
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_at_start() {
        assert_eq!(expand_tilde("~user/x"), "~user/x");
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
    }
}
