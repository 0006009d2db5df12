pub mod catalog;
pub mod roster;

mod errors;

pub use catalog::FanCatalog;
pub use errors::LookupError;
pub use roster::{Member, Roster};

/// Read-only directory of tournament members.
///
/// Both lookups are total from the caller's point of view: a miss is reported as
/// `None` and the `resolve_*` helpers turn it into a fallback value.
pub trait MemberDirectory: Send + Sync {
    /// Tournament display name for a platform account handle.
    fn display_name(&self, handle: &str) -> Option<String>;

    /// Team of a player for the 3-seat or 4-seat bracket.
    fn team(&self, player_name: &str, player_count: usize) -> Option<String>;
}

/// Display name for `handle`, or the handle itself when the directory has no entry.
pub fn resolve_display_name(directory: &dyn MemberDirectory, handle: &str) -> String {
    match directory.display_name(handle) {
        Some(name) => name,
        None => {
            tracing::debug!(handle = %handle, "No display name registered, using handle");
            handle.to_string()
        }
    }
}

/// Team of `player_name`, or an empty string when the roster does not list one.
pub fn resolve_team(directory: &dyn MemberDirectory, player_name: &str, player_count: usize) -> String {
    directory
        .team(player_name, player_count)
        .unwrap_or_default()
}

/// Directory with no members; every handle resolves to itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDirectory;

impl MemberDirectory for NoDirectory {
    fn display_name(&self, _handle: &str) -> Option<String> {
        None
    }

    fn team(&self, _player_name: &str, _player_count: usize) -> Option<String> {
        None
    }
}
