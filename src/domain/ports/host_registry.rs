//! Host Registry Port

use crate::error::BannerResult;

/// Resolves a role name (e.g. `class-frontend`) to the hosts that carry it
pub trait HostRegistry {
    /// Hosts for `role`, in the order they are visited
    ///
    /// Unknown roles and roles without hosts are errors, never an empty list.
    fn hosts_for_role(&self, role: &str) -> BannerResult<Vec<String>>;
}
