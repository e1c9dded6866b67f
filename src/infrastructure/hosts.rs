//! Host registries
//!
//! `ConfigHostRegistry` reads the `[roles]` table of the config file;
//! `FixedHosts` serves an explicit list (from `--hosts` or `BANNER_HOSTS`)
//! for any role.

use std::collections::BTreeMap;

use crate::domain::ports::HostRegistry;
use crate::error::{BannerError, BannerResult};

pub struct ConfigHostRegistry {
    roles: BTreeMap<String, Vec<String>>,
}

impl ConfigHostRegistry {
    pub fn new(roles: BTreeMap<String, Vec<String>>) -> Self {
        Self { roles }
    }
}

impl HostRegistry for ConfigHostRegistry {
    fn hosts_for_role(&self, role: &str) -> BannerResult<Vec<String>> {
        let hosts = self.roles.get(role).ok_or_else(|| BannerError::UnknownRole {
            role: role.to_string(),
        })?;
        checked(role, hosts)
    }
}

pub struct FixedHosts {
    hosts: Vec<String>,
}

impl FixedHosts {
    pub fn new(hosts: Vec<String>) -> Self {
        Self { hosts }
    }

    /// Parse a comma-separated host list, ignoring blanks
    pub fn parse(list: &str) -> Self {
        Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

impl HostRegistry for FixedHosts {
    fn hosts_for_role(&self, role: &str) -> BannerResult<Vec<String>> {
        checked(role, &self.hosts)
    }
}

/// Non-empty, and no entry that `ssh`/`scp` would read as an option
fn checked(role: &str, hosts: &[String]) -> BannerResult<Vec<String>> {
    if hosts.is_empty() {
        return Err(BannerError::NoHosts {
            role: role.to_string(),
        });
    }
    if let Some(host) = hosts.iter().find(|h| h.starts_with('-')) {
        return Err(BannerError::InvalidHost {
            role: role.to_string(),
            host: host.clone(),
        });
    }
    Ok(hosts.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ConfigHostRegistry {
        ConfigHostRegistry::new(BTreeMap::from([
            (
                "class-frontend".to_string(),
                vec!["frontend-1".to_string(), "frontend-2".to_string()],
            ),
            ("class-empty".to_string(), vec![]),
        ]))
    }

    #[test]
    fn known_role_keeps_host_order() {
        assert_eq!(
            registry().hosts_for_role("class-frontend").unwrap(),
            vec!["frontend-1", "frontend-2"]
        );
    }

    #[test]
    fn unknown_role_is_an_error() {
        assert!(matches!(
            registry().hosts_for_role("class-backend"),
            Err(BannerError::UnknownRole { .. })
        ));
    }

    #[test]
    fn empty_role_is_an_error() {
        assert!(matches!(
            registry().hosts_for_role("class-empty"),
            Err(BannerError::NoHosts { .. })
        ));
    }

    #[test]
    fn fixed_hosts_parse_comma_list() {
        let hosts = FixedHosts::parse(" web-1, ,web-2 ");
        assert_eq!(hosts.hosts_for_role("any").unwrap(), vec!["web-1", "web-2"]);
    }

    #[test]
    fn fixed_host_starting_with_dash_is_rejected() {
        let err = FixedHosts::parse("web-1,-oProxyCommand=touch /tmp/x")
            .hosts_for_role("class-frontend")
            .unwrap_err();
        assert!(
            matches!(err, BannerError::InvalidHost { ref host, .. } if host == "-oProxyCommand=touch /tmp/x")
        );
    }

    #[test]
    fn role_host_starting_with_dash_is_rejected() {
        let registry = ConfigHostRegistry::new(BTreeMap::from([(
            "class-frontend".to_string(),
            vec!["frontend-1".to_string(), "-F/dev/null".to_string()],
        )]));
        assert!(matches!(
            registry.hosts_for_role("class-frontend"),
            Err(BannerError::InvalidHost { .. })
        ));
    }

    #[test]
    fn fixed_hosts_blank_list_is_an_error() {
        assert!(matches!(
            FixedHosts::parse(" , ").hosts_for_role("class-frontend"),
            Err(BannerError::NoHosts { .. })
        ));
    }
}
