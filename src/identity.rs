/// Owner and group names for numeric ids. Unknown ids map to "".
pub trait IdentityResolver {
    fn owner_name(&self, uid: u32) -> String;
    fn group_name(&self, gid: u32) -> String;
}

/// For platforms without user and group tables.
#[derive(Debug, Default)]
pub struct NoIdentities;

impl IdentityResolver for NoIdentities {
    fn owner_name(&self, _uid: u32) -> String {
        String::new()
    }

    fn group_name(&self, _gid: u32) -> String {
        String::new()
    }
}

#[cfg(unix)]
pub use unix::UnixIdentities as SystemIdentities;

#[cfg(not(unix))]
pub use NoIdentities as SystemIdentities;

#[cfg(unix)]
mod unix {
    use super::IdentityResolver;
    use uzers::{Groups, Users, UsersCache};

    /// passwd/group lookups, cached for the lifetime of the run.
    pub struct UnixIdentities {
        cache: UsersCache,
    }

    impl Default for UnixIdentities {
        fn default() -> Self {
            UnixIdentities {
                cache: UsersCache::new(),
            }
        }
    }

    impl IdentityResolver for UnixIdentities {
        fn owner_name(&self, uid: u32) -> String {
            self.cache
                .get_user_by_uid(uid)
                .map(|u| u.name().to_string_lossy().into_owned())
                .unwrap_or_default()
        }

        fn group_name(&self, gid: u32) -> String {
            self.cache
                .get_group_by_gid(gid)
                .map(|g| g.name().to_string_lossy().into_owned())
                .unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_identities_are_empty() {
        assert_eq!(NoIdentities.owner_name(0), "");
        assert_eq!(NoIdentities.group_name(0), "");
    }

    #[cfg(unix)]
    #[test]
    fn root_resolves() {
        let ids = SystemIdentities::default();
        assert_eq!(ids.owner_name(0), "root");
        assert_eq!(ids.owner_name(u32::MAX - 7), "");
    }
}
