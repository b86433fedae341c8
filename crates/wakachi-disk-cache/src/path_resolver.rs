//! # Cache Directory Resolution

use std::{
    env,
    path::{Path, PathBuf},
};

use directories_next::ProjectDirs;

/// Static configuration for locating the cache directory.
pub struct PathResolver {
    /// The qualifier for [`ProjectDirs`].
    pub qualifier: &'static str,

    /// The organization for [`ProjectDirs`].
    pub organization: &'static str,

    /// The application for [`ProjectDirs`].
    pub application: &'static str,

    /// Environment variables consulted, in order, before the platform default.
    pub cache_env_vars: &'static [&'static str],
}

impl PathResolver {
    /// Get the [`ProjectDirs`] for this config.
    pub fn project_dirs(&self) -> Option<ProjectDirs> {
        ProjectDirs::from(self.qualifier, self.organization, self.application)
    }

    /// Resolve the cache directory.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.cache_env_vars`; in order. Empty values are skipped.
    /// 3. `self.project_dirs().cache_dir()`, if present.
    /// 4. `None`
    ///
    /// On Linux the platform default is `$XDG_CACHE_HOME/wakachi`
    /// (or `$HOME/.cache/wakachi`).
    pub fn resolve_cache_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        if let Some(path) = path {
            return Some(path.as_ref().to_path_buf());
        }

        let from_env = self
            .cache_env_vars
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.is_empty());
        if let Some(value) = from_env {
            return Some(PathBuf::from(value));
        }

        self.project_dirs().map(|pds| pds.cache_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    const CACHE_ENV1: &str = "_WAKACHI_TEST_CACHE_ENV1";
    const CACHE_ENV2: &str = "_WAKACHI_TEST_CACHE_ENV2";

    const TEST_CONFIG: PathResolver = PathResolver {
        qualifier: "io",
        organization: "crates",
        application: "example",
        cache_env_vars: &[CACHE_ENV1, CACHE_ENV2],
    };

    #[test]
    #[serial]
    fn test_resolve_cache_dir() {
        let pds = TEST_CONFIG
            .project_dirs()
            .expect("failed to get project dirs");

        let no_path: Option<PathBuf> = None;
        let user_dir = PathBuf::from("/tmp/wakachi_test/user");
        let env_dir1 = PathBuf::from("/tmp/wakachi_test/env.1");
        let env_dir2 = PathBuf::from("/tmp/wakachi_test/env.2");

        unsafe {
            env::remove_var(CACHE_ENV1);
            env::remove_var(CACHE_ENV2);
        }

        assert_eq!(
            TEST_CONFIG.resolve_cache_dir(Some(&user_dir)),
            Some(user_dir.clone())
        );
        assert_eq!(
            TEST_CONFIG.resolve_cache_dir(no_path.clone()),
            Some(pds.cache_dir().to_path_buf())
        );

        // Lower priority var; an empty higher priority var is ignored.
        unsafe {
            env::set_var(CACHE_ENV1, "");
            env::set_var(CACHE_ENV2, env_dir2.to_str().unwrap());
        }
        assert_eq!(
            TEST_CONFIG.resolve_cache_dir(no_path.clone()),
            Some(env_dir2.clone())
        );
        assert_eq!(
            TEST_CONFIG.resolve_cache_dir(Some(&user_dir)),
            Some(user_dir.clone())
        );

        unsafe {
            env::set_var(CACHE_ENV1, env_dir1.to_str().unwrap());
        }
        assert_eq!(
            TEST_CONFIG.resolve_cache_dir(no_path.clone()),
            Some(env_dir1.clone())
        );

        unsafe {
            env::remove_var(CACHE_ENV1);
            env::remove_var(CACHE_ENV2);
        }
    }
}
