//! Call-site resolution
//!
//! The logger's public methods are `#[track_caller]`, so by the time the
//! write path runs it already holds the [`Location`] of the application code
//! that made the call. A [`CallSiteResolver`] decides how a configured caller
//! depth maps onto that location.

use std::panic::Location;

/// File reported when the call site cannot be resolved.
pub const UNKNOWN_FILE: &str = "???";

/// Frames between the write path and the application call site: the write
/// path itself plus the public method that wraps it.
pub const DEFAULT_CALL_DEPTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

impl CallSite {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// The `???:0` sentinel.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_FILE, 0)
    }
}

impl From<&Location<'_>> for CallSite {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Maps a caller depth to a source location.
///
/// `caller` is the location tracked through the logger's `#[track_caller]`
/// methods. Returning `None` is never an error: the logger substitutes
/// [`CallSite::unknown`] and keeps going.
pub trait CallSiteResolver: Send + Sync {
    fn resolve(&self, depth: usize, caller: &'static Location<'static>) -> Option<CallSite>;
}

/// Default resolver built on `#[track_caller]`.
///
/// The tracked location sits exactly [`DEFAULT_CALL_DEPTH`] frames above the
/// write path, and the logger's own frames are folded into it. Any depth up
/// to that resolves to the application call site; deeper frames are not
/// visible and resolve to `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackedCallerResolver;

impl CallSiteResolver for TrackedCallerResolver {
    fn resolve(&self, depth: usize, caller: &'static Location<'static>) -> Option<CallSite> {
        if depth > DEFAULT_CALL_DEPTH {
            return None;
        }
        Some(CallSite::from(caller))
    }
}

/// Resolver for environments without call-site information.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolver;

impl CallSiteResolver for NoopResolver {
    fn resolve(&self, _depth: usize, _caller: &'static Location<'static>) -> Option<CallSite> {
        None
    }
}

impl<F> CallSiteResolver for F
where
    F: Fn(usize, &'static Location<'static>) -> Option<CallSite> + Send + Sync,
{
    fn resolve(&self, depth: usize, caller: &'static Location<'static>) -> Option<CallSite> {
        self(depth, caller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracked_resolver_default_depth() {
        let here = Location::caller();
        let site = TrackedCallerResolver
            .resolve(DEFAULT_CALL_DEPTH, here)
            .expect("default depth resolves");
        assert_eq!(site.file, here.file());
        assert_eq!(site.line, here.line());
    }

    #[test]
    fn test_tracked_resolver_too_deep() {
        let here = Location::caller();
        assert!(TrackedCallerResolver
            .resolve(DEFAULT_CALL_DEPTH + 1, here)
            .is_none());
        assert!(TrackedCallerResolver.resolve(64, here).is_none());
    }

    #[test]
    fn test_noop_resolver() {
        assert!(NoopResolver.resolve(DEFAULT_CALL_DEPTH, Location::caller()).is_none());
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |depth: usize, _caller: &'static Location<'static>| {
            Some(CallSite::new("virtual.rs", depth as u32))
        };
        let site = resolver.resolve(7, Location::caller()).unwrap();
        assert_eq!(site, CallSite::new("virtual.rs", 7));
    }

    #[test]
    fn test_unknown_sentinel() {
        let site = CallSite::unknown();
        assert_eq!(site.file, "???");
        assert_eq!(site.line, 0);
    }
}
