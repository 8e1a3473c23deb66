//! Access to the paths the surrounding system provides.
//!
//! The [`PathSource`] trait is the seam between the pure path algebra
//! and the process environment; [`SystemPaths`] is the implementation
//! backed by the real environment. Tests substitute their own source
//! instead of touching the process state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies raw path strings from the surrounding system.
///
/// Every directory accessor returns `None` when the system cannot
/// provide the value; the factory turns that into
/// [`crate::Error::UnavailableSystemPath`].
pub trait PathSource {
    /// The process working directory, as a raw string.
    fn working_directory(&self) -> Option<String>;

    /// The system temporary directory, as a raw string.
    fn temp_directory(&self) -> Option<String>;

    /// The current user's home directory, as a raw string.
    fn home_directory(&self) -> Option<String>;

    /// A name unlikely to collide with other processes or calls.
    fn unique_name(&self) -> String;
}

/// The [`PathSource`] backed by the real process environment.
///
/// # Examples
///
/// ```
/// use sentier::{PathFactory, PathSource, SystemPaths};
///
/// let source = SystemPaths::new();
/// assert!(source.working_directory().is_some());
///
/// let factory = PathFactory::platform();
/// let cwd = factory.working_directory(&source)?;
/// assert!(!cwd.to_string().is_empty());
/// # Ok::<(), sentier::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPaths;

impl SystemPaths {
    /// Creates a source reading from the process environment.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PathSource for SystemPaths {
    fn working_directory(&self) -> Option<String> {
        std::env::current_dir()
            .ok()
            .map(|dir| dir.to_string_lossy().into_owned())
    }

    fn temp_directory(&self) -> Option<String> {
        Some(std::env::temp_dir().to_string_lossy().into_owned())
    }

    fn home_directory(&self) -> Option<String> {
        home::home_dir().map(|dir| dir.to_string_lossy().into_owned())
    }

    fn unique_name(&self) -> String {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let count = COUNTER.fetch_add(1, Ordering::Relaxed);
        let micros = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_micros());
        format!("{}-{micros}-{count}", std::process::id())
    }
}

/// A scripted source for tests: each slot holds what the accessor
/// returns.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeSource {
    pub(crate) working: Option<String>,
    pub(crate) temp: Option<String>,
    pub(crate) home: Option<String>,
    pub(crate) name: String,
}

#[cfg(test)]
impl PathSource for FakeSource {
    fn working_directory(&self) -> Option<String> {
        self.working.clone()
    }

    fn temp_directory(&self) -> Option<String> {
        self.temp.clone()
    }

    fn home_directory(&self) -> Option<String> {
        self.home.clone()
    }

    fn unique_name(&self) -> String {
        self.name.clone()
    }
}
