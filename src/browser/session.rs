use crate::error::Result;

/// An exclusively-owned browser automation handle.
///
/// A session is acquired at the start of an extraction run and released by
/// dropping it. Implementations expose navigation plus an HTML snapshot of
/// the live document; everything else about the browser stays behind this
/// boundary.
pub trait Session {
    /// Load `url` in the live page.
    ///
    /// Slow or failed page loads are not detected here; they surface as a
    /// readiness timeout downstream.
    fn navigate(&mut self, url: &str) -> Result<()>;

    /// Snapshot of the current rendered document as an HTML string.
    fn content(&mut self) -> Result<String>;
}
