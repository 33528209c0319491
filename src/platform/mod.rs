use crate::{Credentials, ForceLevel, NetStatus, UseKind};
use thiserror::Error;

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        mod windows;
        pub use self::windows::NetApi;
    } else {
        mod fallback;
        pub use self::fallback::NetApi;
    }
}

/// The call could not be issued, so the OS never produced a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("os error {code}")]
pub struct DispatchError {
    pub code: u32,
}

impl DispatchError {
    pub const fn new(code: u32) -> Self {
        Self { code }
    }
}

/// Everything the establish call needs for one use session.
#[derive(Debug)]
pub struct UseRequest<'a> {
    pub local: Option<&'a str>,
    pub remote: &'a str,
    pub credentials: &'a Credentials,
    pub kind: UseKind,
}

/// Result of an establish call that reached the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Established {
    pub status: NetStatus,
    /// Index of the offending `USE_INFO_2` field when the OS rejected a
    /// parameter.
    pub parm_error: Option<u32>,
}

impl Established {
    pub const fn status(status: NetStatus) -> Self {
        Self {
            status,
            parm_error: None,
        }
    }
}

/// Boundary to the OS network-use calls.
///
/// [`NetApi`] is the real implementation. Anything else implementing this can
/// stand in for it, which is how the handle logic is tested.
pub trait UseBackend {
    /// Add a use session for `request`.
    fn establish(&mut self, request: &UseRequest<'_>) -> Result<Established, DispatchError>;

    /// Delete the use session known as `use_name`.
    fn teardown(&mut self, use_name: &str, force: ForceLevel) -> Result<NetStatus, DispatchError>;
}

impl<B: UseBackend + ?Sized> UseBackend for Box<B> {
    fn establish(&mut self, request: &UseRequest<'_>) -> Result<Established, DispatchError> {
        (**self).establish(request)
    }

    fn teardown(&mut self, use_name: &str, force: ForceLevel) -> Result<NetStatus, DispatchError> {
        (**self).teardown(use_name, force)
    }
}
