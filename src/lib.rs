//! Authenticated connections to Windows network shares.
//!
//! [`ShareHandle`] adds a use session for a UNC path with explicit
//! credentials (`NetUseAdd`) and deletes it again (`NetUseDel`) when the
//! handle is dropped. The OS status of every call is kept verbatim in
//! [`NetStatus`].
//!
//! ```no_run
//! use unc_access::{Credentials, ShareHandle};
//!
//! # fn main() -> Result<(), unc_access::ShareError> {
//! let share = ShareHandle::open(r"\\server\share", Credentials::from_account(r"CORP\alice", "secret"))?;
//! for entry in std::fs::read_dir(r"\\server\share").into_iter().flatten() {
//!     println!("{:?}", entry.map(|e| e.file_name()));
//! }
//! share.close();
//! # Ok(())
//! # }
//! ```
//!
//! On targets other than Windows the default backend answers every request
//! with [`NetStatus::NOT_SUPPORTED`].
use std::fmt;
use thiserror::Error;

mod credentials;
mod handle;
mod options;
mod platform;
mod status;

pub use credentials::Credentials;
pub use handle::{ShareHandle, ShareState};
pub use options::{ConnectOptions, ForceLevel, UseKind};
pub use platform::{DispatchError, Established, NetApi, UseBackend, UseRequest};
pub use status::NetStatus;

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("{op} '{path}' rejected with status {status}")]
    Rejected {
        op: UseOp,
        path: String,
        status: NetStatus,
    },
    #[error("{op} could not be dispatched")]
    Dispatch {
        op: UseOp,
        #[source]
        source: DispatchError,
    },
    #[error("Invalid remote path '{0}'")]
    InvalidPath(String),
    #[error("No remote path has been connected")]
    NotConnected,
    #[error("Share handle already disposed")]
    Disposed,
}

impl ShareError {
    /// Status the failed operation left behind, if it produced one.
    pub fn status(&self) -> Option<NetStatus> {
        match self {
            ShareError::Rejected { status, .. } => Some(*status),
            ShareError::Dispatch { source, .. } => Some(NetStatus::from_code(source.code)),
            ShareError::InvalidPath(_) => Some(NetStatus::INVALID_PARAMETER),
            ShareError::NotConnected | ShareError::Disposed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseOp {
    Connect,
    Disconnect,
}

impl fmt::Display for UseOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UseOp::Connect => f.write_str("connect"),
            UseOp::Disconnect => f.write_str("disconnect"),
        }
    }
}
