use log::{debug, info, warn};

use crate::platform::{NetApi, UseBackend, UseRequest};
use crate::{ConnectOptions, Credentials, NetStatus, ShareError, UseOp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareState {
    #[default]
    Disconnected,
    Connected,
}

/// One authenticated connection to a network share.
///
/// The connection is torn down exactly once when the handle is disposed,
/// closed or dropped, which also covers early returns and panics in the code
/// holding it.
///
/// Failures never panic. The boolean operations mirror the OS status, which
/// stays available through [`last_status`](Self::last_status); the `try_`
/// variants return the same outcome as a [`ShareError`].
///
/// ```no_run
/// use unc_access::ShareHandle;
///
/// let mut share = ShareHandle::new();
/// if share.connect(r"\\server\share", "alice", "CORP", "secret") {
///     let _entries = std::fs::read_dir(r"\\server\share");
/// } else {
///     eprintln!("connect failed: {}", share.last_status());
/// }
/// // dropped here, the session is deleted
/// ```
#[derive(Debug)]
pub struct ShareHandle<B: UseBackend = NetApi> {
    backend: B,
    options: ConnectOptions,
    remote: Option<String>,
    username: String,
    domain: String,
    state: ShareState,
    last_status: NetStatus,
    last_parm_error: Option<u32>,
    disposed: bool,
}

impl ShareHandle<NetApi> {
    pub fn new() -> Self {
        Self::with_options(ConnectOptions::default())
    }

    pub fn with_options(options: ConnectOptions) -> Self {
        Self::with_backend(NetApi, options)
    }

    /// Connect straight away, turning a failed connect into an error.
    pub fn open(remote: &str, credentials: Credentials) -> Result<Self, ShareError> {
        let mut handle = Self::new();
        handle.connect_with(remote, credentials)?;
        Ok(handle)
    }
}

impl Default for ShareHandle<NetApi> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: UseBackend> ShareHandle<B> {
    pub fn with_backend(backend: B, options: ConnectOptions) -> Self {
        Self {
            backend,
            options,
            remote: None,
            username: String::new(),
            domain: String::new(),
            state: ShareState::Disconnected,
            last_status: NetStatus::SUCCESS,
            last_parm_error: None,
            disposed: false,
        }
    }

    /// Connects to `remote` with the given account.
    ///
    /// Returns `true` iff the OS reported success. Use
    /// [`last_status`](Self::last_status) to get the code.
    pub fn connect(&mut self, remote: &str, username: &str, domain: &str, password: &str) -> bool {
        self.connect_with(remote, Credentials::new(username, domain, password))
            .is_ok()
    }

    /// Connects to `remote`, consuming `credentials`.
    ///
    /// The password is wiped once the establish call returns. An existing
    /// session is torn down before the new one is requested; if that teardown
    /// fails the existing session stays connected, the teardown error is
    /// returned and nothing is established.
    ///
    /// # Errors
    ///
    /// - [`ShareError::Disposed`] if the handle was disposed; nothing is sent
    ///   to the OS.
    /// - [`ShareError::InvalidPath`] for an empty path or one containing NUL.
    /// - [`ShareError::Rejected`] when the OS returns a nonzero status.
    /// - [`ShareError::Dispatch`] when the call could not be issued.
    pub fn connect_with(&mut self, remote: &str, credentials: Credentials) -> Result<(), ShareError> {
        if self.disposed {
            warn!("refusing to connect {remote}: handle already disposed");
            return Err(ShareError::Disposed);
        }
        if remote.is_empty() || remote.contains('\0') {
            self.last_status = NetStatus::INVALID_PARAMETER;
            self.last_parm_error = None;
            warn!("refusing to connect invalid remote path {remote:?}");
            return Err(ShareError::InvalidPath(remote.to_string()));
        }

        if self.state == ShareState::Connected {
            debug!("replacing connection to {}", self.remote.as_deref().unwrap_or_default());
            if let Err(err) = self.try_disconnect() {
                // still ours, so dispose retries it
                self.state = ShareState::Connected;
                warn!("keeping previous connection, not connecting {remote}");
                return Err(err);
            }
        }

        self.remote = Some(remote.to_string());
        self.username = credentials.username().to_string();
        self.domain = credentials.domain().to_string();

        debug!("connecting {remote} as {}", credentials.account());
        let request = UseRequest {
            local: self.options.local.as_deref(),
            remote,
            credentials: &credentials,
            kind: self.options.kind,
        };
        let outcome = self.backend.establish(&request);
        drop(credentials);

        match outcome {
            Ok(established) => {
                self.last_status = established.status;
                self.last_parm_error = established.parm_error;
                if established.status.is_success() {
                    self.state = ShareState::Connected;
                    info!("connected {remote}");
                    Ok(())
                } else {
                    warn!("connect {remote} rejected with status {}", established.status);
                    Err(ShareError::Rejected {
                        op: UseOp::Connect,
                        path: remote.to_string(),
                        status: established.status,
                    })
                }
            }
            Err(source) => {
                self.last_status = NetStatus::from_code(source.code);
                self.last_parm_error = None;
                warn!("connect {remote} could not be dispatched: {source}");
                Err(ShareError::Dispatch {
                    op: UseOp::Connect,
                    source,
                })
            }
        }
    }

    /// Tears down the session from the most recent connect.
    ///
    /// Returns `true` iff the OS reported success. The handle is
    /// disconnected afterwards either way. Without a prior connect this
    /// returns `false` and leaves [`last_status`](Self::last_status) alone.
    pub fn disconnect(&mut self) -> bool {
        self.try_disconnect().is_ok()
    }

    /// # Errors
    ///
    /// - [`ShareError::NotConnected`] if nothing was ever connected. No OS
    ///   call is made and [`last_status`](Self::last_status) is left as is.
    /// - [`ShareError::Rejected`] when the OS returns a nonzero status.
    /// - [`ShareError::Dispatch`] when the call could not be issued.
    pub fn try_disconnect(&mut self) -> Result<(), ShareError> {
        let Some(remote) = self.remote.as_deref() else {
            return Err(ShareError::NotConnected);
        };
        let use_name = self.options.use_name(remote);
        let force = self.options.force;

        debug!("disconnecting {use_name}");
        let outcome = self.backend.teardown(use_name, force);
        self.state = ShareState::Disconnected;

        match outcome {
            Ok(status) => {
                self.last_status = status;
                if status.is_success() {
                    info!("disconnected {use_name}");
                    Ok(())
                } else {
                    warn!("disconnect {use_name} rejected with status {status}");
                    Err(ShareError::Rejected {
                        op: UseOp::Disconnect,
                        path: use_name.to_string(),
                        status,
                    })
                }
            }
            Err(source) => {
                self.last_status = NetStatus::from_code(source.code);
                warn!("disconnect {use_name} could not be dispatched: {source}");
                Err(ShareError::Dispatch {
                    op: UseOp::Disconnect,
                    source,
                })
            }
        }
    }

    /// Releases the handle. Only the first call does anything.
    ///
    /// Returns the teardown result if a connected session had to be torn
    /// down, `None` otherwise. Connecting afterwards is refused.
    pub fn dispose(&mut self) -> Option<bool> {
        if self.disposed {
            return None;
        }
        self.disposed = true;
        match self.state {
            ShareState::Connected => Some(self.disconnect()),
            ShareState::Disconnected => None,
        }
    }

    /// Disposes and consumes the handle. `true` unless a teardown failed.
    pub fn close(mut self) -> bool {
        self.dispose().unwrap_or(true)
    }

    /// Status of the most recent operation, `0` for success.
    pub fn last_status(&self) -> NetStatus {
        self.last_status
    }

    /// Index of the `USE_INFO_2` field the OS rejected during the last
    /// connect, if it reported one.
    pub fn last_parm_error(&self) -> Option<u32> {
        self.last_parm_error
    }

    pub fn state(&self) -> ShareState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ShareState::Connected
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn remote_path(&self) -> Option<&str> {
        self.remote.as_deref()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn options(&self) -> &ConnectOptions {
        &self.options
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: UseBackend> Drop for ShareHandle<B> {
    fn drop(&mut self) {
        self.dispose();
    }
}
