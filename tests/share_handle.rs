use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use unc_access::{
    ConnectOptions, Credentials, DispatchError, Established, ForceLevel, NetStatus, ShareError,
    ShareHandle, ShareState, UseBackend, UseRequest,
};

/// Fixed answers, counting the calls it receives.
#[derive(Clone, Default)]
struct Counting {
    add_status: u32,
    del_status: u32,
    adds: Rc<Cell<usize>>,
    dels: Rc<Cell<usize>>,
}

impl Counting {
    fn answering(add_status: u32, del_status: u32) -> Self {
        Self {
            add_status,
            del_status,
            ..Self::default()
        }
    }
}

impl UseBackend for Counting {
    fn establish(&mut self, _request: &UseRequest<'_>) -> Result<Established, DispatchError> {
        self.adds.set(self.adds.get() + 1);
        Ok(Established::status(NetStatus::from_code(self.add_status)))
    }

    fn teardown(&mut self, _use_name: &str, _force: ForceLevel) -> Result<NetStatus, DispatchError> {
        self.dels.set(self.dels.get() + 1);
        Ok(NetStatus::from_code(self.del_status))
    }
}

const SHARE: &str = r"\\server\share";

#[test]
fn alice_connects_and_disconnects() {
    let backend = Counting::answering(0, 0);
    let mut share = ShareHandle::with_backend(backend.clone(), ConnectOptions::default());

    assert!(share.connect(SHARE, "alice", "CORP", "secret"));
    assert_eq!(share.last_status().code(), 0);
    assert!(share.disconnect());
    assert_eq!(share.last_status().code(), 0);
    assert_eq!(share.state(), ShareState::Disconnected);
    assert_eq!(backend.adds.get(), 1);
    assert_eq!(backend.dels.get(), 1);
}

#[test]
fn unreachable_server_fails_with_bad_netpath() {
    let backend = Counting::answering(53, 2250);
    let mut share = ShareHandle::with_backend(backend.clone(), ConnectOptions::default());

    assert!(!share.connect(r"\\unreachable\share", "alice", "CORP", "secret"));
    assert_eq!(share.last_status(), NetStatus::BAD_NETPATH);

    // still safe to call, the OS answer is passed through
    assert!(!share.disconnect());
    assert_eq!(share.last_status(), NetStatus::USE_NOT_FOUND);
    assert_eq!(share.state(), ShareState::Disconnected);
}

#[test]
fn disconnect_result_matches_status() {
    for del_status in [0, 5, 2250, 2401] {
        let mut share = ShareHandle::with_backend(
            Counting::answering(0, del_status),
            ConnectOptions::default(),
        );
        assert!(share.connect(SHARE, "alice", "CORP", "secret"));
        let ok = share.disconnect();
        assert_eq!(ok, share.last_status().is_success());
        assert_eq!(share.last_status().code(), del_status);
        assert_eq!(share.state(), ShareState::Disconnected);
    }
}

#[test]
fn drop_tears_down_once() {
    let backend = Counting::answering(0, 0);
    {
        let mut share = ShareHandle::with_backend(backend.clone(), ConnectOptions::default());
        assert!(share.connect(SHARE, "alice", "CORP", "secret"));
    }
    assert_eq!(backend.dels.get(), 1);
}

#[test]
fn early_return_tears_down_once() {
    fn read_report() -> Result<Vec<u8>, ShareError> {
        Err(ShareError::NotConnected)
    }

    fn copy_report(backend: Counting) -> Result<(), ShareError> {
        let mut share = ShareHandle::with_backend(backend, ConnectOptions::default());
        share.connect_with(SHARE, Credentials::new("alice", "CORP", "secret"))?;
        let _report = read_report()?;
        share.close();
        Ok(())
    }

    let backend = Counting::answering(0, 0);
    assert!(copy_report(backend.clone()).is_err());
    assert_eq!(backend.adds.get(), 1);
    assert_eq!(backend.dels.get(), 1);
}

#[test]
fn panic_unwinding_tears_down_once() {
    let backend = Counting::answering(0, 0);
    let inner = backend.clone();

    let result = panic::catch_unwind(AssertUnwindSafe(move || {
        let mut share = ShareHandle::with_backend(inner, ConnectOptions::default());
        share.connect(SHARE, "alice", "CORP", "secret");
        if share.is_connected() {
            panic!("caller failed while using the share");
        }
    }));

    assert!(result.is_err());
    assert_eq!(backend.dels.get(), 1);
}

#[test]
fn explicit_dispose_then_drop_tears_down_once() {
    let backend = Counting::answering(0, 0);
    let mut share = ShareHandle::with_backend(backend.clone(), ConnectOptions::default());

    assert!(share.connect(SHARE, "alice", "CORP", "secret"));
    assert_eq!(share.dispose(), Some(true));
    assert_eq!(share.dispose(), None);
    drop(share);
    assert_eq!(backend.dels.get(), 1);
}

#[test]
fn never_connected_handle_makes_no_calls() {
    let backend = Counting::answering(0, 0);
    let share = ShareHandle::with_backend(backend.clone(), ConnectOptions::default());
    assert!(share.close());
    assert_eq!(backend.adds.get(), 0);
    assert_eq!(backend.dels.get(), 0);
}

#[cfg(not(windows))]
#[test]
fn default_backend_is_not_supported_off_windows() {
    let mut share = ShareHandle::new();
    assert!(!share.connect(SHARE, "alice", "CORP", "secret"));
    assert_eq!(share.last_status(), NetStatus::NOT_SUPPORTED);

    let err = ShareHandle::open(SHARE, Credentials::from_account(r"CORP\alice", "secret"))
        .unwrap_err();
    assert_eq!(err.status(), Some(NetStatus::NOT_SUPPORTED));
}
