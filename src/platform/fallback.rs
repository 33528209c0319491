use log::debug;

use super::{DispatchError, Established, UseBackend, UseRequest};
use crate::{ForceLevel, NetStatus};

/// Stand-in for targets without the Windows network-use calls.
///
/// Every request reaches this "OS" and is answered with
/// [`NetStatus::NOT_SUPPORTED`], so callers see an ordinary rejection.
#[derive(Debug, Default, Clone, Copy)]
pub struct NetApi;

impl UseBackend for NetApi {
    fn establish(&mut self, request: &UseRequest<'_>) -> Result<Established, DispatchError> {
        debug!("network use sessions are not supported here, refusing {}", request.remote);
        Ok(Established::status(NetStatus::NOT_SUPPORTED))
    }

    fn teardown(&mut self, use_name: &str, _force: ForceLevel) -> Result<NetStatus, DispatchError> {
        debug!("network use sessions are not supported here, refusing teardown of {use_name}");
        Ok(NetStatus::NOT_SUPPORTED)
    }
}
