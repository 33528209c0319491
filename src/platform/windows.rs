use ::windows::{
    Win32::{
        Foundation::ERROR_INVALID_PARAMETER,
        NetworkManagement::NetManagement::{
            FORCE_LEVEL_FLAGS, NetUseAdd, NetUseDel, USE_FORCE, USE_INFO_2, USE_INFO_ASG_TYPE,
            USE_LOTS_OF_FORCE, USE_NOFORCE,
        },
    },
    core::{PCWSTR, PWSTR},
};
use log::debug;
use std::ptr;
use zeroize::Zeroizing;

use super::{DispatchError, Established, UseBackend, UseRequest};
use crate::{ForceLevel, NetStatus};

const USE_INFO_LEVEL: u32 = 2;

/// `NetUseAdd` / `NetUseDel` against the local machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct NetApi;

impl UseBackend for NetApi {
    fn establish(&mut self, request: &UseRequest<'_>) -> Result<Established, DispatchError> {
        let local = request.local.map(wide).transpose()?;
        let remote = wide(request.remote)?;
        let password = wide(request.credentials.password())?;
        let username = wide(request.credentials.username())?;
        let domain = wide(request.credentials.domain())?;

        let info = USE_INFO_2 {
            ui2_local: local.as_ref().map_or(PWSTR::null(), as_pwstr),
            ui2_remote: as_pwstr(&remote),
            ui2_password: as_pwstr(&password),
            ui2_status: 0,
            ui2_asg_type: USE_INFO_ASG_TYPE(request.kind.code()),
            ui2_refcount: 0,
            ui2_usecount: 1,
            ui2_username: as_pwstr(&username),
            ui2_domainname: as_pwstr(&domain),
        };

        let mut parm_err = 0u32;
        // SAFETY: every string in `info` is NUL terminated and outlives the call.
        let code = unsafe {
            NetUseAdd(
                ptr::null(),
                USE_INFO_LEVEL,
                &info as *const USE_INFO_2 as *const u8,
                Some(&mut parm_err as *mut u32),
            )
        };
        debug!("NetUseAdd({}) returned {code}", request.remote);

        let status = NetStatus::from_code(code);
        Ok(Established {
            status,
            parm_error: (status == NetStatus::INVALID_PARAMETER).then_some(parm_err),
        })
    }

    fn teardown(&mut self, use_name: &str, force: ForceLevel) -> Result<NetStatus, DispatchError> {
        let name = wide(use_name)?;
        // SAFETY: `name` is NUL terminated and outlives the call.
        let code = unsafe { NetUseDel(PCWSTR::null(), PCWSTR(name.as_ptr()), force_flags(force)) };
        debug!("NetUseDel({use_name}, {force:?}) returned {code}");
        Ok(NetStatus::from_code(code))
    }
}

fn force_flags(force: ForceLevel) -> FORCE_LEVEL_FLAGS {
    match force {
        ForceLevel::NoForce => USE_NOFORCE,
        ForceLevel::Force => USE_FORCE,
        ForceLevel::LotsOfForce => USE_LOTS_OF_FORCE,
    }
}

/// UTF-16 copy with a trailing NUL, wiped on drop since it may hold a password.
fn wide(s: &str) -> Result<Zeroizing<Vec<u16>>, DispatchError> {
    if s.contains('\0') {
        return Err(DispatchError::new(ERROR_INVALID_PARAMETER.0));
    }
    Ok(Zeroizing::new(s.encode_utf16().chain(Some(0)).collect()))
}

// The use calls read the strings, they never write through these pointers.
fn as_pwstr(buf: &Zeroizing<Vec<u16>>) -> PWSTR {
    PWSTR(buf.as_ptr() as *mut u16)
}
