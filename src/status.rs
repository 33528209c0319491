use std::fmt;

/// Raw `NET_API_STATUS` returned by the network-use calls.
///
/// `0` means success. Any other value is an OS-defined error code and is kept
/// verbatim; the named constants below only cover codes commonly seen when
/// connecting to a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NetStatus(u32);

impl NetStatus {
    pub const SUCCESS: Self = Self(0); // NERR_Success
    pub const ACCESS_DENIED: Self = Self(5); // ERROR_ACCESS_DENIED
    pub const NOT_SUPPORTED: Self = Self(50); // ERROR_NOT_SUPPORTED
    pub const BAD_NETPATH: Self = Self(53); // ERROR_BAD_NETPATH
    pub const NETWORK_ACCESS_DENIED: Self = Self(65); // ERROR_NETWORK_ACCESS_DENIED
    pub const BAD_NET_NAME: Self = Self(67); // ERROR_BAD_NET_NAME
    pub const ALREADY_ASSIGNED: Self = Self(85); // ERROR_ALREADY_ASSIGNED
    pub const INVALID_PASSWORD: Self = Self(86); // ERROR_INVALID_PASSWORD
    pub const INVALID_PARAMETER: Self = Self(87); // ERROR_INVALID_PARAMETER
    pub const SESSION_CREDENTIAL_CONFLICT: Self = Self(1219); // ERROR_SESSION_CREDENTIAL_CONFLICT
    pub const LOGON_FAILURE: Self = Self(1326); // ERROR_LOGON_FAILURE
    pub const USE_NOT_FOUND: Self = Self(2250); // NERR_UseNotFound
    pub const OPEN_FILES: Self = Self(2401); // NERR_OpenFiles
    pub const DEVICE_IN_USE: Self = Self(2404); // NERR_DevInUse

    pub const fn from_code(code: u32) -> Self {
        Self(code)
    }

    pub const fn code(self) -> u32 {
        self.0
    }

    pub const fn is_success(self) -> bool {
        self.0 == 0
    }

    /// `Ok(())` for success, otherwise the status itself as the error.
    pub fn into_result(self) -> Result<(), NetStatus> {
        if self.is_success() { Ok(()) } else { Err(self) }
    }

    /// Short description for well-known codes, `None` for anything else.
    pub fn description(self) -> Option<&'static str> {
        let text = match self {
            Self::SUCCESS => "success",
            Self::ACCESS_DENIED => "access is denied",
            Self::NOT_SUPPORTED => "the request is not supported",
            Self::BAD_NETPATH => "the network path was not found",
            Self::NETWORK_ACCESS_DENIED => "network access is denied",
            Self::BAD_NET_NAME => "the network name cannot be found",
            Self::ALREADY_ASSIGNED => "the local device name is already in use",
            Self::INVALID_PASSWORD => "the specified network password is not correct",
            Self::INVALID_PARAMETER => "the parameter is incorrect",
            Self::SESSION_CREDENTIAL_CONFLICT => {
                "multiple connections to a server by the same user with different credentials are not allowed"
            }
            Self::LOGON_FAILURE => "the user name or password is incorrect",
            Self::USE_NOT_FOUND => "the network connection could not be found",
            Self::OPEN_FILES => "there are open files on the connection",
            Self::DEVICE_IN_USE => "the device is being accessed by an active process",
            _ => return None,
        };
        Some(text)
    }
}

impl From<u32> for NetStatus {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl From<NetStatus> for u32 {
    fn from(status: NetStatus) -> Self {
        status.0
    }
}

impl fmt::Display for NetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description() {
            Some(text) => write!(f, "{} ({text})", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
