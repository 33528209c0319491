/// Resource type requested from the OS (`ui2_asg_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UseKind {
    /// Let the OS match whatever type the remote resource is.
    Wildcard,
    #[default]
    Disk,
    Printer,
    Ipc,
}

impl UseKind {
    pub const fn code(self) -> u32 {
        match self {
            UseKind::Wildcard => u32::MAX, // USE_WILDCARD
            UseKind::Disk => 0,            // USE_DISKDEV
            UseKind::Printer => 1,         // USE_SPOOLDEV
            UseKind::Ipc => 3,             // USE_IPC
        }
    }
}

/// How hard the OS should try when tearing a use session down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceLevel {
    /// Fail if the connection has open files or devices.
    NoForce,
    /// Close open files, keep the session if devices are in use.
    Force,
    /// Close everything and drop the connection.
    #[default]
    LotsOfForce,
}

impl ForceLevel {
    pub const fn code(self) -> u32 {
        match self {
            ForceLevel::NoForce => 0,     // USE_NOFORCE
            ForceLevel::Force => 1,       // USE_FORCE
            ForceLevel::LotsOfForce => 2, // USE_LOTS_OF_FORCE
        }
    }
}

/// Knobs for a [`ShareHandle`](crate::ShareHandle).
///
/// The defaults describe a deviceless disk connection that is torn down with
/// full force.
///
/// ```
/// use unc_access::{ConnectOptions, ForceLevel};
///
/// let options = ConnectOptions::default().local("Z:").force(ForceLevel::Force);
/// assert_eq!(options.use_name(r"\\server\share"), "Z:");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectOptions {
    pub local: Option<String>,
    pub kind: UseKind,
    pub force: ForceLevel,
}

impl ConnectOptions {
    /// Map the share to a local device such as `Z:` or `LPT1`.
    pub fn local(mut self, device: impl Into<String>) -> Self {
        self.local = Some(device.into());
        self
    }

    pub fn kind(mut self, kind: UseKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn force(mut self, force: ForceLevel) -> Self {
        self.force = force;
        self
    }

    /// Name the OS knows the session by: the local device when one is
    /// mapped, otherwise the remote path.
    pub fn use_name<'a>(&'a self, remote: &'a str) -> &'a str {
        self.local.as_deref().unwrap_or(remote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_request_forced_disk_use() {
        let options = ConnectOptions::default();
        assert_eq!(options.local, None);
        assert_eq!(options.kind.code(), 0);
        assert_eq!(options.force.code(), 2);
    }

    #[test]
    fn use_name_prefers_local_device() {
        let remote = r"\\server\share";
        assert_eq!(ConnectOptions::default().use_name(remote), remote);
        assert_eq!(ConnectOptions::default().local("Z:").use_name(remote), "Z:");
    }

    #[test]
    fn wildcard_is_all_bits_set() {
        assert_eq!(UseKind::Wildcard.code(), 0xFFFF_FFFF);
        assert_eq!(UseKind::Ipc.code(), 3);
    }
}
