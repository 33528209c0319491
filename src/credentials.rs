use std::fmt;
use zeroize::Zeroizing;

/// Account used to authenticate a use session.
///
/// The password is wiped from memory when the value is dropped and never
/// appears in `Debug` output. A [`ShareHandle`](crate::ShareHandle) consumes
/// the credentials on connect and keeps only the username and domain.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    domain: String,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Credentials passed to the OS verbatim. Empty strings are allowed.
    pub fn new(
        username: impl Into<String>,
        domain: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            domain: domain.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Splits a `DOMAIN\user` account name.
    ///
    /// UPN (`user@corp.example`) and bare names keep the whole account as the
    /// username with an empty domain; the OS resolves those itself.
    pub fn from_account(account: &str, password: impl Into<String>) -> Self {
        match account.split_once('\\') {
            Some((domain, user)) if !domain.is_empty() && !user.is_empty() => {
                Self::new(user, domain, password)
            }
            _ => Self::new(account, "", password),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Only meant for handing to the establish call.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// `DOMAIN\user`, or just the username when no domain is set.
    pub fn account(&self) -> String {
        if self.domain.is_empty() {
            self.username.clone()
        } else {
            format!("{}\\{}", self.domain, self.username)
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("domain", &self.domain)
            .field("password", &"<redacted>")
            .finish()
    }
}
