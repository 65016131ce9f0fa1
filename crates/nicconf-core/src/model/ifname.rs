// ── Interface identity ──
//
// Interface names are opaque tokens handed out by the host. They are
// never normalized: `eth0` and `ETH0` are different interfaces.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Name of a host network interface, e.g. `eth0` or `enp3s0.10`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ifname(String);

impl Ifname {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Ifname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ifname {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for Ifname {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Ifname {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<&Ifname> for Ifname {
    fn from(name: &Ifname) -> Self {
        name.clone()
    }
}

impl AsRef<str> for Ifname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `BTreeMap<Ifname, _>` be queried with a plain `&str`.
impl Borrow<str> for Ifname {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Ifname {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Ifname {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
