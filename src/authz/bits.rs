//! Permission bit constants and access modes
//!
//! The permission model is the Unix owner/group/other scheme: three
//! independent bit-triples packed into a nine-bit value, with read/write/link
//! occupying the same bit position in each triple. Named constants avoid the
//! octal-literal base confusion the scheme is notorious for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Read bit within a category triple
pub const PERM_READ: u32 = 0o4;
/// Write bit within a category triple
pub const PERM_WRITE: u32 = 0o2;
/// Link (reference) bit within a category triple; the Unix execute position
pub const PERM_LINK: u32 = 0o1;

/// Bits of the owner category (positions 6-8)
pub const OWNER_MASK: u32 = 0o700;
/// Bits of the group category (positions 3-5)
pub const GROUP_MASK: u32 = 0o070;
/// Bits of the other category (positions 0-2)
pub const OTHER_MASK: u32 = 0o007;

/// Largest value a single access triple may hold
pub const ACCESS_MAX: u8 = 0o7;

/// The kind of access being requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    /// Read the resource
    Read,
    /// Modify or delete the resource
    Write,
    /// Reference the resource from another object
    Link,
}

impl AccessMode {
    /// The single bit this mode occupies within a category triple
    pub const fn bit(self) -> u32 {
        match self {
            AccessMode::Read => PERM_READ,
            AccessMode::Write => PERM_WRITE,
            AccessMode::Link => PERM_LINK,
        }
    }

    /// The mode bit replicated into all three category positions
    ///
    /// One AND against the combined permission value then covers whichever
    /// category the requester mask selected, without branching per category.
    pub const fn mode_mask(self) -> u32 {
        let bit = self.bit();
        bit | bit << 3 | bit << 6
    }

    /// Get the mode name as a string
    pub const fn as_str(self) -> &'static str {
        match self {
            AccessMode::Read => "read",
            AccessMode::Write => "write",
            AccessMode::Link => "link",
        }
    }

    /// Get all modes
    pub fn all() -> &'static [AccessMode] {
        &[AccessMode::Read, AccessMode::Write, AccessMode::Link]
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
