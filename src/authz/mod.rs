//! Authorization core
//!
//! Unix-style owner/group/other permission evaluation:
//!
//! 1. **Category mask** - owner match enables the owner triple, group match
//!    the group triple (both can apply); an unrecognized caller falls back
//!    to the "other" triple alone.
//! 2. **Mode mask** - the requested bit replicated across all three
//!    category positions, so one AND covers whichever triple applies.
//! 3. **Admin override** - the `admin` role bypasses bit checks entirely.
//!
//! [`AccessGate`] sits in front with the deployment bypass flags;
//! [`assign_on_create`] stamps ownership on the create path.

pub mod assigner;
pub mod bits;
pub mod evaluator;
pub mod gate;

pub use assigner::assign_on_create;
pub use bits::{
    ACCESS_MAX, AccessMode, GROUP_MASK, OTHER_MASK, OWNER_MASK, PERM_LINK, PERM_READ, PERM_WRITE,
};
pub use evaluator::{Decision, PermissionEvaluator, category_mask};
pub use gate::AccessGate;
