//! Caller identity
//!
//! The identity a request carries: a user identifier and an ordered role
//! list, both asserted by an upstream trust boundary. [`IdentityResolver`]
//! reads them from request headers; [`Identity`] is the strongly-typed
//! value everything downstream consumes.

pub mod resolver;
pub mod types;

pub use resolver::IdentityResolver;
pub use types::{ADMIN_ROLE, Identity};
