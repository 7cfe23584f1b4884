//! Audit trail for permission decisions
//!
//! One record per evaluation, summarizing the inputs and the computed masks.
//! The record is advisory: it never feeds back into the decision, and
//! emitting it must neither block nor fail the decision path. Sinks are
//! injected so the embedding server chooses the transport; the default
//! writes one structured log line.

use crate::authz::bits::AccessMode;
use tracing::info;

/// Everything a single evaluation decided and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord<'a> {
    /// Final outcome of the bit check (admin override included)
    pub allowed: bool,
    /// Requested access mode
    pub mode: AccessMode,
    /// Resource the check was against
    pub resource_id: &'a str,
    /// Whether the admin override applied
    pub is_admin: bool,
    /// Requested mode bit expanded into all three category positions
    pub mode_mask: u32,
    /// Category triples the requester was matched to
    pub category_mask: u32,
    /// Requesting user
    pub user: &'a str,
    /// Requesting roles
    pub roles: &'a [String],
    /// Combined nine-bit permission value of the resource
    pub perms: u32,
    /// Resource owner
    pub owner: &'a str,
    /// Resource owning group
    pub group: &'a str,
}

/// Receives one record per evaluation
///
/// Implementations must be infallible and non-blocking; the evaluator calls
/// them synchronously on the decision path.
pub trait AuditSink: Send + Sync {
    fn record(&self, record: &AuditRecord<'_>);
}

/// Default sink: one structured `tracing` line per evaluation
///
/// Masks and permission values are rendered in octal to line up with the
/// owner/group/other triples.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, r: &AuditRecord<'_>) {
        info!(
            outcome = if r.allowed { "+++" } else { "---" },
            mode = r.mode.as_str(),
            resource = r.resource_id,
            admin = r.is_admin,
            mode_mask = %format_args!("{:03o}", r.mode_mask),
            mask = %format_args!("{:03o}", r.category_mask),
            user = r.user,
            roles = %r.roles.join(","),
            perms = %format_args!("{:03o}", r.perms),
            owner = r.owner,
            group = r.group,
            "access check"
        );
    }
}

/// Sink that drops every record, for callers that want no audit trail
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAuditSink;

impl AuditSink for NullAuditSink {
    fn record(&self, _record: &AuditRecord<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Sink capturing outcomes for assertions
    pub(crate) struct CapturingSink {
        pub seen: Mutex<Vec<(bool, String)>>,
    }

    impl CapturingSink {
        pub(crate) fn new() -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl AuditSink for CapturingSink {
        fn record(&self, record: &AuditRecord<'_>) {
            self.seen
                .lock()
                .unwrap()
                .push((record.allowed, record.resource_id.to_string()));
        }
    }

    #[test]
    fn test_null_sink_accepts_records() {
        let record = AuditRecord {
            allowed: true,
            mode: AccessMode::Read,
            resource_id: "res-1",
            is_admin: false,
            mode_mask: 0o444,
            category_mask: 0o700,
            user: "bob",
            roles: &[],
            perms: 0o640,
            owner: "bob",
            group: "eng",
        };
        NullAuditSink.record(&record);
        TracingAuditSink.record(&record);
    }

    #[test]
    fn test_capturing_sink_sees_outcome() {
        let sink = CapturingSink::new();
        let record = AuditRecord {
            allowed: false,
            mode: AccessMode::Write,
            resource_id: "res-2",
            is_admin: false,
            mode_mask: 0o222,
            category_mask: 0o007,
            user: "dave",
            roles: &[],
            perms: 0o640,
            owner: "bob",
            group: "eng",
        };
        sink.record(&record);
        assert_eq!(
            sink.seen.lock().unwrap().as_slice(),
            &[(false, "res-2".to_string())]
        );
    }
}
