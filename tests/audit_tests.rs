//! Audit emission tests
//!
//! Verifies the default tracing sink really writes the audit line, with the
//! logging configuration driving the subscriber the way an embedding server
//! wires it: level feeds the env filter, format selects pretty vs JSON
//! output.

use permgate::audit::{AuditRecord, AuditSink, TracingAuditSink};
use permgate::authz::AccessMode;
use permgate::config::{LogFormat, LoggingConfig};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Writer collecting subscriber output for assertions
#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn denial_record(roles: &[String]) -> AuditRecord<'_> {
    AuditRecord {
        allowed: false,
        mode: AccessMode::Write,
        resource_id: "res-1",
        is_admin: false,
        mode_mask: 0o222,
        category_mask: 0o070,
        user: "carol",
        roles,
        perms: 0o640,
        owner: "bob",
        group: "eng",
    }
}

/// Emit one record through a subscriber built from the given config
fn emit_with(config: &LoggingConfig) -> CaptureWriter {
    let writer = CaptureWriter::default();
    let filter = EnvFilter::new(&config.level);
    let roles = vec!["eng".to_string()];

    match config.format {
        LogFormat::Pretty => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer.clone())
                .with_ansi(false)
                .finish();
            tracing::subscriber::with_default(subscriber, || {
                TracingAuditSink.record(&denial_record(&roles));
            });
        }
        LogFormat::Json => {
            let subscriber = tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(writer.clone())
                .finish();
            tracing::subscriber::with_default(subscriber, || {
                TracingAuditSink.record(&denial_record(&roles));
            });
        }
    }

    writer
}

#[test]
fn test_pretty_line_carries_masks_and_outcome() {
    let output = emit_with(&LoggingConfig::default()).contents();

    assert!(output.contains("access check"), "line missing: {output}");
    assert!(output.contains("---"));
    assert!(output.contains("222"));
    assert!(output.contains("070"));
    assert!(output.contains("carol"));
    assert!(output.contains("eng"));
}

#[test]
fn test_json_line_is_parseable_with_octal_fields() {
    let config = LoggingConfig {
        level: "info".to_string(),
        format: LogFormat::Json,
    };
    let output = emit_with(&config).contents();

    let line: serde_json::Value =
        serde_json::from_str(output.lines().next().unwrap()).unwrap();
    let fields = &line["fields"];
    assert_eq!(fields["message"], "access check");
    assert_eq!(fields["outcome"], "---");
    assert_eq!(fields["mode"], "write");
    assert_eq!(fields["mode_mask"], "222");
    assert_eq!(fields["mask"], "070");
    assert_eq!(fields["perms"], "640");
    assert_eq!(fields["owner"], "bob");
    assert_eq!(fields["admin"], false);
}

#[test]
fn test_level_filter_suppresses_audit_line() {
    // audit lines emit at info; an error-level deployment drops them
    let config = LoggingConfig {
        level: "error".to_string(),
        format: LogFormat::Pretty,
    };
    let output = emit_with(&config).contents();
    assert!(output.is_empty(), "unexpected output: {output}");
}
