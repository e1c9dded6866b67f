use std::io::{self, Write};

use emergency_banner::domain::ports::BannerEvent;
use serde_json::json;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// JSON shape of a banner event, without timestamp
pub fn event_to_json(event: &BannerEvent) -> serde_json::Value {
    match event {
        BannerEvent::Started { operation, hosts } => json!({
            "event": "started",
            "operation": operation,
            "hosts": hosts,
        }),
        BannerEvent::Rendered { application, bytes } => json!({
            "event": "rendered",
            "application": application,
            "bytes": bytes,
        }),
        BannerEvent::StepStarted {
            application,
            host,
            step,
            target,
        } => json!({
            "event": "step_started",
            "application": application,
            "host": host,
            "step": step,
            "target": target,
        }),
        BannerEvent::StepCompleted {
            application,
            host,
            step,
            target,
        } => json!({
            "event": "step_completed",
            "application": application,
            "host": host,
            "step": step,
            "target": target,
        }),
        BannerEvent::StepFailed {
            application,
            host,
            step,
            error,
        } => json!({
            "event": "step_failed",
            "application": application,
            "host": host,
            "step": step,
            "error": error,
        }),
        BannerEvent::Completed {
            operation,
            applications,
            hosts,
        } => json!({
            "event": "completed",
            "operation": operation,
            "applications": applications,
            "hosts": hosts,
        }),
    }
}
