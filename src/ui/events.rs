//! Event sinks for terminal and CI output

use std::cell::RefCell;
use std::io::{self, Write};

use emergency_banner::domain::ports::{BannerEvent, BannerEventSink};
use emergency_banner::Operation;

use super::json::{event_to_json, write_event};
use super::theme::{Icon, Style};

/// NDJSON event stream, one object per event
pub struct JsonEventSink<W: Write> {
    out: RefCell<W>,
}

impl JsonEventSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonEventSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> BannerEventSink for JsonEventSink<W> {
    fn on_event(&self, event: BannerEvent) {
        let mut value = event_to_json(&event);
        value["timestamp"] = serde_json::Value::String(chrono::Utc::now().to_rfc3339());
        // Progress output must never abort a remote pipeline midway
        let _ = write_event(&mut *self.out.borrow_mut(), &value);
    }
}

/// Human-readable progress lines
pub struct ConsoleEventSink<W: Write> {
    out: RefCell<W>,
    style: Style,
}

impl ConsoleEventSink<io::Stdout> {
    pub fn stdout(style: Style) -> Self {
        Self::new(io::stdout(), style)
    }
}

impl<W: Write> ConsoleEventSink<W> {
    pub fn new(out: W, style: Style) -> Self {
        Self {
            out: RefCell::new(out),
            style,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn line(&self, event: &BannerEvent) -> Option<String> {
        let s = &self.style;
        match event {
            BannerEvent::Started { operation, hosts } => {
                let icon = match operation {
                    Operation::Deploy => Icon::Deploy,
                    Operation::Remove => Icon::Remove,
                };
                Some(format!(
                    "{} {} emergency banner on {} host(s): {}",
                    s.icon(icon),
                    capitalize(&operation.to_string()),
                    hosts.len(),
                    hosts.join(", ")
                ))
            }
            BannerEvent::Rendered { application, bytes } => Some(format!(
                "  {} {}",
                s.icon(Icon::Progress),
                s.dim(&format!("{}: rendered {} bytes", application, bytes))
            )),
            BannerEvent::StepStarted { .. } => None,
            BannerEvent::StepCompleted {
                application,
                host,
                step,
                target,
            } => {
                let target = target
                    .as_deref()
                    .map(|t| format!(" {} {}", s.icon(Icon::Arrow), s.dim(t)))
                    .unwrap_or_default();
                Some(format!(
                    "  {} {} {} {}{}",
                    s.icon(Icon::Success),
                    application,
                    host,
                    step,
                    target
                ))
            }
            BannerEvent::StepFailed {
                application,
                host,
                step,
                error,
            } => Some(format!(
                "  {} {} {} {}: {}",
                s.icon(Icon::Error),
                application,
                host,
                step,
                error
            )),
            BannerEvent::Completed {
                operation,
                applications,
                hosts,
            } => Some(format!(
                "{} {} complete: {} applications on {} host(s)",
                s.icon(Icon::Success),
                capitalize(&operation.to_string()),
                applications,
                hosts
            )),
        }
    }
}

impl<W: Write> BannerEventSink for ConsoleEventSink<W> {
    fn on_event(&self, event: BannerEvent) {
        if let Some(line) = self.line(&event) {
            let _ = writeln!(self.out.borrow_mut(), "{}", line);
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
