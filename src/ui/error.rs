use emergency_banner::BannerError;

use super::theme::{Icon, Style};

pub fn format_error(err: &anyhow::Error, style: Style) -> String {
    let mut out = format!("{} {}", style.icon(Icon::Error), err);

    if let Some(banner) = err.downcast_ref::<BannerError>() {
        if let Some(hint) = hint(banner) {
            out.push_str(&format!("\n  {} {}", style.icon(Icon::Arrow), style.dim(hint)));
        }
    }
    out
}

fn hint(err: &BannerError) -> Option<&'static str> {
    match err {
        BannerError::RemoteStep { .. } => Some(
            "Later steps were skipped and nothing was rolled back. Fix the host and re-run the command.",
        ),
        BannerError::UnknownRole { .. } | BannerError::NoHosts { .. } => {
            Some("Define the role under [roles] in emergency-banner.toml or pass --hosts.")
        }
        BannerError::Prompt { .. } => {
            Some("Run from a terminal or pass every campaign field as a flag.")
        }
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool, style: Style) {
    if json {
        let mut output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        if let Some((application, host, step)) = err
            .downcast_ref::<BannerError>()
            .and_then(|e| e.failed_step())
        {
            output["application"] = serde_json::json!(application);
            output["host"] = serde_json::json!(host);
            output["step"] = serde_json::json!(step);
        }
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprintln!("{}", format_error(err, style));
}
