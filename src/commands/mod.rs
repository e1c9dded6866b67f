//! Command handlers
//!
//! `dispatch` wires configuration, host selection, the remote channel and
//! the event sink into a [`BannerPipeline`], then hands it to the
//! subcommand.

mod deploy;
mod remove;

use anyhow::Result;

use emergency_banner::config::{load_for_cli, LoadedConfig};
use emergency_banner::domain::ports::{BannerEventSink, HostRegistry, RemoteChannel};
use emergency_banner::infrastructure::{
    CommandLifecycle, ConfigHostRegistry, DryRunChannel, FixedHosts, SshChannel,
};
use emergency_banner::{BannerPipeline, PipelineOptions};

use crate::cli::{Cli, Commands};
use crate::ui::events::{ConsoleEventSink, JsonEventSink};
use crate::ui::UiContext;

pub fn dispatch(cli: &Cli) -> Result<()> {
    let ui = UiContext::new(cli.json, cli.color);
    let cwd = std::env::current_dir()?;
    let loaded = load_for_cli(cli.config.as_deref(), &cwd)?;
    report_warnings(&loaded, &ui);

    let hosts = resolve_hosts(cli, &loaded)?;
    let remote = &loaded.config.remote;

    let ssh;
    let dry_run;
    let channel: &dyn RemoteChannel = if cli.dry_run {
        dry_run = DryRunChannel::new();
        &dry_run
    } else {
        ssh = SshChannel::from_config(remote);
        &ssh
    };
    let lifecycle = CommandLifecycle::new(channel, remote.restart_command.clone());

    let json_sink;
    let console_sink;
    let events: &dyn BannerEventSink = if ui.json {
        json_sink = JsonEventSink::stdout();
        &json_sink
    } else {
        console_sink = ConsoleEventSink::stdout(ui.style);
        &console_sink
    };

    let options = PipelineOptions {
        owner: remote.owner.clone(),
        file_mode: remote.file_mode_bits(),
    };
    let pipeline = BannerPipeline::new(channel, &lifecycle, options).with_events(events);

    match &cli.command {
        Commands::DeployEmergencyBanner(args) => deploy::cmd_deploy(args, &hosts, &pipeline),
        Commands::RemoveEmergencyBanner => remove::cmd_remove(&hosts, &pipeline),
    }
}

/// `--hosts` (or `BANNER_HOSTS`) wins over the role table
fn resolve_hosts(cli: &Cli, loaded: &LoadedConfig) -> Result<Vec<String>> {
    let registry: Box<dyn HostRegistry> = match cli.hosts.as_deref() {
        Some(list) => Box::new(FixedHosts::parse(list)),
        None => Box::new(ConfigHostRegistry::new(loaded.config.roles.clone())),
    };
    let hosts = registry.hosts_for_role(&cli.role)?;
    tracing::debug!(role = %cli.role, hosts = ?hosts, "resolved hosts");
    Ok(hosts)
}

fn report_warnings(loaded: &LoadedConfig, ui: &UiContext) {
    for warning in &loaded.warnings {
        if ui.json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
            }));
            continue;
        }
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        eprintln!("warning: unknown config key '{}' in {}", warning.key, location);
    }
}
