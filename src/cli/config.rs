use crate::config::StorageConfig;
use crate::config::loader::{ConfigSource, ResolvedConfig};
use crate::error::Result;

use super::{
    context::CliContext,
    entry::{ConfigCommand, ShowArgs},
};

pub fn execute(command: &ConfigCommand, ctx: &CliContext) -> Result<()> {
    match command {
        ConfigCommand::Show(args) => show_command(args, ctx),
    }
}

fn show_command(args: &ShowArgs, ctx: &CliContext) -> Result<()> {
    let credential_mode = if args.show_secrets {
        CredentialMode::PlainText
    } else {
        CredentialMode::Redacted
    };

    println!("# Configuration source: {}\n", source_hint(ctx.resolved()));
    print!("{}", format_config(ctx.storage_config(), credential_mode));
    Ok(())
}

fn source_hint(resolved: &ResolvedConfig) -> String {
    let file = resolved
        .config_file
        .as_ref()
        .map(|path| format!("config file '{}'", path.display()));

    match (resolved.source, file) {
        (ConfigSource::CommandLine, Some(file)) => {
            format!("command line / environment over {file}")
        }
        (ConfigSource::CommandLine, None) => "command line / environment".to_string(),
        (ConfigSource::ConfigFile, Some(file)) => file,
        _ => "defaults".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CredentialMode {
    /// Show credentials as-is
    PlainText,
    /// Mask all but the last few characters
    Redacted,
}

fn format_config(config: &StorageConfig, mode: CredentialMode) -> String {
    let mut out = format!("provider={}\n", config.provider.as_str());
    let plain = [
        ("bucket", &config.bucket),
        ("endpoint", &config.endpoint),
        ("region", &config.region),
        ("root_path", &config.root_path),
    ];
    for (key, value) in plain {
        if let Some(value) = value {
            out.push_str(&format!("{key}={value}\n"));
        }
    }

    let secrets = [
        ("access_key_id", &config.access_key_id),
        ("access_key_secret", &config.access_key_secret),
    ];
    for (key, value) in secrets {
        if let Some(value) = value {
            out.push_str(&format!("{key}={}\n", present_secret(value, mode)));
        }
    }

    if config.anonymous {
        out.push_str("anonymous=true\n");
    }
    out
}

fn present_secret(value: &str, mode: CredentialMode) -> String {
    match mode {
        CredentialMode::PlainText => value.to_string(),
        CredentialMode::Redacted => {
            let chars: Vec<char> = value.chars().collect();
            if chars.len() <= 4 {
                "****".to_string()
            } else {
                let tail: String = chars[chars.len() - 4..].iter().collect();
                format!("****{tail}")
            }
        }
    }
}
