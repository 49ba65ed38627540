use crate::config::StorageConfig;
use crate::config::loader::{ConfigRequest, ResolvedConfig, resolve};
use crate::error::{Error, Result};

use super::entry::{Args, Command, GlobalOptions};
use super::prompts::Prompt;

pub struct CliContext {
    options: GlobalOptions,
    command: Command,
    resolved: ResolvedConfig,
    prompt: Prompt,
}

impl CliContext {
    pub fn from_args(args: Args, prompt: Prompt) -> Result<Self> {
        let request = ConfigRequest {
            config_file: args.global.config_file.clone(),
            overrides: args.global.storage_overrides(),
        };

        let resolved = resolve(request)?;
        log::debug!(
            "resolved storage provider={:?} source={:?}",
            resolved.storage.provider,
            resolved.source
        );

        Ok(Self {
            options: args.global,
            command: args.command,
            resolved,
            prompt,
        })
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn resolved(&self) -> &ResolvedConfig {
        &self.resolved
    }

    pub fn is_non_interactive(&self) -> bool {
        self.options.non_interactive
    }

    pub fn ensure_interactive(&self, action: &str) -> Result<()> {
        if self.is_non_interactive() {
            Err(Error::non_interactive(action))
        } else {
            Ok(())
        }
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn storage_config(&self) -> &StorageConfig {
        &self.resolved.storage
    }
}
