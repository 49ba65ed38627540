use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::loader::StorageOverrides;
use crate::error::Result;

use super::{config, context::CliContext, items, prompts::Prompt};

#[derive(Parser, Debug, Clone)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    author = "WangErxi",
    about = "List field collection items and kill the ones you name",
    after_help = "Killed items are gone for good. Be careful!"
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Disable interactive prompts (fail fast when input is required)
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Read storage settings from this TOML file
    #[arg(
        long = "config-file",
        value_name = "PATH",
        env = "KILL_ITEMS_CONFIG",
        global = true
    )]
    pub config_file: Option<PathBuf>,

    /// Storage provider (fs|memory|s3)
    #[arg(long, env = "KILL_ITEMS_PROVIDER", global = true)]
    pub provider: Option<String>,

    /// Root path of the item store
    #[arg(long = "root", value_name = "PATH", env = "KILL_ITEMS_ROOT", global = true)]
    pub root_path: Option<String>,

    /// Bucket name (s3)
    #[arg(long, env = "KILL_ITEMS_BUCKET", global = true)]
    pub bucket: Option<String>,

    /// Endpoint override (s3)
    #[arg(long, env = "KILL_ITEMS_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Region (s3)
    #[arg(long, env = "KILL_ITEMS_REGION", global = true)]
    pub region: Option<String>,

    /// Access key id (s3)
    #[arg(
        long = "access-key-id",
        env = "KILL_ITEMS_ACCESS_KEY_ID",
        hide_env_values = true,
        global = true
    )]
    pub access_key_id: Option<String>,

    /// Secret access key (s3)
    #[arg(
        long = "access-key-secret",
        env = "KILL_ITEMS_ACCESS_KEY_SECRET",
        hide_env_values = true,
        global = true
    )]
    pub access_key_secret: Option<String>,
}

impl GlobalOptions {
    pub fn storage_overrides(&self) -> StorageOverrides {
        StorageOverrides {
            provider: self.provider.clone(),
            bucket: self.bucket.clone(),
            access_key_id: self.access_key_id.clone(),
            access_key_secret: self.access_key_secret.clone(),
            endpoint: self.endpoint.clone(),
            region: self.region.clone(),
            root_path: self.root_path.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Inspect the resolved configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Show every field collection item
    List,
    /// Kill the items whose ids are given
    Kill(KillArgs),
    /// Show the items, ask for ids to kill, then show what is left
    Form,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the storage configuration in effect
    Show(ShowArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ShowArgs {
    /// Show secrets in plaintext. Default: redacted
    #[arg(long)]
    pub show_secrets: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct KillArgs {
    /// Comma separated list of ids of items to kill (prompted for when omitted)
    #[arg(value_name = "IDS", allow_hyphen_values = true)]
    pub ids: Option<String>,

    /// Kill without asking for confirmation
    #[arg(short = 'f', long)]
    pub force: bool,
}

pub async fn run(args: Args) -> Result<()> {
    run_with_prompt(args, None).await
}

pub async fn run_with_prompt(args: Args, prompt: Option<Prompt>) -> Result<()> {
    let prompt = prompt.unwrap_or_else(|| Prompt::new(!args.global.non_interactive));

    let ctx = CliContext::from_args(args, prompt)?;
    match ctx.command() {
        Command::Config(cmd) => config::execute(cmd, &ctx),
        item_cmd => items::execute(item_cmd, &ctx).await,
    }
}
