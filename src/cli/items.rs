use crate::error::Result;
use crate::form::{FIELD_TITLE, KillItemsForm};
use crate::ids::IdList;
use crate::messages::MessageQueue;
use crate::render::{FormView, Renderer, TerminalRenderer};
use crate::storage::StorageClient;
use crate::utils::format_kill_message;

use super::context::CliContext;
use super::entry::{Command, KillArgs};

pub async fn execute(command: &Command, ctx: &CliContext) -> Result<()> {
    let client = StorageClient::new(ctx.storage_config().clone()).await?;
    let messages = MessageQueue::new();
    let form = KillItemsForm::new(&client, &client, &messages);
    let renderer = TerminalRenderer;

    match command {
        Command::List => {
            let view = form.build_form().await?;
            print!("{}", renderer.render(&view));
        }
        Command::Kill(kill_args) => {
            let raw = read_ids(kill_args, ctx).await?;
            if !kill_args.force && !confirm_kill(&raw, ctx).await? {
                println!("Operation cancelled.");
                return Ok(());
            }
            form.submit_form(&raw).await?;
            print_messages(&messages);
        }
        Command::Form => {
            ctx.ensure_interactive("form")?;
            let view = form.build_form().await?;
            print!("{}", renderer.render(&view));
            if matches!(view, FormView::Empty { .. }) {
                return Ok(());
            }

            let raw = ctx.prompt().input(FIELD_TITLE).await?;
            form.submit_form(&raw).await?;

            println!();
            print_messages(&messages);
            let view = form.build_form().await?;
            print!("{}", renderer.render(&view));
        }
        Command::Config(_) => {
            unreachable!("Config commands are handled separately")
        }
    }
    Ok(())
}

async fn read_ids(args: &KillArgs, ctx: &CliContext) -> Result<String> {
    match &args.ids {
        Some(ids) => Ok(ids.clone()),
        None => {
            ctx.ensure_interactive("kill without IDS")?;
            ctx.prompt().input(FIELD_TITLE).await
        }
    }
}

/// Ask before killing. Input that fails validation is not confirmed; the
/// form reports it instead.
async fn confirm_kill(raw: &str, ctx: &CliContext) -> Result<bool> {
    match IdList::parse(raw) {
        Ok(ids) => {
            let message = format_kill_message(ids.as_slice());
            ctx.prompt().confirm(&message, false).await
        }
        Err(_) => Ok(true),
    }
}

fn print_messages(messages: &MessageQueue) {
    for message in messages.drain() {
        println!("{message}");
    }
}
