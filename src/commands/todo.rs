//! TODO management commands.

use crate::libs::formatter::FormattedTodo;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::todo::{Priority, TodoItem};
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TodoArgs {
    #[command(subcommand)]
    action: TodoAction,
}

#[derive(Debug, Subcommand)]
enum TodoAction {
    #[command(about = "Add a TODO item")]
    Add {
        /// Description (prompted for if omitted)
        description: Option<String>,
    },
    #[command(about = "Edit the TODO item at the given index")]
    Edit { index: usize },
    #[command(about = "Delete the TODO item at the given index")]
    Delete { index: usize },
    #[command(about = "Toggle completion of the TODO item at the given index")]
    Done { index: usize },
    #[command(about = "List all TODO items")]
    List,
}

pub fn cmd(args: TodoArgs) -> Result<()> {
    let mut session = Session::load()?;

    match args.action {
        TodoAction::Add { description } => {
            let todo = prompt_todo(description.as_deref(), None)?;
            session.todos.add(todo);
            session.save()?;
            msg_success!(Message::TodoAdded);
        }
        TodoAction::Edit { index } => {
            let current = session
                .todos
                .get(index)
                .cloned()
                .ok_or_else(|| msg_error_anyhow!(Message::TodoIndexInvalid(index)))?;
            let updated = prompt_todo(None, Some(&current))?;
            session
                .todos
                .edit(index, updated)
                .map_err(|_| msg_error_anyhow!(Message::TodoIndexInvalid(index)))?;
            session.save()?;
            msg_success!(Message::TodoUpdated);
        }
        TodoAction::Delete { index } => {
            if session.todos.get(index).is_none() {
                return Err(msg_error_anyhow!(Message::TodoIndexInvalid(index)));
            }
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptConfirmDelete.to_string())
                .default(false)
                .interact()?;
            if !confirmed {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            session.todos.delete(index).map_err(|_| msg_error_anyhow!(Message::TodoIndexInvalid(index)))?;
            session.save()?;
            msg_success!(Message::TodoDeleted);
        }
        TodoAction::Done { index } => {
            let completed = session
                .todos
                .toggle_completion(index)
                .map_err(|_| msg_error_anyhow!(Message::TodoIndexInvalid(index)))?;
            session.save()?;
            if completed {
                msg_success!(Message::TodoMarkedDone);
            } else {
                msg_success!(Message::TodoMarkedPending);
            }
        }
        TodoAction::List => {
            if session.todos.is_empty() {
                msg_info!(Message::NoTodos);
                return Ok(());
            }
            let rows: Vec<FormattedTodo> = session
                .todos
                .items()
                .iter()
                .enumerate()
                .map(|(index, todo)| FormattedTodo::new(index, todo))
                .collect();
            View::todos(&rows);
        }
    }

    Ok(())
}

/// Prompts for the todo fields. A description passed on the command
/// line skips its prompt; `current` pre-fills defaults when editing.
fn prompt_todo(description: Option<&str>, current: Option<&TodoItem>) -> Result<TodoItem> {
    let theme = ColorfulTheme::default();

    let description = match description {
        Some(description) => description.to_string(),
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptDescription.to_string())
            .with_initial_text(current.map(|t| t.description.clone()).unwrap_or_default())
            .interact_text()?,
    };

    let priorities = [Priority::Normal, Priority::High, Priority::Urgent];
    let default = current.map(|t| t.priority as usize).unwrap_or(0);
    let selection = Select::with_theme(&theme)
        .with_prompt(Message::PromptPriority.to_string())
        .items(&priorities.map(|p| p.label()))
        .default(default)
        .interact()?;

    Ok(TodoItem::new(&description, priorities[selection], current.map(|t| t.completed).unwrap_or(false)))
}
