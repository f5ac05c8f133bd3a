//! `tm` - terminal front end for the task API

use anyhow::{anyhow, bail};
use clap::{Parser, Subcommand};
use tm_core::task::TaskStatus;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use tm_client::{view, ClientConfig, HttpTaskApi, StatusFilter, TaskManager};

#[derive(Parser)]
#[command(name = "tm", version, about = "List, filter and edit tasks on a task API server")]
struct Cli {
    /// Base URL of the API (defaults to $TM_API_URL, then http://localhost:5000)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show tasks
    List {
        /// all, pending, in-progress or completed
        #[arg(long, default_value = "all")]
        filter: StatusFilter,
        /// Case-insensitive text to look for in title or description
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a task
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Pending, "In Progress" or Completed
        #[arg(long, default_value = "Pending")]
        status: TaskStatus,
    },
    /// Edit a task; omitted fields keep their current value
    Edit {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<TaskStatus>,
    },
    /// Delete a task
    Delete { id: Uuid },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tm_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli
        .api_url
        .map(ClientConfig::new)
        .unwrap_or_else(ClientConfig::from_env);
    tracing::debug!("Using API at {}", config.base_url);

    let mut manager = TaskManager::new(HttpTaskApi::new(config));
    if !manager.refresh().await.is_applied() {
        print!("{}", view::render(manager.state()));
        bail!("could not load tasks");
    }

    match cli.command {
        Command::List { filter, search } => {
            manager.set_status_filter(filter);
            if let Some(search) = search {
                manager.set_search_text(search);
            }
        }
        Command::Add {
            title,
            description,
            status,
        } => {
            let form = manager.form_mut();
            form.title = title;
            form.description = description;
            form.status = status;
            let _ = manager.submit_form().await?;
        }
        Command::Edit {
            id,
            title,
            description,
            status,
        } => {
            let task = manager
                .state()
                .find_task(id)
                .cloned()
                .ok_or_else(|| anyhow!("No task with id {}", id))?;
            manager.select_for_edit(task);

            let form = manager.form_mut();
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(status) = status {
                form.status = status;
            }
            let _ = manager.submit_form().await?;
        }
        Command::Delete { id } => {
            let _ = manager.remove_task(id).await;
        }
    }

    print!("{}", view::render(manager.state()));
    if let Some(error) = manager.state().error_message() {
        bail!("{}", error);
    }
    Ok(())
}
