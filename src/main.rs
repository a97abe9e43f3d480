//! Task View RS binary entry point
//!
//! Fetches the task table from the configured backend and prints it
//! together with the dashboard counters. Pass `latest` to show the
//! server-defined recent subset instead of all tasks.

use task_view_rs::{config::Config, store::http::HttpStore, view::{TaskQuery, TaskView}};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    info!("Starting Task View RS");

    // Load configuration
    let config = Config::load()?;
    config.validate()?;

    info!("Using backend at {}", config.api_origin);

    let query = if std::env::args().any(|arg| arg == "latest") {
        TaskQuery::Latest
    } else {
        TaskQuery::All
    };

    let store = HttpStore::new(&config)?;
    let mut view = TaskView::new(query);
    view.load(&store).await;

    if view.is_empty() {
        println!("No tasks found");
        return Ok(());
    }

    println!("{:<4} {:<24} {:<40} {:<10}", "#", "Title", "Description", "Status");
    for (index, task) in view.tasks().iter().enumerate() {
        println!(
            "{:<4} {:<24} {:<40} {:<10}",
            index + 1,
            task.title,
            task.desc,
            task.status
        );
    }
    println!(
        "Total: {}  Completed: {}  Pending: {}",
        view.len(),
        view.completed_count(),
        view.pending_count()
    );

    Ok(())
}
