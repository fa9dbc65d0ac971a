//! Crewmatch CLI - Command line client for the assignment service.

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Crewmatch CLI - task-to-worker assignment tool
#[derive(Parser)]
#[command(name = "crewmatch")]
#[command(about = "CLI for the Crewmatch assignment service", long_about = None)]
struct Cli {
    /// Assignment service address
    #[arg(short, long, default_value = "http://[::1]:8740")]
    addr: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the task catalog
    Tasks,

    /// Search tasks by name prefix
    Search {
        /// Name prefix to search for
        query: String,
    },

    /// Show ranked worker recommendations for a task
    Recommend {
        /// Task ID
        task_id: String,
    },

    /// Add a worker to the selection
    Select {
        /// Worker ID
        worker_id: String,

        /// Task ID to select the worker for
        #[arg(short, long)]
        task: String,
    },

    /// Remove a worker from the selection
    Unselect {
        /// Worker ID
        worker_id: String,
    },

    /// Show the current selection
    Selection,

    /// Empty the selection
    Clear,

    /// Show the selection grouped by task
    Summary,

    /// Commit the selection as an assignment
    Assign,

    /// Check service health
    Health,
}

/// Errors that can occur when talking to the service.
#[derive(Debug, Error)]
enum CliError {
    /// Transport-level failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service rejected the request.
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

// ============================================================================
// Wire type mirrors
// ============================================================================

#[derive(Debug, Deserialize)]
struct Task {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct Worker {
    id: String,
    name: String,
    suitability_score: u8,
    availability: String,
    experience_years: u32,
    current_tasks: Vec<String>,
    selected: bool,
}

#[derive(Debug, Deserialize)]
struct SelectionEntry {
    id: String,
    name: String,
    suitability_score: u8,
    availability: String,
    task: String,
}

#[derive(Debug, Deserialize)]
struct ToggleResult {
    added: bool,
    selection: Vec<SelectionEntry>,
}

#[derive(Debug, Deserialize)]
struct RemoveResult {
    removed: bool,
    selection: Vec<SelectionEntry>,
}

#[derive(Debug, Deserialize)]
struct ClearResult {
    cleared: usize,
}

#[derive(Debug, Deserialize)]
struct TaskGroup {
    task: String,
    workers: Vec<SelectionEntry>,
}

#[derive(Debug, Deserialize)]
struct Summary {
    groups: Vec<TaskGroup>,
    total_workers: usize,
}

#[derive(Debug, Deserialize)]
struct Receipt {
    message: String,
    assigned_workers: usize,
    task_count: usize,
    committed_at: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: String,
}

#[derive(Debug, Serialize)]
struct ToggleRequest<'a> {
    worker_id: &'a str,
    task_id: &'a str,
}

// ============================================================================
// HTTP client
// ============================================================================

/// HTTP client for the assignment service API.
struct Client {
    inner: reqwest::Client,
    base_url: String,
}

impl Client {
    fn new(base_url: &str) -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CliError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.inner.get(&url).send().await?;
        decode(response).await
    }

    async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CliError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.inner.get(&url).query(query).send().await?;
        decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, CliError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.inner.post(&url).json(body).send().await?;
        decode(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, CliError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.inner.post(&url).send().await?;
        decode(response).await
    }

    async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CliError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.inner.delete(&url).send().await?;
        decode(response).await
    }
}

/// Decode a response, surfacing the server's error body on failure statuses.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CliError> {
    let status = response.status();
    if !status.is_success() {
        let message = match response.json::<ApiError>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        return Err(CliError::Api {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json()
        .await
        .map_err(|e| CliError::Decode(e.to_string()))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let client = Client::new(&cli.addr);

    if let Err(e) = run(cli.command, &client).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(command: Commands, client: &Client) -> Result<(), CliError> {
    match command {
        Commands::Tasks => list_tasks(client).await,
        Commands::Search { query } => search_tasks(client, &query).await,
        Commands::Recommend { task_id } => recommend(client, &task_id).await,
        Commands::Select { worker_id, task } => select(client, &worker_id, &task).await,
        Commands::Unselect { worker_id } => unselect(client, &worker_id).await,
        Commands::Selection => show_selection(client).await,
        Commands::Clear => clear_selection(client).await,
        Commands::Summary => show_summary(client).await,
        Commands::Assign => assign(client).await,
        Commands::Health => health(client).await,
    }
}

async fn list_tasks(client: &Client) -> Result<(), CliError> {
    let tasks: Vec<Task> = client.get_json("/v1/tasks").await?;
    print_tasks("Tasks", &tasks);
    Ok(())
}

async fn search_tasks(client: &Client, query: &str) -> Result<(), CliError> {
    let tasks: Vec<Task> = client
        .get_json_with_query("/v1/tasks/search", &[("q", query)])
        .await?;
    print_tasks(&format!("Matches for '{query}'"), &tasks);
    Ok(())
}

async fn recommend(client: &Client, task_id: &str) -> Result<(), CliError> {
    let workers: Vec<Worker> = client
        .get_json(&format!("/v1/tasks/{task_id}/recommendations"))
        .await?;

    println!("Recommended workers ({}):", workers.len());
    println!(
        "{:<4}  {:<6}  {:<14}  {:>5}  {:<10}  {:>4}  {}",
        "SEL", "ID", "NAME", "SCORE", "STATUS", "EXP", "CURRENT TASKS"
    );
    println!("{}", "-".repeat(80));

    for worker in workers {
        let marker = if worker.selected { "*" } else { "" };
        println!(
            "{:<4}  {:<6}  {:<14}  {:>4}%  {:<10}  {:>3}y  {}",
            marker,
            worker.id,
            worker.name,
            worker.suitability_score,
            worker.availability,
            worker.experience_years,
            worker.current_tasks.join(", ")
        );
    }

    Ok(())
}

async fn select(client: &Client, worker_id: &str, task_id: &str) -> Result<(), CliError> {
    let result: ToggleResult = client
        .post_json("/v1/selection", &ToggleRequest { worker_id, task_id })
        .await?;

    if result.added {
        println!("Worker {worker_id} selected.");
    } else {
        println!("Worker {worker_id} is already selected; selection unchanged.");
    }
    print_selection(&result.selection);

    Ok(())
}

async fn unselect(client: &Client, worker_id: &str) -> Result<(), CliError> {
    let result: RemoveResult = client
        .delete_json(&format!("/v1/selection/{worker_id}"))
        .await?;

    if result.removed {
        println!("Worker {worker_id} removed.");
    } else {
        println!("Worker {worker_id} was not selected.");
    }
    print_selection(&result.selection);

    Ok(())
}

async fn show_selection(client: &Client) -> Result<(), CliError> {
    let selection: Vec<SelectionEntry> = client.get_json("/v1/selection").await?;
    print_selection(&selection);
    Ok(())
}

async fn clear_selection(client: &Client) -> Result<(), CliError> {
    let result: ClearResult = client.delete_json("/v1/selection").await?;
    println!("Cleared {} workers.", result.cleared);
    Ok(())
}

async fn show_summary(client: &Client) -> Result<(), CliError> {
    let summary: Summary = client.get_json("/v1/selection/summary").await?;

    if summary.groups.is_empty() {
        println!("Nothing selected.");
        return Ok(());
    }

    for group in &summary.groups {
        println!("{} ({} workers):", group.task, group.workers.len());
        for worker in &group.workers {
            println!(
                "  - {} ({}, score {}%)",
                worker.name, worker.id, worker.suitability_score
            );
        }
    }
    println!(
        "Total: {} workers across {} tasks",
        summary.total_workers,
        summary.groups.len()
    );

    Ok(())
}

async fn assign(client: &Client) -> Result<(), CliError> {
    let receipt: Receipt = client.post_empty("/v1/assignments").await?;

    println!("Assignment committed:");
    println!("  Message:    {}", receipt.message);
    println!("  Workers:    {}", receipt.assigned_workers);
    println!("  Tasks:      {}", receipt.task_count);
    println!("  Committed:  {}", receipt.committed_at);

    Ok(())
}

async fn health(client: &Client) -> Result<(), CliError> {
    let body: serde_json::Value = client.get_json("/health").await?;
    println!("Service status: {}", body["status"].as_str().unwrap_or("unknown"));
    Ok(())
}

fn print_tasks(header: &str, tasks: &[Task]) {
    println!("{} ({}):", header, tasks.len());
    println!("{:<6}  {}", "ID", "NAME");
    println!("{}", "-".repeat(40));

    for task in tasks {
        println!("{:<6}  {}", task.id, task.name);
    }
}

fn print_selection(selection: &[SelectionEntry]) {
    println!("Selection ({}):", selection.len());
    println!(
        "{:<6}  {:<14}  {:<18}  {:>5}  {}",
        "ID", "NAME", "TASK", "SCORE", "STATUS"
    );
    println!("{}", "-".repeat(60));

    for entry in selection {
        println!(
            "{:<6}  {:<14}  {:<18}  {:>4}%  {}",
            entry.id, entry.name, entry.task, entry.suitability_score, entry.availability
        );
    }
}
