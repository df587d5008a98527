//! Command-line client for the cadastro API.
//!
//! Plays the role of the app: lists, creates, edits, and removes records
//! through the HTTP contract and prints the JSON responses. Holds no state
//! beyond the last response.

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "cadastro-cli", about = "CRUD client for the cadastro API")]
struct Cli {
    /// Base URL of the API server.
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    base_url: String,
    /// Resource to operate on: usuarios, users or alunos.
    #[arg(long, default_value = "usuarios")]
    resource: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List records, optionally filtered by nome substring.
    List {
        #[arg(long)]
        nome: Option<String>,
    },
    /// Fetch one record by id.
    Get { id: i64 },
    /// Create a record. VALUE fills the resource's second field.
    Add { nome: String, value: i64 },
    /// Replace a record's fields.
    Edit { id: i64, nome: String, value: i64 },
    /// Delete a record by id.
    Remove { id: i64 },
}

/// Second-field key per resource, mirroring the server registry.
fn extra_field(resource: &str) -> &'static str {
    match resource {
        "alunos" => "rm",
        _ => "idade",
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = format!("{}/{}", cli.base_url.trim_end_matches('/'), cli.resource);
    let field = extra_field(&cli.resource);

    let response = match &cli.command {
        Command::List { nome } => {
            let mut req = client.get(&base);
            if let Some(nome) = nome {
                req = req.query(&[("nome", nome)]);
            }
            req.send().await?
        }
        Command::Get { id } => client.get(format!("{base}/{id}")).send().await?,
        Command::Add { nome, value } => {
            client
                .post(&base)
                .json(&json!({ "nome": nome, field: value }))
                .send()
                .await?
        }
        Command::Edit { id, nome, value } => {
            client
                .put(format!("{base}/{id}"))
                .json(&json!({ "nome": nome, field: value }))
                .send()
                .await?
        }
        Command::Remove { id } => client.delete(format!("{base}/{id}")).send().await?,
    };

    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        eprintln!("{}: {}", status, text);
        std::process::exit(1);
    }
    match serde_json::from_str::<Value>(&text) {
        Ok(v) => println!("{}", serde_json::to_string_pretty(&v)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
