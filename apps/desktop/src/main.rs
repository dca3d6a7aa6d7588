use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use client_core::{ActionError, AssistantClient, ClientEvent, DEFAULT_SERVER_URL};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the assistant backend.
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    server_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();
    debug!(server_url = %args.server_url, "starting assistant client");

    let client = AssistantClient::new(args.server_url);

    {
        let mut events = client.subscribe_events();
        tokio::spawn(async move {
            while let Ok(event) = events.recv().await {
                match event {
                    ClientEvent::EntryAppended(entry) => {
                        let speaker = if entry.is_user { "you" } else { "assistant" };
                        println!("[{speaker}] {}", entry.text);
                    }
                    ClientEvent::Error(message) => eprintln!("! {message}"),
                    _ => {}
                }
            }
        });
    }

    println!(
        "Mini-RAG assistant. /upload <path>, /docs, /select <n>, /dismiss, /quit; \
         anything else is a question."
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        if let Some(path) = line.strip_prefix("/upload ") {
            upload(&client, path.trim()).await;
        } else if line == "/docs" {
            for (index, view) in client.documents().await.iter().enumerate() {
                let marker = if view.is_selected { "*" } else { " " };
                println!("{marker} {index}: {}", view.name);
            }
        } else if let Some(index) = line.strip_prefix("/select ") {
            select(&client, index.trim()).await;
        } else if line == "/dismiss" {
            client.dismiss_error().await;
        } else if line == "/quit" {
            break;
        } else if let Err(err) = client.ask(&line).await {
            report_rejection(&err);
        }
    }

    Ok(())
}

async fn upload(client: &AssistantClient, path: &str) {
    let path = PathBuf::from(path);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("! cannot read {}: {err}", path.display());
            return;
        }
    };
    let Some(filename) = path.file_name().and_then(|name| name.to_str()) else {
        eprintln!("! path has no usable file name");
        return;
    };
    if let Err(err) = client.upload_document(filename, bytes).await {
        report_rejection(&err);
    }
}

async fn select(client: &AssistantClient, index: &str) {
    let documents = client.documents().await;
    match index.parse::<usize>().ok().and_then(|i| documents.get(i)) {
        Some(view) => client.select_document(view.id).await,
        None => eprintln!("no document at index {index}"),
    }
}

/// Remote failures already reach the terminal through the event stream;
/// only local precondition rejections need a direct echo.
fn report_rejection(err: &anyhow::Error) {
    if let Some(action) = err.downcast_ref::<ActionError>() {
        eprintln!("! {action}");
    }
}
