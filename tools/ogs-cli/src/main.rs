//! Object-graph streaming command line tool
//!
//! Provides commands for working with JSON documents:
//! - canonicalize: Render the canonical (key-sorted) JSON representation
//! - digest: Compute the base-58 SHA-256 content digest
//! - events: Dump the canonical traversal event stream

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ogs_canonical::{digest, stream, to_canonical_string_with, JsonProps};
use ogs_core::{Event, Node};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ogs")]
#[command(version)]
#[command(about = "Canonicalize, digest, and inspect JSON value graphs")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render canonical JSON text
    #[command(about = "Output the canonical (key-sorted) JSON representation")]
    Canonicalize {
        /// Path to the JSON file to canonicalize
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Spaces per indentation level (0 renders compact)
        #[arg(long, default_value_t = 0)]
        indent: usize,
    },

    /// Compute the content digest
    #[command(about = "Compute the base-58 SHA-256 digest of the canonical event stream")]
    Digest {
        /// Path to the JSON file to digest
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Dump the traversal event stream
    #[command(about = "Print one canonical traversal event per line")]
    Events {
        /// Path to the JSON file to stream
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Canonicalize { file, indent } => handle_canonicalize(&file, indent),
        Commands::Digest { file } => handle_digest(&file),
        Commands::Events { file } => handle_events(&file),
    }
}

fn read_node(file: &PathBuf) -> Result<Node> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    let value: serde_json::Value = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse {} as JSON", file.display()))?;

    Ok(Node::from(value))
}

fn handle_canonicalize(file: &PathBuf, indent: usize) -> Result<()> {
    let node = read_node(file)?;
    let props = JsonProps::indented(indent);
    println!("{}", to_canonical_string_with(&node, &props));
    Ok(())
}

fn handle_digest(file: &PathBuf) -> Result<()> {
    let node = read_node(file)?;
    println!("{}", digest(&node));
    Ok(())
}

fn handle_events(file: &PathBuf) -> Result<()> {
    let node = read_node(file)?;
    stream(&node, &mut |event| {
        let path = event.path().join("/");
        match event {
            Event::SequenceStart { .. } => println!("seq-start  {path}"),
            Event::SequenceEnd { .. } => println!("seq-end    {path}"),
            Event::MapStart { .. } => println!("map-start  {path}"),
            Event::MapEnd { .. } => println!("map-end    {path}"),
            Event::Attribute { key, .. } => println!("attribute  {path}  key={key}"),
            Event::Value { value, .. } => println!("value      {path}  {value}"),
        }
    });
    Ok(())
}
