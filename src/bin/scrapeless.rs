//! Command-line entry point for the Scrapeless agent tools.
//!
//! ```text
//! scrapeless list
//! scrapeless schema scrapeless_deepserp_google_search
//! scrapeless invoke scrapeless_universal_scraping --args '{"url": "https://example.com"}'
//! ```

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use scrapeless_core::{ScrapelessConfig, Tool, ToolContext};
use scrapeless_telemetry::{TelemetryOptions, init_telemetry_with};
use scrapeless_tool::DefaultToolContext;
use scrapeless_web_tools::ScrapelessToolset;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Scrapeless scraping, crawling and search tools.
#[derive(Parser)]
#[command(name = "scrapeless", version, about)]
struct Cli {
    /// Path to scrapeless.toml (searched in the current directory and its parents otherwise)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API key, overriding the config file and SCRAPELESS_API_KEY
    #[arg(long)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available tools.
    List,

    /// Print the JSON input schema of a tool.
    Schema {
        /// Tool name
        tool: String,
    },

    /// Invoke a tool and print its JSON result.
    Invoke {
        /// Tool name
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = ScrapelessConfig::load_or_env(cli.config.as_deref())?;
    if let Some(api_key) = cli.api_key {
        config.api_key = Some(api_key);
    }

    init_telemetry_with(TelemetryOptions {
        service_name: config.telemetry.service_name.clone(),
        json_logs: config.telemetry.json_logs,
    });

    match cli.command {
        Command::List => list_tools(&ScrapelessToolset::catalog()),
        Command::Schema { tool } => print_schema(&ScrapelessToolset::catalog(), &tool),
        Command::Invoke { tool, args } => {
            let toolset = ScrapelessToolset::from_config(&config)?;
            invoke_tool(&toolset, &tool, &args).await
        }
    }
}

fn list_tools(toolset: &ScrapelessToolset) -> Result<()> {
    for tool in toolset.tools() {
        let marker = if tool.is_long_running() { " (long-running)" } else { "" };
        println!("{}{}", tool.name(), marker);
        println!("    {}", tool.description());
    }
    Ok(())
}

fn print_schema(toolset: &ScrapelessToolset, name: &str) -> Result<()> {
    let tool = find_tool(toolset, name)?;
    println!("{}", serde_json::to_string_pretty(&tool.schema())?);
    Ok(())
}

async fn invoke_tool(toolset: &ScrapelessToolset, name: &str, args: &str) -> Result<()> {
    let tool = find_tool(toolset, name)?;
    let params: Value = serde_json::from_str(args).context("--args must be a JSON object")?;

    let ctx = Arc::new(DefaultToolContext::fresh());
    info!(
        tool = name,
        invocation_id = ctx.invocation_id(),
        call_id = ctx.function_call_id(),
        "Invoking tool"
    );
    let response = tool.execute(ctx, params).await?;

    println!("{}", serde_json::to_string_pretty(&response.result)?);
    Ok(())
}

fn find_tool(toolset: &ScrapelessToolset, name: &str) -> Result<Arc<dyn Tool>> {
    toolset.get_tool(name).ok_or_else(|| {
        anyhow!(
            "Unknown tool '{}'. Available tools: {}",
            name,
            toolset.tool_names().join(", ")
        )
    })
}
