use anyhow::Result;
use colored::Colorize;

use crate::render::print_json;
use tunestats_client::{ConnectionStatus, StatsClient};

pub fn show_backend(client: &StatsClient, json: bool) -> Result<()> {
    let resolver = client.resolver();
    let current = resolver.current_endpoint();
    let overridden = resolver.is_overridden();

    if json {
        return print_json(&serde_json::json!({
            "endpoint": current,
            "custom": overridden,
            "default": resolver.default_value(),
        }));
    }

    println!("{}", "Backend:".cyan().bold());
    println!("  URL: {}", current);
    println!("  Default: {}", resolver.default_value());
    if overridden {
        println!("  {}", "Using a custom backend URL".yellow());
    }
    Ok(())
}

pub fn set_backend(client: &StatsClient, url: &str) -> Result<()> {
    client.resolver().save(url)?;
    println!("{} Backend set to {}", "✓".green(), client.resolver().current_endpoint());
    Ok(())
}

pub fn reset_backend(client: &StatsClient) -> Result<()> {
    client.resolver().clear_override()?;
    println!("{} Backend reset to {}", "✓".green(), client.resolver().current_endpoint());
    Ok(())
}

pub async fn test_backend(client: &StatsClient, url: Option<String>, json: bool) -> Result<()> {
    let target = url.unwrap_or_else(|| client.resolver().current_endpoint());
    if !json {
        println!("{}", format!("Testing {}...", target).as_str().cyan());
    }

    let status = client.check_connectivity(&target).await;

    if json {
        return print_json(&serde_json::json!({
            "endpoint": target,
            "reachable": status.is_reachable(),
            "reason": match &status {
                ConnectionStatus::Reachable => None,
                ConnectionStatus::Unreachable(reason) => Some(reason.as_str()),
            },
        }));
    }

    match status {
        ConnectionStatus::Reachable => println!("{} Connection works", "✓".green()),
        ConnectionStatus::Unreachable(reason) => {
            println!("{} Cannot reach the backend: {}", "✗".red(), reason);
            println!("Check that the URL is right and the backend is running.");
        }
    }
    Ok(())
}
