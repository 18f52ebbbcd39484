use anyhow::{Context, Result};
use colored::Colorize;

use tunestats_client::StatsClient;

pub async fn login(client: &StatsClient, redirect: Option<String>) -> Result<()> {
    let Some(redirect) = redirect else {
        println!("Open this URL in a browser and sign in:");
        println!("  {}", client.login_url().as_str().cyan());
        println!(
            "Then run {} with the page address you land on.",
            "tunestats login --redirect <URL>".bold()
        );
        return Ok(());
    };

    let token = client
        .session()
        .accept_redirect(&redirect)
        .context("Could not store tokens from the redirect URL")?;
    if token.is_none() {
        anyhow::bail!("The redirect URL contains no access_token");
    }

    match client.current_user().await {
        Ok(user) => println!("{} Signed in as {}", "✓".green(), user.name()),
        Err(e) if e.needs_login() => anyhow::bail!("The backend rejected the token: {}", e),
        Err(e) => {
            tracing::warn!("Token stored but profile lookup failed: {}", e);
            println!("{} Token stored", "✓".green());
        }
    }
    Ok(())
}

pub fn logout(client: &StatsClient) -> Result<()> {
    client.session().sign_out()?;
    println!("{} Signed out", "✓".green());
    Ok(())
}
