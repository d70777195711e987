//! Console command implementations.
//!
//! Each command builds its own client stack from the saved configuration,
//! runs one flow against the backend, and prints line-oriented output.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::time::{interval, Duration};
use tracing::warn;

use crate::api::ApiClient;
use crate::auth::{CredentialStore, SessionManager, TokenStore, POLL_INTERVAL_SECS};
use crate::config::Config;
use crate::utils::{format_date, format_price, truncate, validate_login, validate_subscription};

// ============================================================================
// Constants
// ============================================================================

/// Page sizes per listing, matching the site defaults.
const PROPERTIES_PAGE_SIZE: u32 = 50;
const BLOG_PAGE_SIZE: u32 = 100;
const CONTACTS_PAGE_SIZE: u32 = 50;
const NEWSLETTER_PAGE_SIZE: u32 = 100;

/// Column width for titles in list output.
const TITLE_WIDTH: usize = 40;

fn build_stack(config: &Config) -> Result<(SessionManager, ApiClient, Arc<TokenStore>)> {
    let store = Arc::new(TokenStore::new(config.cache_dir()?));
    let api = ApiClient::new(config.base_url(), store.clone())?;
    let session = SessionManager::new(api.clone(), store.clone());
    Ok((session, api, store))
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

// ===== Session commands =====

pub async fn login(email_arg: Option<String>, remember: bool) -> Result<()> {
    let mut config = Config::load()?;
    let (mut session, _, _) = build_stack(&config)?;

    let email = match email_arg.or_else(|| config.last_email.clone()) {
        Some(email) => email,
        None => prompt("Email: ")?,
    };

    let mut password = rpassword::prompt_password("Password (blank to use saved): ")?;
    if password.is_empty() {
        if let Some(saved) = CredentialStore::saved_password(&email) {
            password = saved;
        }
    }
    validate_login(&email, &password)?;

    if let Err(err) = session.login(&email, &password).await {
        let message = session
            .error()
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string());
        anyhow::bail!(message);
    }

    let user = session.user().context("login succeeded without a user")?;
    println!(
        "Logged in as {} (session expires in {}s)",
        user.display_name(),
        session.time_until_expiry()
    );

    config.last_email = Some(email.clone());
    config.save()?;
    if remember {
        if let Err(e) = CredentialStore::store(&email, &password) {
            warn!(error = %e, "Could not save password to keychain");
        }
    }
    Ok(())
}

pub async fn logout() -> Result<()> {
    let config = Config::load()?;
    let (mut session, _, _) = build_stack(&config)?;
    session.logout().await;
    println!("Logged out.");
    Ok(())
}

pub async fn status() -> Result<()> {
    let config = Config::load()?;
    let (mut session, api, store) = build_stack(&config)?;

    // Before verification: distinguishes "never logged in" from "expired"
    let had_token = store.raw_token().is_some();

    session.initialize().await;

    if session.is_authenticated() {
        let user = session.user().context("authenticated without a user")?;
        println!("Logged in as {} ({})", user.display_name(), user.email);
        println!("Backend: {}", api.base_url());
        println!("Session expires in {}s", session.time_until_expiry());
        if session.is_expiring_soon() {
            println!("Warning: session expires soon - login again to keep working");
        }
    } else if had_token {
        println!("Session expired or invalid. Please login again.");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

/// Run the expiry-polling loop, printing the countdown every tick until the
/// session ends. Expiry ends the loop silently; there is no error on that
/// path.
pub async fn watch() -> Result<()> {
    let config = Config::load()?;
    let (mut session, _, _) = build_stack(&config)?;

    session.initialize().await;
    if !session.is_authenticated() {
        anyhow::bail!("Not logged in.");
    }

    let user = session.user().context("authenticated without a user")?;
    println!("Watching session for {} - Ctrl+C to stop", user.display_name());

    let mut ticker = interval(Duration::from_secs(POLL_INTERVAL_SECS));
    ticker.tick().await; // first tick fires immediately

    loop {
        ticker.tick().await;
        session.tick();

        if !session.is_authenticated() {
            println!("Session ended (token expired).");
            return Ok(());
        }

        if session.is_expiring_soon() {
            println!(
                "Session expires in {}s - login again soon",
                session.time_until_expiry()
            );
        } else {
            println!("Session active, {}s until expiry", session.time_until_expiry());
        }
    }
}

// ===== Catalog commands =====

pub async fn properties() -> Result<()> {
    let config = Config::load()?;
    let (_, api, _) = build_stack(&config)?;

    let listing = api.properties(1, PROPERTIES_PAGE_SIZE).await?;
    for property in &listing.data {
        println!(
            "{:<width$}  {:<12}  {:>14}  {}",
            truncate(&property.title, TITLE_WIDTH),
            property.status.to_string(),
            format_price(property.price),
            property.location,
            width = TITLE_WIDTH,
        );
    }
    println!("{} of {} properties", listing.data.len(), listing.total);
    Ok(())
}

pub async fn property(slug: &str) -> Result<()> {
    let config = Config::load()?;
    let (_, api, _) = build_stack(&config)?;

    let property = api.property_by_slug(slug).await?;
    println!("{} [{}]", property.title, property.status);
    println!("Location:   {}", property.location);
    println!("Price:      {}", format_price(property.price));
    println!("Units:      {}", property.units);
    println!("Acres:      {}", property.acres);
    println!("Completion: {}", format_date(&property.completion_date));
    if let Some(features) = &property.features {
        println!("Features:   {}", features.join(", "));
    }
    println!();
    println!("{}", property.description);
    Ok(())
}

pub async fn posts() -> Result<()> {
    let config = Config::load()?;
    let (_, api, _) = build_stack(&config)?;

    let listing = api.blog_posts(1, BLOG_PAGE_SIZE, None).await?;
    for post in &listing.data {
        let published = post.published_at.as_deref().map(format_date).unwrap_or_default();
        println!(
            "{:<width$}  {:<14}  {}",
            truncate(&post.title, TITLE_WIDTH),
            post.category,
            published,
            width = TITLE_WIDTH,
        );
    }
    println!("{} of {} posts", listing.data.len(), listing.total);
    Ok(())
}

pub async fn post(slug: &str) -> Result<()> {
    let config = Config::load()?;
    let (_, api, _) = build_stack(&config)?;

    let post = api.blog_post_by_slug(slug).await?;
    println!("{}", post.title);
    if let Some(author) = &post.author {
        println!("By {}", author);
    }
    if let Some(published) = &post.published_at {
        println!("Published {}", format_date(published));
    }
    println!();
    println!("{}", post.content);
    Ok(())
}

// ===== Lead commands (admin) =====

pub async fn contacts() -> Result<()> {
    let config = Config::load()?;
    let (_, api, _) = build_stack(&config)?;

    let listing = api.contacts(1, CONTACTS_PAGE_SIZE, None).await?;
    for contact in &listing.data {
        let status = contact
            .status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "new".to_string());
        let received = contact.created_at.as_deref().map(format_date).unwrap_or_default();
        println!(
            "{:<24}  {:<30}  {:<10}  {}",
            truncate(&contact.name, 24),
            truncate(&contact.email, 30),
            status,
            received,
        );
    }
    println!("{} of {} inquiries", listing.data.len(), listing.total);
    Ok(())
}

pub async fn newsletter() -> Result<()> {
    let config = Config::load()?;
    let (_, api, _) = build_stack(&config)?;

    let listing = api.subscribers(1, NEWSLETTER_PAGE_SIZE, None).await?;
    for subscriber in &listing.data {
        let since = subscriber
            .subscribed_at
            .as_deref()
            .map(format_date)
            .unwrap_or_default();
        println!("{:<40}  {}", truncate(&subscriber.email, 40), since);
    }
    println!("{} of {} subscribers", listing.data.len(), listing.total);
    Ok(())
}

pub async fn subscribe(email: &str) -> Result<()> {
    validate_subscription(email)?;

    let config = Config::load()?;
    let (_, api, _) = build_stack(&config)?;

    let response = api.subscribe_newsletter(email).await?;
    println!(
        "{}",
        response.message.unwrap_or_else(|| "Subscribed.".to_string())
    );
    Ok(())
}

pub async fn export_contacts(path: &str) -> Result<()> {
    let config = Config::load()?;
    let (_, api, _) = build_stack(&config)?;

    let csv = api.export_contacts_csv().await?;
    std::fs::write(path, &csv).with_context(|| format!("Failed to write {}", path))?;
    println!("Wrote {} bytes to {}", csv.len(), path);
    Ok(())
}

pub async fn export_newsletter(path: &str) -> Result<()> {
    let config = Config::load()?;
    let (_, api, _) = build_stack(&config)?;

    let csv = api.export_newsletter_csv().await?;
    std::fs::write(path, &csv).with_context(|| format!("Failed to write {}", path))?;
    println!("Wrote {} bytes to {}", csv.len(), path);
    Ok(())
}
