//! Haven Communities admin console.
//!
//! A command-line client for the Haven Communities backend: browse the
//! property catalog and blog, manage the admin session, and export captured
//! leads.

use std::io;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use haven_console::commands;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_usage() {
    eprintln!("Usage: haven <command> [args]");
    eprintln!();
    eprintln!("Session:");
    eprintln!("  login [email] [--remember]   Login as admin; --remember saves the password");
    eprintln!("  logout                       End the admin session");
    eprintln!("  status                       Show session state");
    eprintln!("  watch                        Poll the session until it expires");
    eprintln!();
    eprintln!("Catalog:");
    eprintln!("  properties                   List properties");
    eprintln!("  property <slug>              Show one property");
    eprintln!("  posts                        List published blog posts");
    eprintln!("  post <slug>                  Show one blog post");
    eprintln!();
    eprintln!("Leads (admin):");
    eprintln!("  contacts                     List contact inquiries");
    eprintln!("  newsletter                   List newsletter subscribers");
    eprintln!("  subscribe <email>            Subscribe an email address");
    eprintln!("  export-contacts <file>       Export inquiries as CSV");
    eprintln!("  export-newsletter <file>     Export subscribers as CSV");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("login") => {
            let email = args
                .get(2)
                .filter(|arg| !arg.starts_with("--"))
                .cloned();
            let remember = args.iter().any(|arg| arg == "--remember");
            commands::login(email, remember).await
        }
        Some("logout") => commands::logout().await,
        Some("status") => commands::status().await,
        Some("watch") => commands::watch().await,
        Some("properties") => commands::properties().await,
        Some("property") => match args.get(2) {
            Some(slug) => commands::property(slug).await,
            None => {
                print_usage();
                Ok(())
            }
        },
        Some("posts") => commands::posts().await,
        Some("post") => match args.get(2) {
            Some(slug) => commands::post(slug).await,
            None => {
                print_usage();
                Ok(())
            }
        },
        Some("contacts") => commands::contacts().await,
        Some("newsletter") => commands::newsletter().await,
        Some("subscribe") => match args.get(2) {
            Some(email) => commands::subscribe(email).await,
            None => {
                print_usage();
                Ok(())
            }
        },
        Some("export-contacts") => match args.get(2) {
            Some(path) => commands::export_contacts(path).await,
            None => {
                print_usage();
                Ok(())
            }
        },
        Some("export-newsletter") => match args.get(2) {
            Some(path) => commands::export_newsletter(path).await,
            None => {
                print_usage();
                Ok(())
            }
        },
        _ => {
            print_usage();
            Ok(())
        }
    }
}
