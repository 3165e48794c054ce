//! nitrosubs - NitroSubs shell server and navigation inspector

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nitrosubs_core::{build_menu, Role};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nitrosubs",
    version,
    about = "NitroSubs application shell",
    long_about = "Serves the NitroSubs web shell (header + role-filtered sidebar) and\n\
                  inspects the navigation a given role sees.\n\
                  \n\
                  Examples:\n\
                    nitrosubs                                  # Serve (default)\n\
                    nitrosubs serve --port 8080                # Custom port\n\
                    nitrosubs menu --role leader --path /validations\n\
                    nitrosubs menu --role system_admin --json\n\
                  \n\
                  Web Frontend Workflow:\n\
                    cd crates/nitrosubs-web && trunk build --release\n\
                    nitrosubs serve                            # Serves API + static frontend\n\
                  \n\
                  Environment Variables:\n\
                    NITROSUBS_DIST_DIR               # Built frontend directory\n\
                    NITROSUBS_HOST / NITROSUBS_PORT  # Listen address\n\
                    NITROSUBS_NO_COLOR               # Disable ANSI colors (log-friendly)\n\
                    RUST_LOG                         # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    #[command(flatten)]
    serve: ServeArgs,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "NITROSUBS_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the web shell (default)
    Serve,
    /// Print the navigation menu for a role and path
    Menu {
        /// Role tag: system_admin, finance_admin, leader, user
        #[arg(long, short = 'r', default_value = "user")]
        role: String,
        /// Current path used for active-entry highlighting
        #[arg(long, short = 'p', default_value = "/dashboard")]
        path: String,
        /// Display name used for the identity line
        #[arg(long)]
        name: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct ServeArgs {
    /// Address to bind
    #[arg(long, global = true, default_value = "127.0.0.1", env = "NITROSUBS_HOST")]
    host: IpAddr,
    /// Port for web server
    #[arg(long, global = true, default_value = "3333", env = "NITROSUBS_PORT")]
    port: u16,
    /// Directory holding the trunk build (index.html + assets)
    #[arg(long, global = true, default_value = "crates/nitrosubs-web/dist", env = "NITROSUBS_DIST_DIR")]
    dist_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.no_color);

    match cli.mode.unwrap_or(Mode::Serve) {
        Mode::Serve => run_serve(cli.serve).await?,
        Mode::Menu {
            role,
            path,
            name,
            json,
        } => run_menu(&role, &path, name.as_deref(), json, cli.no_color)?,
    }

    Ok(())
}

fn init_tracing(no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_serve(args: ServeArgs) -> Result<()> {
    let addr = SocketAddr::new(args.host, args.port);

    if args.dist_dir.join("index.html").exists() {
        println!("\n🌐 NitroSubs shell: http://{}", addr);
        println!("   Health check:     http://{}/api/health", addr);
    } else {
        println!("\n🌐 Setup page only: http://{}", addr);
        println!(
            "   💡 Run 'trunk build' in crates/nitrosubs-web (expected {})",
            args.dist_dir.display()
        );
    }

    nitrosubs_web::run(args.dist_dir, addr)
        .await
        .context("Failed to run web server")
}

fn run_menu(role: &str, path: &str, name: Option<&str>, json: bool, no_color: bool) -> Result<()> {
    let role = Role::from_tag(role);
    if let Role::Other(tag) = &role {
        tracing::warn!(role = %tag, "unknown role tag, no capabilities granted");
    }

    let menu = build_menu(role.capabilities(), path);

    if !json {
        println!("{}", cli::format_identity(name, &role));
    }
    println!("{}", cli::format_menu(&menu, json, no_color)?);

    Ok(())
}
