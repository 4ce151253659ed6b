//! # portal-client
//!
//! Command line client for the supplier portal. Each invocation builds one
//! [`PortalContainer`], runs a single command against it and exits.
//!
//! Commands that need a session log in first when `--user`/`--password`
//! (or `PORTAL_USER`/`PORTAL_PASSWORD`) are given, otherwise they try to
//! restore an existing session.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use portal_runtime::{PortalConfig, PortalContainer};
use shared_types::{CreateInquiryParams, FileUpload, InquiryQuery, SupplierInquiry};
use sp_01_session::SessionApi;
use sp_02_reference_cache::ReferenceCacheApi;
use sp_03_inquiries::InquiryApi;

/// Supplier portal command line client
#[derive(Parser, Debug)]
#[command(name = "portal-client")]
#[command(about = "Command line client for the supplier portal")]
struct Args {
    /// Portal base URL (overrides PORTAL_API_URL)
    #[arg(long)]
    url: Option<String>,

    /// Login identifier
    #[arg(short, long, env = "PORTAL_USER")]
    user: Option<String>,

    /// Login secret
    #[arg(short, long, env = "PORTAL_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Restore the session and show who is logged in
    Status,
    /// Log in with the given credentials
    Login,
    /// End the session
    Logout,
    /// Load the reference data and print a summary
    Reference,
    /// Show inquiry counts
    Stats,
    /// List inquiries
    Inquiries {
        /// Page to show
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Only inquiries in this status
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one inquiry
    Show {
        /// Inquiry name, e.g. INQ-0001
        name: String,
    },
    /// Create an inquiry
    Submit {
        /// Topic category name
        #[arg(long)]
        topic: String,
        /// Inquiry context value
        #[arg(long)]
        context: String,
        /// Description text
        #[arg(long)]
        description: String,
        /// Insured person's ID number
        #[arg(long)]
        insured_id: Option<String>,
        /// Insured person's name
        #[arg(long)]
        insured_name: Option<String>,
        /// File to attach after creation
        #[arg(long)]
        attach: Option<PathBuf>,
    },
    /// Attach a file to an existing inquiry
    Attach {
        /// Inquiry name
        name: String,
        /// File to upload
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = PortalConfig::from_env().context("Failed to read configuration")?;
    if let Some(url) = &args.url {
        config.gateway.base_url = url.clone();
    }

    let _guard = portal_telemetry::init_telemetry(config.telemetry.clone())
        .context("Failed to initialize logging")?;

    let container = PortalContainer::new(config).context("Failed to build portal client")?;

    run(&container, &args).await
}

async fn run(container: &PortalContainer, args: &Args) -> Result<()> {
    match &args.command {
        Command::Status => {
            container.session.initialize().await;
            print_session(container);
        }
        Command::Login => {
            let (user, password) = credentials(args)?;
            if !container.session.login(user, password).await {
                bail!("Login failed: {}", container.session.error().unwrap_or_default());
            }
            print_session(container);
        }
        Command::Logout => {
            container.session.initialize().await;
            container.session.logout().await;
            println!("Logged out");
        }
        Command::Reference => {
            ensure_session(container, args).await?;
            container.reference.initialize().await;
            if let Some(error) = container.reference.error() {
                bail!("{error}");
            }
            let data = container.reference.dataset().data;
            println!("Activity domains:     {}", data.activity_domains.len());
            println!("Inquiry topics:       {}", data.inquiry_topics.len());
            println!("Supplier roles:       {}", data.supplier_roles.len());
            println!("Contact person roles: {}", data.contact_person_roles.len());
            println!("Inquiry statuses:     {}", data.inquiry_statuses.len());
            println!("Inquiry contexts:     {}", data.inquiry_contexts.len());
        }
        Command::Stats => {
            ensure_session(container, args).await?;
            container.inquiries.fetch_stats(true).await;
            let Some(stats) = container.inquiries.stats() else {
                bail!("Could not load inquiry stats");
            };
            println!("Total:  {}", stats.total);
            println!("Open:   {}", stats.open);
            println!("Closed: {}", stats.closed);
            for (status, count) in &stats.by_status {
                println!("  {status}: {count}");
            }
        }
        Command::Inquiries { page, status } => {
            ensure_session(container, args).await?;
            container.reference.initialize().await;

            let query = InquiryQuery {
                page: Some(*page),
                status: status.clone(),
                ..Default::default()
            };
            container.inquiries.fetch_inquiries(query).await;
            if let Some(error) = container.inquiries.list_error() {
                bail!("{error}");
            }

            for inquiry in container.inquiries.inquiries() {
                print_row(container, &inquiry);
            }
            let pagination = container.inquiries.pagination();
            println!(
                "Page {}/{} ({} total)",
                pagination.page, pagination.total_pages, pagination.total
            );
        }
        Command::Show { name } => {
            ensure_session(container, args).await?;
            container.reference.initialize().await;
            let Some(inquiry) = container.inquiries.fetch_inquiry(name).await else {
                bail!("{}", container.inquiries.detail_error().unwrap_or_default());
            };
            print_detail(container, &inquiry);
        }
        Command::Submit {
            topic,
            context,
            description,
            insured_id,
            insured_name,
            attach,
        } => {
            ensure_session(container, args).await?;
            let params = CreateInquiryParams {
                topic_category: topic.clone(),
                description: description.clone(),
                inquiry_context: context.clone(),
                insured_id: insured_id.clone(),
                insured_name: insured_name.clone(),
            };
            let Some(name) = container.inquiries.submit_inquiry(params).await else {
                bail!("{}", container.inquiries.form_error().unwrap_or_default());
            };
            println!("Created {name}");

            if let Some(path) = attach {
                attach_file(container, &name, path).await?;
            }
        }
        Command::Attach { name, path } => {
            ensure_session(container, args).await?;
            attach_file(container, name, path).await?;
        }
    }
    Ok(())
}

fn credentials(args: &Args) -> Result<(&str, &str)> {
    match (&args.user, &args.password) {
        (Some(user), Some(password)) => Ok((user.as_str(), password.as_str())),
        _ => bail!("--user and --password (or PORTAL_USER/PORTAL_PASSWORD) are required"),
    }
}

async fn ensure_session(container: &PortalContainer, args: &Args) -> Result<()> {
    if let Ok((user, password)) = credentials(args) {
        debug!(user, "Logging in before command");
        if !container.session.login(user, password).await {
            bail!("Login failed: {}", container.session.error().unwrap_or_default());
        }
        return Ok(());
    }

    if !container.session.initialize().await {
        bail!("Not logged in");
    }
    Ok(())
}

async fn attach_file(container: &PortalContainer, inquiry: &str, path: &Path) -> Result<()> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "attachment".to_string());

    let mut upload = FileUpload::new(file_name, bytes);
    upload.content_type = content_type_for(path).to_string();

    info!(inquiry, file = %upload.file_name, "Attaching file");
    match container.inquiries.attach_file(inquiry, upload).await {
        Some(url) => {
            println!("Attached {url}");
            Ok(())
        }
        None => bail!("Could not attach {} to {inquiry}", path.display()),
    }
}

fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "txt" => "text/plain",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

fn print_session(container: &PortalContainer) {
    if container.session.is_authenticated() {
        println!("User:     {}", container.session.user_name());
        println!("Supplier: {}", container.session.supplier_name());
    } else {
        println!("Not logged in");
    }
}

fn status_of(container: &PortalContainer, inquiry: &SupplierInquiry) -> String {
    inquiry
        .inquiry_status
        .as_deref()
        .map(|value| container.reference.get_status_label(value))
        .unwrap_or_default()
}

fn print_row(container: &PortalContainer, inquiry: &SupplierInquiry) {
    println!(
        "{:<12} {:<20} {:<24} {}",
        inquiry.name,
        status_of(container, inquiry),
        inquiry.topic_category,
        inquiry.meta.creation.as_deref().unwrap_or("")
    );
}

fn print_detail(container: &PortalContainer, inquiry: &SupplierInquiry) {
    println!("Name:        {}", inquiry.name);
    println!("Status:      {}", status_of(container, inquiry));
    println!("Topic:       {}", inquiry.topic_category);
    println!(
        "Context:     {}",
        container.reference.get_context_label(&inquiry.inquiry_context)
    );
    println!("Description: {}", inquiry.inquiry_description);
    if let Some(insured) = &inquiry.insured_full_name {
        println!("Insured:     {insured}");
    }
    if let Some(response) = &inquiry.response_text {
        println!("Response:    {response}");
    }
    if let Some(attachment) = &inquiry.attachments {
        println!("Attachment:  {attachment}");
    }
}
