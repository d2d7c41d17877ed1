#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Renders an email with the configured layout and prints it as it would be sent

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use core_bundle::{
    domain::communication::templates::{BuiltinRenderer, TemplateRenderer},
    infrastructure::{config::MailConfig, templates::TeraRenderer},
};
use tracing::debug;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The mail configuration
    #[clap(flatten)]
    pub mail: MailConfig,

    /// The subject of the email
    #[clap(long)]
    pub subject: Option<String>,

    /// File holding the HTML content
    #[clap(long)]
    pub html: Option<PathBuf>,

    /// File holding the plain text content
    #[clap(long)]
    pub text: Option<PathBuf>,
}

fn read(path: Option<&PathBuf>) -> Result<Option<String>> {
    path.map(|path| {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    })
    .transpose()
}

fn render<R: TemplateRenderer>(args: &Args, renderer: Arc<R>) -> Result<Vec<u8>> {
    let factory = args.mail.message_factory(renderer)?;

    let html = read(args.html.as_ref())?;
    let text = read(args.text.as_ref())?;

    let message = match html {
        Some(html) => {
            factory.create_html_message(args.subject.as_deref(), Some(&html), text.as_deref())?
        }
        None => factory.create_plain_text_message(args.subject.as_deref(), text.as_deref())?,
    };

    debug!("built {} message", message.content_type());

    let email = lettre::Message::try_from(message)?;

    Ok(email.formatted())
}

#[mutants::skip]
fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load environment: {}", e);

            return Err(e.into());
        }
    }

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let formatted = match &args.mail.template_dir {
        Some(dir) => render(&args, Arc::new(TeraRenderer::new(dir)?))?,
        None => render(&args, Arc::new(BuiltinRenderer))?,
    };

    io::stdout().write_all(&formatted)?;

    Ok(())
}
