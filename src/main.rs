//! dbprops — turn a property dump into a dbid XML file and browse it.
//!
//! - `dbprops extract ar_props.json -o dbid_internal.xml --flat flat.txt`
//! - `dbprops list`
//! - `dbprops show 1234 -f json`
//! - `dbprops comment --comment-mode host "must be FQDN"`

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use dbprops::comments::CommentStore;
use dbprops::viewer::Viewer;
use dbprops::{extract, render, xml};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_XML: &str = "dbid_internal.xml";
const DEFAULT_COMMENTS: &str = "comments.json";

#[derive(Parser)]
#[command(
    name = "dbprops",
    version,
    about = "Extract dbid records from property dumps and browse their parameters"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Filter a property dump and write the dbid XML file
    Extract {
        /// Property dump to read, or "-" for stdin
        input: String,

        /// XML output file
        #[arg(short = 'o', long, default_value = DEFAULT_XML)]
        output: PathBuf,

        /// Also write the filtered lines to this file
        #[arg(long)]
        flat: Option<PathBuf>,
    },

    /// List dbids with their display titles
    List {
        /// dbid XML file
        #[arg(long, env = "DBPROPS_XML", default_value = DEFAULT_XML)]
        xml: PathBuf,

        /// Output format: text (default), json
        #[arg(short = 'f', long, default_value = "text")]
        format: String,
    },

    /// Show the dbid list and, given an id, its parameters by role
    Show {
        /// dbid to select
        id: Option<String>,

        /// dbid XML file
        #[arg(long, env = "DBPROPS_XML", default_value = DEFAULT_XML)]
        xml: PathBuf,

        #[command(flatten)]
        store: StoreArgs,

        /// Output format: text (default), json
        #[arg(short = 'f', long, default_value = "text")]
        format: String,
    },

    /// Add a comment to a parameter (requires comment mode)
    Comment {
        /// Parameter name
        name: String,

        /// Comment text
        text: String,

        #[command(flatten)]
        store: StoreArgs,
    },
}

#[derive(Args)]
struct StoreArgs {
    /// Comment store file
    #[arg(long, env = "DBPROPS_COMMENTS", default_value = DEFAULT_COMMENTS)]
    comments: PathBuf,

    /// Enable comment mode
    #[arg(
        long,
        env = "DBPROPS_COMMENT_MODE",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    comment_mode: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::Extract {
            input,
            output,
            flat,
        } => cmd_extract(&input, &output, flat.as_deref()),
        Command::List { xml, format } => cmd_list(&xml, &format),
        Command::Show {
            id,
            xml,
            store,
            format,
        } => cmd_show(id.as_deref(), &xml, store, &format),
        Command::Comment { name, text, store } => cmd_comment(&name, &text, store),
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .try_init();
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input))
    }
}

fn cmd_extract(input: &str, output: &Path, flat: Option<&Path>) -> Result<()> {
    let content = read_input(input)?;
    let extraction = extract::extract(&content);

    if let Some(path) = flat {
        fs::write(path, extraction.flat_text())
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), lines = extraction.lines.len(), "wrote flat file");
    }

    xml::save(&extraction.records, output)?;
    info!(
        path = %output.display(),
        records = extraction.records.len(),
        "wrote dbid XML"
    );
    Ok(())
}

fn cmd_list(xml_path: &Path, format: &str) -> Result<()> {
    let renderer = render::create_renderer(format)?;
    let entries = dbprops::metadata::display_entries(xml::load(xml_path).as_ref());
    print!("{}", renderer.render_entries(&entries)?);
    Ok(())
}

fn cmd_show(id: Option<&str>, xml_path: &Path, store: StoreArgs, format: &str) -> Result<()> {
    let renderer = render::create_renderer(format)?;
    let viewer = Viewer::new(
        xml::load(xml_path),
        CommentStore::new(store.comments),
        store.comment_mode,
    );
    print!("{}", renderer.render_query(&viewer.query(id))?);
    Ok(())
}

fn cmd_comment(name: &str, text: &str, store: StoreArgs) -> Result<()> {
    if !store.comment_mode {
        bail!("comment mode is disabled; pass --comment-mode or set DBPROPS_COMMENT_MODE");
    }
    CommentStore::new(store.comments).add(name, text)?;
    info!(name, "comment added");
    Ok(())
}
