//! `roster` - CLI shell around the record form components.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::{Args, Parser, Subcommand};

use roster::logging::{init_logging, Verbosity};
use roster_client::{
    ApiClient, CreateForm, EditForm, Level, ListView, Nav, DEFAULT_API_ENDPOINT,
};

/// roster - manage person records
///
/// Talks to a running `rosterd` instance. The endpoint defaults to the
/// local server and can be set with `--endpoint` or `ROSTER_API_ENDPOINT`.
#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the record API
    #[arg(short, long, global = true, value_name = "URL")]
    endpoint: Option<String>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all records
    List,

    /// Show one record as JSON
    Show {
        /// Record identifier
        id: String,
    },

    /// Create a record through the create form
    Add(FieldArgs),

    /// Load a record into the edit form, apply changes, and submit
    Edit {
        /// Record identifier
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a record
    Delete {
        /// Record identifier
        id: String,
    },
}

/// Field values for `add` and `edit`.
#[derive(Debug, Args)]
struct FieldArgs {
    /// The person's name
    #[arg(long, value_name = "TEXT")]
    name: Option<String>,

    /// The person's position
    #[arg(long, value_name = "TEXT")]
    position: Option<String>,

    /// The person's level (Intern, Junior, or Senior)
    #[arg(long, value_name = "LEVEL")]
    level: Option<Level>,
}

impl Cli {
    fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }

    fn endpoint(&self) -> String {
        self.endpoint
            .clone()
            .or_else(|| std::env::var("ROSTER_API_ENDPOINT").ok())
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let client = ApiClient::new(cli.endpoint());

    match cli.command {
        Command::List => {
            let mut view = ListView::new();
            view.load(&client).await;
            print_listing(&view);
        }
        Command::Show { id } => match client.get_record(&id).await? {
            Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
            None => println!("null"),
        },
        Command::Add(fields) => {
            let mut form = CreateForm::new();
            apply_create_fields(&mut form, &fields);
            form.submit(&client).await;
            println!("Create request sent.");
        }
        Command::Edit { id, fields } => {
            let mut form = EditForm::for_record(id);
            form.load(&client).await;
            apply_edit_fields(&mut form, &fields);
            match form.submit(&client).await {
                Nav::BackToList => {
                    let mut view = ListView::new();
                    view.load(&client).await;
                    print_listing(&view);
                }
            }
        }
        Command::Delete { id } => {
            let ack = client.delete_record(&id).await?;
            println!("{}", serde_json::to_string_pretty(&ack)?);
        }
    }

    Ok(())
}

fn apply_create_fields(form: &mut CreateForm, fields: &FieldArgs) {
    if let Some(name) = &fields.name {
        form.set_person_name(name);
    }
    if let Some(position) = &fields.position {
        form.set_person_position(position);
    }
    if let Some(level) = fields.level {
        form.set_person_level(level);
    }
}

fn apply_edit_fields(form: &mut EditForm, fields: &FieldArgs) {
    if let Some(name) = &fields.name {
        form.set_person_name(name);
    }
    if let Some(position) = &fields.position {
        form.set_person_position(position);
    }
    if let Some(level) = fields.level {
        form.set_person_level(level);
    }
}

fn print_listing(view: &ListView) {
    if view.records().is_empty() {
        println!("No records.");
        return;
    }

    for record in view.records() {
        println!(
            "{}  {}  {}  {}",
            record.id.as_deref().unwrap_or("-"),
            record.fields.person_name,
            record.fields.person_position,
            record.fields.person_level,
        );
    }
}
