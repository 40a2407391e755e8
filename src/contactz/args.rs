use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contactz")]
#[command(about = "A small personal address book for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Contacts file to use (overrides CONTACTZ_FILE and the config file)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List contacts
    #[command(alias = "ls")]
    List,

    /// Add a new contact
    #[command(alias = "a")]
    Add {
        /// Contact name
        name: String,

        /// Phone number
        phone: String,

        /// Email address
        #[arg(required = false, default_value = "")]
        email: String,
    },

    /// Edit the contact at an index, keeping any field not given
    #[command(alias = "e")]
    Edit {
        /// Index of the contact (as shown by `list`)
        index: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New email address (pass "" to clear it)
        #[arg(long)]
        email: Option<String>,
    },

    /// Delete the contact at an index
    #[command(alias = "rm")]
    Delete {
        /// Index of the contact (as shown by `list`)
        index: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show full details of one or more contacts
    #[command(alias = "v")]
    View {
        /// Indexes of the contacts (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (contacts-file, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
