use clap::Parser;
use contactz::api::{ConfigAction, ContactzApi};
use contactz::commands::ContactInput;
use contactz::config::ContactzConfig;
use contactz::error::{ContactzError, Result};
use contactz::logging::init_logging;
use contactz::store::fs::FileBackend;
use contactz::store::ContactStore;
use directories::ProjectDirs;
use log::{debug, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_config, print_contacts, print_full_contacts, print_messages};

const ENV_CONFIG_DIR: &str = "CONTACTZ_CONFIG_DIR";
const ENV_CONTACTS_FILE: &str = "CONTACTZ_FILE";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ContactzApi<FileBackend>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Add { name, phone, email }) => handle_add(&mut ctx, name, phone, email),
        Some(Commands::Edit {
            index,
            name,
            phone,
            email,
        }) => handle_edit(&mut ctx, index, name, phone, email),
        Some(Commands::Delete { index, yes }) => handle_delete(&mut ctx, index, yes),
        Some(Commands::View { indexes }) => handle_view(&ctx, indexes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match std::env::var_os(ENV_CONFIG_DIR) {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "contactz", "contactz")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| ContactzError::Config("Could not determine config dir".into()))?,
    };

    let (config, config_error) = match ContactzConfig::load(&config_dir) {
        Ok(config) => (config, None),
        Err(e) => (ContactzConfig::default(), Some(e)),
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    if let Err(e) = init_logging(level) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    if let Some(e) = config_error {
        warn!(
            "ignoring unreadable config in {}, using defaults: {}",
            config_dir.display(),
            e
        );
    }

    let contacts_file = cli
        .file
        .clone()
        .or_else(|| std::env::var_os(ENV_CONTACTS_FILE).map(PathBuf::from))
        .unwrap_or_else(|| config.contacts_file.clone());
    debug!(
        "using contacts file {} (config dir {})",
        contacts_file.display(),
        config_dir.display()
    );

    let store = ContactStore::new(FileBackend::new(contacts_file));
    Ok(AppContext {
        api: ContactzApi::new(store, config_dir),
    })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_contacts()?;
    print_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, name: String, phone: String, email: String) -> Result<()> {
    let result = ctx
        .api
        .add_contact(ContactInput::new(name, phone, email))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    index: String,
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
) -> Result<()> {
    if name.is_none() && phone.is_none() && email.is_none() {
        return Err(ContactzError::Api(
            "Nothing to change (use --name, --phone or --email)".into(),
        ));
    }
    let result = ctx.api.update_fields(&index, name, phone, email)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, index: String, yes: bool) -> Result<()> {
    if !yes {
        let target = ctx.api.view_contacts(&[index.as_str()])?;
        print_full_contacts(&target.listed_contacts);
        if !confirm("Are you sure you want to delete this contact?")? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let result = ctx.api.delete_contact(&index)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.view_contacts(&indexes)?;
    print_full_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush().map_err(ContactzError::Io)?;

    let mut answer = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(ContactzError::Io)?;
    if read == 0 {
        warn!("no confirmation input, treating as no");
        return Ok(false);
    }
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
