//! Command-line interface of `invctl`.
//!
//! ```bash
//! invctl login alice
//! invctl list --search AB12 --type 3 --page 2
//! invctl add --type 3 --serial 0QWERTY1AB --serial 0QWERTY1AC --note "rack 4"
//! invctl delete 17 --yes
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Command-line client for the equipment inventory.
#[derive(Debug, Parser)]
#[command(name = "invctl")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API base URL, e.g. https://inventory.example.com/api
    ///
    /// Takes precedence over INVENTORY_API_URL and the config file.
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and remember the session
    Login(LoginArgs),
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami(WhoamiArgs),
    /// List equipment
    List(ListArgs),
    /// List equipment types
    Types,
    /// Show inventory statistics
    Stats,
    /// Add equipment, one record per serial number
    Add(AddArgs),
    /// Replace the type, serial number and note of a record
    Edit(EditArgs),
    /// Delete a record
    Delete(DeleteArgs),
    /// Restore a deleted record
    Restore(RestoreArgs),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username; prompted for when omitted
    pub username: Option<String>,

    /// Password; prompted for when omitted
    #[arg(long, env = "INVENTORY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Debug, Args)]
pub struct WhoamiArgs {
    /// Ask the server whether the stored token is still valid
    #[arg(long)]
    pub verify: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page number (starting at 1)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..))]
    pub page: i64,

    /// Free-text search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only records of this equipment type id
    #[arg(short = 't', long = "type", value_name = "TYPE_ID")]
    pub equipment_type: Option<i64>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Equipment type id
    #[arg(short = 't', long = "type", value_name = "TYPE_ID")]
    pub equipment_type: i64,

    /// Serial number (can be specified multiple times)
    #[arg(short, long = "serial", value_name = "SERIAL")]
    pub serials: Vec<String>,

    /// File with one serial number per line
    #[arg(long, value_name = "PATH")]
    pub serials_file: Option<PathBuf>,

    /// Note stored with every created record
    #[arg(short, long, default_value = "")]
    pub note: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Record id
    pub id: i64,

    /// Equipment type id
    #[arg(short = 't', long = "type", value_name = "TYPE_ID")]
    pub equipment_type: i64,

    /// New serial number
    #[arg(short, long)]
    pub serial: String,

    /// New note; an omitted note is stored as empty
    #[arg(short, long, default_value = "")]
    pub note: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Record id
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct RestoreArgs {
    /// Record id
    pub id: i64,
}
