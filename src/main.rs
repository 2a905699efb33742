use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use inventory_client::api::ApiClient;
use inventory_client::app::InventoryApp;
use inventory_client::cli::{AddArgs, Cli, Command, ListArgs, LoginArgs};
use inventory_client::config::{resolve_api_base, Config};
use inventory_client::logging::init_tracing;
use inventory_client::render;
use inventory_client::session::{FileStore, SecureString, SessionContext};
use inventory_client::ui::{parse_serial_numbers, AppIntent, AppState, QueryFilters};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let base_url = resolve_api_base(&config.api, cli.api_url.as_deref())?;
    tracing::debug!(base_url = %base_url, "Resolved API base URL");

    let api = ApiClient::new(
        base_url,
        SessionContext::new(),
        config.api.connect_timeout(),
    )?;
    let storage = Arc::new(FileStore::new(config.storage.resolve_path()));
    let app = InventoryApp::new(api, storage, config.ui.clone());

    let signed_in = app.restore_session();

    match cli.command {
        Command::Login(args) => login(&app, args).await?,
        Command::Logout => app.logout(),
        command => {
            if !signed_in {
                bail!("not signed in; run `invctl login` first");
            }
            execute(&app, command).await?;
        }
    }

    Ok(finish(&app.state()))
}

async fn execute(app: &InventoryApp, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Login(_) | Command::Logout => {}

        Command::Whoami(args) => {
            if args.verify && !app.verify_session().await {
                return Ok(());
            }
            if let Some(user) = app.state().user {
                print!("{}", render::render_user(&user));
            }
        }

        Command::List(args) => list(app, args).await,

        Command::Types => {
            app.load_equipment_types().await;
            print!("{}", render::render_types(&app.state().equipment_types));
        }

        Command::Stats => {
            app.fetch_stats().await;
            if let Some(stats) = app.state().stats {
                print!("{}", render::render_stats(&stats));
            }
        }

        Command::Add(args) => add(app, args).await?,

        Command::Edit(args) => {
            app.update_equipment(args.id, args.equipment_type, &args.serial, &args.note)
                .await;
        }

        Command::Delete(args) => {
            let yes = args.yes;
            let confirm = move |question: &str| yes || prompt_yes_no(question);
            app.delete_equipment(args.id, &confirm).await;
        }

        Command::Restore(args) => {
            app.restore_equipment(args.id).await;
        }
    }
    Ok(())
}

async fn login(app: &InventoryApp, args: LoginArgs) -> anyhow::Result<()> {
    let username = match args.username {
        Some(username) => username,
        None => prompt("Username: ")?,
    };
    let password = match args.password {
        Some(password) => password,
        None => prompt_secret("Password: ")?,
    };

    if app.login(&username, &SecureString::new(password)).await {
        if let Some(user) = app.state().user {
            print!("{}", render::render_user(&user));
        }
    }
    Ok(())
}

async fn list(app: &InventoryApp, args: ListArgs) {
    let filters = QueryFilters {
        search_query: args.search.unwrap_or_default(),
        selected_type: args.equipment_type,
    };

    app.dispatch(AppIntent::FiltersSet { filters });
    tokio::join!(app.load_page(args.page), app.load_equipment_types());

    let state = app.state();
    if state.error_message().is_none() {
        print!("{}", render::render_equipment(&state));
    }
}

async fn add(app: &InventoryApp, args: AddArgs) -> anyhow::Result<()> {
    let mut serials = args.serials;
    if let Some(path) = &args.serials_file {
        serials.extend(read_serials(path)?);
    }

    app.load_equipment_types().await;
    app.dispatch(AppIntent::CreateTypeSelected {
        equipment_type: Some(args.equipment_type),
    });
    app.dispatch(AppIntent::CreateSerialsChanged {
        text: serials.join("\n"),
    });
    app.dispatch(AppIntent::CreateNoteChanged { note: args.note });

    for serial in app.state().mask_mismatches() {
        eprintln!("Warning: '{}' does not match the type's serial mask", serial);
    }

    app.submit_create_form().await;
    Ok(())
}

fn read_serials(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read serials from {}", path.display()))?;
    Ok(parse_serial_numbers(&text))
}

/// Print the outcome and pick the exit code.
fn finish(state: &AppState) -> ExitCode {
    if let Some(message) = state.success_message() {
        println!("{}", message);
    }
    if let Some(message) = state.error_message() {
        eprintln!("{}", message);
    }
    if let Some(message) = state.login_error.as_deref() {
        eprintln!("{}", message);
    }

    if state.error_message().is_some() || state.login_error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn prompt(label: &str) -> anyhow::Result<String> {
    show_label(label)?;
    read_line()
}

/// Like [`prompt`] but without echoing what is typed.
fn prompt_secret(label: &str) -> anyhow::Result<String> {
    show_label(label)?;
    if !io::stdin().is_terminal() {
        return read_line();
    }

    let secret = {
        terminal::enable_raw_mode()?;
        let _raw = scopeguard::guard((), |_| {
            let _ = terminal::disable_raw_mode();
        });
        read_hidden()?
    };
    eprintln!();
    Ok(secret)
}

fn read_hidden() -> anyhow::Result<String> {
    let mut secret = String::new();
    loop {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event::read()?
        else {
            continue;
        };
        if kind == KeyEventKind::Release {
            continue;
        }
        match code {
            KeyCode::Enter => return Ok(secret),
            KeyCode::Backspace => {
                secret.pop();
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                bail!("interrupted")
            }
            KeyCode::Char(c) => secret.push(c),
            _ => {}
        }
    }
}

fn show_label(label: &str) -> anyhow::Result<()> {
    let mut stderr = io::stderr();
    write!(stderr, "{}", label)?;
    stderr.flush()?;
    Ok(())
}

fn read_line() -> anyhow::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_yes_no(question: &str) -> bool {
    match prompt(&format!("{} [y/N] ", question)) {
        Ok(answer) => matches!(answer.trim(), "y" | "Y" | "yes" | "YES"),
        Err(_) => false,
    }
}
