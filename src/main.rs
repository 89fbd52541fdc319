//! OPAC Search — build a library catalog search URL, open it, remember the term.
//!
//! Entry point for the `opac-search` command-line tool.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use opac_search::app::{App, AutoConfirm, Confirmer, Navigator, SystemNavigator};
use opac_search::config::Config;
use opac_search::logging;
use opac_search::types::errors::SearchError;

#[derive(Parser)]
#[command(name = "opac-search", version, about = "Search the library catalog and keep a short history")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the search history database.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// `tracing` filter directive, e.g. `debug` or `opac_search=info`.
    #[arg(long, global = true)]
    log_filter: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Open a catalog search for TERM in the browser and record it.
    Search {
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
        /// Print the URL instead of opening it. The term is still recorded.
        #[arg(long)]
        print_only: bool,
    },
    /// Print the search URL for TERM without opening it or recording it.
    Url {
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },
    /// Show or edit recent searches.
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
    /// Show or edit the Base URL Template.
    Template {
        #[command(subcommand)]
        action: Option<TemplateAction>,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List recent searches, most recent first.
    List,
    /// Remove one term.
    Remove { term: String },
    /// Remove every term.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Search again for the Nth entry of the list (1 = most recent).
    Rerun {
        index: usize,
        /// Print the URL instead of opening it. The term still moves to the front.
        #[arg(long)]
        print_only: bool,
    },
}

#[derive(Subcommand)]
enum TemplateAction {
    Show,
    Set { url: String },
    Reset,
    /// Check that the template parses as a URL.
    Check,
}

/// Writes URLs to stdout instead of launching a browser.
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn open_in_new_tab(&mut self, url: &str) {
        println!("{}", url);
    }
}

/// Asks on stderr, reads the answer from stdin.
struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&mut self, prompt: &str) -> bool {
        eprint!("{} [y/N] ", prompt);
        let _ = io::stderr().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

fn describe(err: &SearchError) -> String {
    match err {
        SearchError::EmptyTerm => "nothing to search for".to_string(),
        SearchError::MalformedTemplate { .. } => format!(
            "{}\nThe stored template is not a valid URL. Copy a fresh search URL from the \
             library website and run `opac-search template set <URL>`.",
            err
        ),
    }
}

fn run_search(app: &mut App, term: &str, navigator: &mut dyn Navigator) -> ExitCode {
    match app.submit(term, navigator) {
        Ok(outcome) => {
            if !outcome.history_saved {
                eprintln!("warning: search history could not be saved");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", describe(&e));
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::resolve(cli.data_dir, cli.log_filter);
    logging::init_tracing(&config.log_filter);

    let mut app = App::open(&config);

    match cli.command {
        Command::Search { term, print_only } => {
            let term = term.join(" ");
            if print_only {
                run_search(&mut app, &term, &mut PrintNavigator)
            } else {
                run_search(&mut app, &term, &mut SystemNavigator)
            }
        }
        Command::Url { term } => match app.search_url(&term.join(" ")) {
            Ok(url) => {
                println!("{}", url);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {}", describe(&e));
                ExitCode::FAILURE
            }
        },
        Command::History { action } => match action.unwrap_or(HistoryAction::List) {
            HistoryAction::List => {
                if app.history().is_empty() {
                    eprintln!("No recent searches");
                }
                for (i, term) in app.history().iter().enumerate() {
                    println!("{:>2}. {}", i + 1, term);
                }
                ExitCode::SUCCESS
            }
            HistoryAction::Remove { term } => match app.remove_history_item(&term) {
                Ok(true) => ExitCode::SUCCESS,
                Ok(false) => {
                    eprintln!("'{}' is not in the history", term);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("error: {}", e);
                    ExitCode::FAILURE
                }
            },
            HistoryAction::Clear { yes } => {
                if app.history().is_empty() {
                    return ExitCode::SUCCESS;
                }
                let result = if yes {
                    app.clear_history(&mut AutoConfirm(true))
                } else {
                    app.clear_history(&mut StdinConfirmer)
                };
                match result {
                    Ok(true) => ExitCode::SUCCESS,
                    Ok(false) => {
                        eprintln!("History kept");
                        ExitCode::SUCCESS
                    }
                    Err(e) => {
                        eprintln!("error: {}", e);
                        ExitCode::FAILURE
                    }
                }
            }
            HistoryAction::Rerun { index, print_only } => {
                let Some(term) = index
                    .checked_sub(1)
                    .and_then(|i| app.history().get(i))
                    .cloned()
                else {
                    eprintln!("error: no history entry #{}", index);
                    return ExitCode::FAILURE;
                };
                let (mut printer, mut system) = (PrintNavigator, SystemNavigator);
                let navigator: &mut dyn Navigator = if print_only {
                    &mut printer
                } else {
                    &mut system
                };
                match app.search_again(&term, navigator) {
                    Ok(outcome) => {
                        if !outcome.history_saved {
                            eprintln!("warning: search history could not be saved");
                        }
                        ExitCode::SUCCESS
                    }
                    Err(e) => {
                        eprintln!("error: {}", describe(&e));
                        ExitCode::FAILURE
                    }
                }
            }
        },
        Command::Template { action } => {
            let result = match action.unwrap_or(TemplateAction::Show) {
                TemplateAction::Show => {
                    println!("{}", app.template());
                    if app.template_is_default() {
                        eprintln!("(built-in default)");
                    }
                    Ok(())
                }
                TemplateAction::Set { url } => app.set_template(url),
                TemplateAction::Reset => app.reset_template(),
                TemplateAction::Check => app.check_template().map(|()| println!("ok")),
            };
            match result {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
