use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use reedline::Signal;
use tracing_subscriber::EnvFilter;

mod command_parser;
mod prompt;
mod repl;

use bookview::{
    config::Config,
    render::{
        html, terminal,
        view::{PageView, SummaryView},
    },
    server::{self, AppState},
    ApiClient, BookDetailPage, Credential,
};

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bookview=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn show(matches: &ArgMatches, config: &Config) -> Result<()> {
    let location = matches
        .get_one::<String>("location")
        .context("location is required")?;
    let client = ApiClient::from_config(config)?;
    let mut page = BookDetailPage::new(client, Credential::from_config(config)?);
    page.navigate(location);
    page.settle().await;

    let view = PageView::from_page(&page);
    if matches.get_flag("html") {
        println!("{}", html::render_page(&view)?);
    } else {
        print!("{}", terminal::render_page(&view, config)?);
    }
    Ok(())
}

async fn list(config: &Config) -> Result<()> {
    let client = ApiClient::from_config(config)?;
    let books = client.books().await?;
    let books: Vec<SummaryView> = books.iter().map(SummaryView::from).collect();
    print!("{}", terminal::render_index(&books, config)?);
    Ok(())
}

async fn serve(matches: &ArgMatches, config: &Config) -> Result<()> {
    let listen = matches
        .get_one::<String>("listen")
        .unwrap_or(&config.listen_addr);
    let addr: SocketAddr = listen
        .parse()
        .with_context(|| format!("Invalid listen address {listen}"))?;
    // Anonymous visitors stay anonymous unless the operator opts in.
    let credential = if matches.get_flag("configured-token") {
        Credential::from_config(config)?
    } else {
        None
    };
    let state = AppState {
        client: ApiClient::from_config(config)?,
        credential,
    };
    server::start(addr, state).await
}

async fn browse(config: &Config) -> Result<()> {
    let client = ApiClient::from_config(config)?;
    let mut page = BookDetailPage::new(client, Credential::from_config(config)?);
    let history_file = shellexpand::path::tilde(&config.history_file);
    let mut repl = repl::Repl::new(command_parser::repl_commands(), &history_file)?;
    loop {
        match repl.read_line() {
            Ok(Signal::Success(buffer)) => {
                let line = buffer.trim();
                match line {
                    "" => continue,
                    "exit" | "quit" => break,
                    "reload" => page.reload(),
                    location => page.navigate(location),
                }
                page.settle().await;
                repl.set_book(page.identifier().map(|x| x.to_string()));
                match terminal::render_page(&PageView::from_page(&page), config) {
                    Ok(out) => print!("{out}"),
                    Err(e) => println!("{}", config.output_error.format_str(e)),
                }
            }
            Ok(Signal::CtrlD) | Ok(Signal::CtrlC) => {
                println!("\nAborted!");
                break;
            }
            Err(e) => {
                println!("{}", config.output_error.format_str(e));
                break;
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine.
    dotenvy::dotenv().ok();
    init_tracing();

    let args = command_parser::arg_parser().get_matches();
    let config = Config::read_config()?;

    match args.subcommand() {
        Some(("show", matches)) => show(matches, &config).await?,
        Some(("list", _)) => list(&config).await?,
        Some(("serve", matches)) => serve(matches, &config).await?,
        Some(("browse", _)) => browse(&config).await?,
        Some(("config", _)) => print!("{}", Config::default_as_string()?),
        Some((name, _)) => unimplemented!("{}", name),
        None => unreachable!("subcommand required"),
    }

    Ok(())
}
