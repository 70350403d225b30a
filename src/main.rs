use clap::{Parser, Subcommand};
use joke_machine::app::{ExhaustedBehavior, FetchOutcome, WidgetSettings};
use joke_machine::net::HttpJokeSource;
use joke_machine::storage::FileStorage;
use joke_machine::ui::Console;
use joke_machine::{HistoryManager, JokeWidget};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "joke-machine")]
#[command(about = "Fetch dad jokes and browse the ones you've already seen")]
struct Args {
    /// Joke endpoint (must answer `Accept: application/json` with a `joke` field)
    #[arg(long = "endpoint")]
    endpoint: Option<Url>,

    /// Storage file holding the joke history
    #[arg(long = "store")]
    store: Option<PathBuf>,

    /// Requests per fetch before giving up on finding an unseen joke
    #[arg(long = "max-attempts", default_value_t = 3)]
    max_attempts: u32,

    /// Request timeout in seconds
    #[arg(long = "timeout", default_value_t = 30)]
    timeout: u64,

    /// What to show when no unseen joke turns up
    #[arg(long = "on-exhausted", value_enum, default_value_t = ExhaustedBehavior::Keep)]
    on_exhausted: ExhaustedBehavior,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch one new joke and print it
    Fetch,
    /// Print every stored joke, oldest first
    List,
    /// Print the most recent joke
    Show,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let defaults = WidgetSettings::default();
    let settings = WidgetSettings {
        endpoint: args.endpoint.unwrap_or(defaults.endpoint.clone()),
        store_path: args.store.unwrap_or(defaults.store_path.clone()),
        max_attempts: args.max_attempts,
        timeout: Duration::from_secs(args.timeout),
        on_exhausted: args.on_exhausted,
        ..defaults
    };

    if let Err(e) = run(args.command, settings) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Option<Command>, settings: WidgetSettings) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Using storage file {}", settings.store_path.display());
    let storage = FileStorage::new(&settings.store_path);
    let source = HttpJokeSource::new(settings.endpoint.clone(), settings.timeout)?;
    let mut manager = HistoryManager::new(storage, source);

    match command {
        Some(Command::Fetch) => match manager.fetch_joke(settings.max_attempts)? {
            FetchOutcome::Joke(joke) => println!("{}", joke),
            FetchOutcome::Exhausted => println!("{}", settings.exhausted_message),
        },
        Some(Command::List) => {
            for (i, joke) in manager.entries().iter().enumerate() {
                println!("{:>4}  {}", i + 1, joke);
            }
        }
        Some(Command::Show) => match manager.latest() {
            Some(joke) => println!("{}", joke),
            None => println!("{}", settings.placeholder),
        },
        None => {
            let mut widget = JokeWidget::new(manager, settings);
            let stdin = std::io::stdin();
            let mut console = Console::new(stdin.lock(), std::io::stdout());
            console.run(&mut widget)?;
        }
    }
    Ok(())
}
