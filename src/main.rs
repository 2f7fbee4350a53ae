use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use lexi::app::App;
use lexi::config::{self, Config};
use lexi::dictionary::{DictionaryClient, FileCache, HttpSource, LookupCache, MemoryCache};
use lexi::document::Document;
use lexi::error::LexiError;
use lexi::host::{self, SynonymCommand};
use lexi::worker;

/// Terminal text editor with dictionary hovers and synonym substitution
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File to edit (an empty scratch buffer if omitted)
    input: Option<PathBuf>,

    /// Print the definition of WORD and exit
    #[arg(long, value_name = "WORD", conflicts_with_all = ["synonyms", "input"])]
    define: Option<String>,

    /// Print the cached synonyms of WORD and exit
    #[arg(long, value_name = "WORD", conflicts_with = "input")]
    synonyms: Option<String>,

    /// Lookup cache file
    #[arg(long, value_name = "PATH")]
    cache: Option<PathBuf>,

    /// Keep lookups in memory only
    #[arg(long, conflicts_with = "cache")]
    no_persist: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/lexi-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let config_result = config::load_config();
    let args = Args::parse();
    let config = config_result.config;

    let (cache, cache_warning) = open_cache(&args, &config);
    let warnings: Vec<String> = config_result
        .warning
        .into_iter()
        .chain(cache_warning)
        .collect();

    if let Some(word) = &args.define {
        print_warnings(&warnings);
        run_define(word, cache, &config)?;
        return Ok(());
    }

    if let Some(word) = &args.synonyms {
        print_warnings(&warnings);
        run_synonyms(word, cache.as_ref())?;
        return Ok(());
    }

    let document = match args.input {
        Some(path) => Document::open(path).map_err(LexiError::Io)?,
        None => Document::from_text(""),
    };
    let source = HttpSource::new(&config.dictionary.api_url).map_err(LexiError::Lookup)?;
    let client = DictionaryClient::new(Arc::clone(&cache), source);

    let terminal = init_terminal()?;

    let mut app = App::new(document, cache, &config);
    if !warnings.is_empty() {
        app.notification.show_warning(&warnings.join("; "));
    }
    setup_worker(&mut app, client);

    let result = run(terminal, app);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== LEXI DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/lexi-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== LEXI DEBUG SESSION STARTED ===");
}

/// Pick the cache backend: `--no-persist` wins, then `--cache`, then config
fn open_cache(args: &Args, config: &Config) -> (Arc<dyn LookupCache>, Option<String>) {
    if args.no_persist {
        return (Arc::new(MemoryCache::new()), None);
    }

    let path = match &args.cache {
        Some(path) => Some(path.clone()),
        None if !config.cache.persist => return (Arc::new(MemoryCache::new()), None),
        None => config
            .cache
            .path
            .clone()
            .or_else(config::default_cache_path),
    };

    match path {
        Some(path) => {
            let cache = FileCache::open(path);
            let warning = cache.warning().map(String::from);
            (Arc::new(cache), warning)
        }
        None => (
            Arc::new(MemoryCache::new()),
            Some("No data directory found; lookups are cached for this session only".to_string()),
        ),
    }
}

fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
}

fn run_define(word: &str, cache: Arc<dyn LookupCache>, config: &Config) -> Result<(), LexiError> {
    if word.trim().is_empty() {
        return Err(LexiError::InvalidArgs("WORD must not be empty".to_string()));
    }

    let source = HttpSource::new(&config.dictionary.api_url)?;
    let client = DictionaryClient::new(cache, source);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match rt.block_on(host::provide_hover(&client, word))? {
        Some(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        None => println!("No definitions found for {}", word),
    }
    Ok(())
}

fn run_synonyms(word: &str, cache: &dyn LookupCache) -> Result<(), LexiError> {
    if word.trim().is_empty() {
        return Err(LexiError::InvalidArgs("WORD must not be empty".to_string()));
    }

    match host::provide_synonym_command(cache, word) {
        SynonymCommand::Pick(choices) => {
            for choice in choices {
                println!("{}", choice);
            }
        }
        SynonymCommand::Message(message) => println!("{}", message),
    }
    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

/// Start the lookup worker and hand its channels to the app
fn setup_worker(app: &mut App, client: DictionaryClient<HttpSource>) {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.set_channels(request_tx, response_rx);

    worker::spawn_worker(client, request_rx, response_tx);
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
