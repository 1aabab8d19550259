use std::cell::RefCell;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use color_eyre::Result;
use crossterm::{
    event::{self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;

use swatch::config::{ConfigResult, load_config, load_config_from_path};
use swatch::gallery::App;
use swatch::page_title::TerminalTitle;
use swatch::tokens::{EnsureOutcome, NpmRunner, Theme, TokenPaths, ensure_tokens};

/// How long to block on input when no tooltip timer is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(version, about = "Terminal design-system component gallery")]
struct Cli {
    /// Config file (defaults to ~/.config/swatch/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Token package directory, overrides the config file
    #[arg(long, global = true)]
    tokens: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build the compiled token stylesheet if it is missing. Never fails.
    EnsureTokens,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();

    let ConfigResult { config, warning } = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    let token_dir = cli
        .tokens
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.tokens.dir));
    let paths = TokenPaths::new(token_dir, &config.tokens.stylesheet);

    match cli.command {
        Some(Command::EnsureTokens) => {
            init_cli_logging();
            if let Some(warning) = warning {
                log::warn!("{}", warning);
            }
            run_ensure_tokens(&paths);
            Ok(())
        }
        None => {
            init_gallery_logging();

            let (theme, theme_warning) = Theme::load(&paths.stylesheet_path());
            let title_sink = Rc::new(RefCell::new(TerminalTitle::stdout()));
            let mut app = App::new(config, theme, title_sink);
            app.warnings.extend(warning);
            app.warnings.extend(theme_warning);

            // Initialize terminal (handles raw mode, alternate screen, etc.)
            let terminal = ratatui::init();

            // Restore terminal before the app drops and resets the title
            guarded(
                execute!(stdout(), EnableMouseCapture, EnableFocusChange),
                || run(terminal, &mut app),
                || {
                    let disabled = execute!(stdout(), DisableMouseCapture, DisableFocusChange);
                    ratatui::restore();
                    disabled
                },
            )
        }
    }
}

/// Run `body` only if `setup` succeeded. `teardown` runs either way.
fn guarded<T>(
    setup: io::Result<()>,
    body: impl FnOnce() -> Result<T>,
    teardown: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    let result = setup.map_err(Into::into).and_then(|()| body());
    let torn_down = teardown();
    let value = result?;
    torn_down?;
    Ok(value)
}

fn run_ensure_tokens(paths: &TokenPaths) {
    let mut runner = NpmRunner;
    match ensure_tokens(paths, &mut runner) {
        EnsureOutcome::AlreadyBuilt => {
            println!("Design tokens already built: {}", paths.stylesheet_path().display());
        }
        EnsureOutcome::NothingToDo => {
            println!(
                "No token package with a build script at {}; nothing to do",
                paths.package_dir.display()
            );
        }
        EnsureOutcome::Built => {
            println!("Built design tokens: {}", paths.stylesheet_path().display());
        }
        EnsureOutcome::Failed(reason) => {
            println!("Skipped design token build: {}", reason);
        }
    }
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|frame| app.render(frame))?;
            needs_redraw = false;
        }

        // Wake up in time for the earliest pending tooltip
        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            let event = event::read()?;
            needs_redraw |= app.handle_event(event, Instant::now())?;
        }

        needs_redraw |= app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn init_cli_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// The gallery owns the screen, so logs only go to a file, and only in debug builds
fn init_gallery_logging() {
    #[cfg(debug_assertions)]
    {
        let path = std::env::temp_dir().join("swatch.log");
        if let Ok(file) = std::fs::File::create(&path) {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_guarded_failed_setup_still_tears_down() {
        let ran = Cell::new(false);
        let restored = Cell::new(false);

        let result = guarded(
            Err(io::Error::other("mouse capture unsupported")),
            || {
                ran.set(true);
                Ok(())
            },
            || {
                restored.set(true);
                Ok(())
            },
        );

        assert!(result.is_err());
        assert!(!ran.get());
        assert!(restored.get());
    }

    #[test]
    fn test_guarded_body_error_still_tears_down() {
        let restored = Cell::new(false);

        let result: Result<()> = guarded(
            Ok(()),
            || Err(color_eyre::eyre::eyre!("draw failed")),
            || {
                restored.set(true);
                Ok(())
            },
        );

        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_guarded_reports_teardown_error_after_success() {
        let result = guarded(Ok(()), || Ok(7), || Err(io::Error::other("restore failed")));
        assert!(result.is_err());
    }

    #[test]
    fn test_guarded_returns_body_value() {
        let result = guarded(Ok(()), || Ok(7), || Ok(()));
        assert_eq!(result.unwrap(), 7);
    }
}
