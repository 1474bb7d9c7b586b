use anyhow::Context;
use crossterm::{
    event::{Event, read},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use iclass::cli;
use iclass::config::EditorConfig;
use iclass::editor::Editor;
use iclass::key::Key;
use iclass::syntax::Grammar;
use iclass::ui::renderer::TuiRenderer;
use log::info;

/// Parse arguments and config, set up logging and the terminal, then run the
/// editor until it asks to quit. The terminal is restored on every exit path
/// out of the event loop.
fn main() -> anyhow::Result<()> {
    let cli_args = cli::parse_args();

    let config = EditorConfig::load(cli_args.config.as_deref()).context("loading config")?;

    // Set RUST_LOG to control verbosity; log_file keeps output off the screen.
    let mut logger = env_logger::Builder::new();
    if let Some(path) = &config.log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        logger
            .target(env_logger::Target::Pipe(Box::new(file)))
            .filter_level(log::LevelFilter::Info);
    }
    logger.parse_default_env().init();

    let mut editor = Editor::with_config(&config);
    if let Some(path) = &cli_args.file {
        editor.open(&path.to_string_lossy());
    }
    if let Some(grammar) = cli_args.grammar {
        editor.grammar = Grammar::from(grammar);
    }
    info!("starting with grammar {}", editor.grammar);

    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    if let Err(err) = crossterm::execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode()?;
        return Err(err).context("entering alternate screen");
    }

    let result = run(&mut editor);

    crossterm::execute!(stdout, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn run(editor: &mut Editor) -> anyhow::Result<()> {
    let mut renderer = TuiRenderer::new().context("creating renderer")?;
    loop {
        renderer.draw(editor)?;
        match read()? {
            Event::Key(key_event) => {
                if let Some(key) = Key::from_event(key_event)
                    && editor.handle_key(key)
                {
                    info!("quitting");
                    return Ok(());
                }
            }
            // The next draw re-measures the terminal.
            Event::Resize(_, _) => {}
            _ => {}
        }
    }
}
