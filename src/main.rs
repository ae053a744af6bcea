use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use chirp::app::{App, Section};
use chirp::config;
use chirp::ui;

/// Keyboard-driven terminal dashboard for social-media analytics
#[derive(Parser, Debug)]
#[command(name = "chirp", version, about)]
struct Cli {
    /// Path to a config file (overrides CHIRP_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory exports are written to (overrides the config file)
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Section to open at startup (overview, dashboard, posts, engagement,
    /// campaigns, customers)
    #[arg(short, long)]
    section: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = config::load(cli.config)?;
    if cli.export_dir.is_some() {
        config.export_dir = cli.export_dir;
    }
    let start_section = match cli.section.as_deref() {
        Some(name) => Some(
            Section::from_name(name)
                .ok_or_else(|| anyhow::anyhow!("unknown section: {name}"))?,
        ),
        None => None,
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config, start_section);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: config::Config,
    start_section: Option<Section>,
) -> Result<()> {
    let tick_rate = config.tick_rate();
    let mut app = App::new(&config, Instant::now());
    if let Some(section) = start_section {
        app.select_section(section, Instant::now());
    }
    app.on_resize(terminal.size()?.width);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.on_key(key, Instant::now());
                }
                Event::Resize(cols, _) => app.on_resize(cols),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick(Instant::now());
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
