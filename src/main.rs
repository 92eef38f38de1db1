use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy_bob::audio::{AudioSink, Silent, TerminalBell};
use flappy_bob::constants::FRAME_MS;
use flappy_bob::input::InputMapper;
use flappy_bob::sim_events::apply_sim_events;
use flappy_bob::utils::build_info;
use flappy_bob::{ui, GameInput, Simulation, Storage};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    let mut sound = false;
    let mut reset_high_score = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--sound" => sound = true,
            "--reset-high-score" => reset_high_score = true,
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Flappy Bob - fly through the gaps\n");
                println!("Usage: flappy-bob [options]\n");
                println!("Options:");
                println!("  --sound             Ring the terminal bell on flap and game over");
                println!("  --reset-high-score  Delete the stored high score and exit");
                println!("  --version           Show version information");
                println!("  --help              Show this help message");
                println!("\nControls: Space/Up/Enter or left click to flap, Q/Esc to quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'flappy-bob --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let storage = Storage::new()?;
    init_logging(&storage);

    if reset_high_score {
        storage.clear_high_score()?;
        tracing::info!("high score reset");
        println!("High score reset.");
        return Ok(());
    }

    let config = match storage.load_or_create_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid config");
            eprintln!("Could not load {}: {}", storage.config_path().display(), e);
            std::process::exit(1);
        }
    };
    let high_score = storage.load_high_score();
    tracing::info!(?config, high_score, "starting");

    let audio: Box<dyn AudioSink> = if sound {
        Box::new(TerminalBell::new(io::stdout()))
    } else {
        Box::new(Silent)
    };

    // Release events let the input layer tell a held key from a new press
    let key_events = supports_keyboard_enhancement().unwrap_or(false);
    tracing::debug!(key_events, "keyboard enhancement");

    install_panic_hook(key_events);
    let mut terminal = setup_terminal(key_events)?;
    let result = run(&mut terminal, Simulation::new(config, high_score), audio, &storage);
    restore_terminal(&mut terminal, key_events)?;

    match &result {
        Ok(()) => tracing::info!("shutdown"),
        Err(e) => tracing::error!(error = %e, "game loop failed"),
    }
    result
}

/// Main loop: draw, wait for input until the next frame is due, then step.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut sim: Simulation,
    mut audio: Box<dyn AudioSink>,
    storage: &Storage,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut input = InputMapper::new();
    let frame = Duration::from_secs_f64(FRAME_MS / 1000.0);
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|f| ui::draw_ui(f, &sim.snapshot()))?;

        let mut timeout = frame.saturating_sub(last_frame.elapsed());
        while event::poll(timeout)? {
            match input.map(&event::read()?, Instant::now()) {
                Some(GameInput::Quit) => return Ok(()),
                Some(game_input) => {
                    let events = sim.handle_input(game_input);
                    apply_sim_events(&events, audio.as_mut(), storage);
                }
                None => {}
            }
            // Drain whatever else is queued without blocking
            timeout = Duration::ZERO;
        }

        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_frame).as_secs_f64() * 1000.0;
        last_frame = now;

        let events = sim.advance(elapsed_ms, &mut rng);
        apply_sim_events(&events, audio.as_mut(), storage);
    }
}

/// Log to ~/.flappy-bob/flappy-bob.log; the terminal belongs to the UI.
fn init_logging(storage: &Storage) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match OpenOptions::new()
        .create(true)
        .append(true)
        .open(storage.log_path())
    {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }
}

fn setup_terminal(key_events: bool) -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    if key_events {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    key_events: bool,
) -> io::Result<()> {
    if key_events {
        terminal.backend_mut().execute(PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Leave raw mode before the default hook prints, so panics stay readable.
fn install_panic_hook(key_events: bool) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let mut stdout = io::stdout();
        if key_events {
            let _ = stdout.execute(PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
        tracing::error!(%info, "panic");
        default_hook(info);
    }));
}
