// bisortty: Step-by-step binary insertion sort in the terminal

use std::io;

use bisortty::config::{ArrayConfig, PlaybackConfig, MAX_ARRAY_SIZE};
use bisortty::playback::{DeadlineScheduler, PlaybackController};
use bisortty::snapshot::Trace;
use bisortty::trace;
use bisortty::ui::App;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

#[derive(Parser, Debug)]
#[command(name = "bisortty", version, about = "Step through binary insertion sort")]
struct Args {
    /// Sort this array instead of a random one, e.g. "5,3,8,1"
    #[arg(long, allow_hyphen_values = true)]
    array: Option<String>,

    /// Number of elements in random arrays
    #[arg(long, default_value_t = ArrayConfig::default().size)]
    size: usize,

    /// Smallest random value
    #[arg(long, default_value_t = ArrayConfig::default().min_value, allow_hyphen_values = true)]
    min: i64,

    /// Largest random value
    #[arg(long, default_value_t = ArrayConfig::default().max_value, allow_hyphen_values = true)]
    max: i64,

    /// Autoplay period in milliseconds
    #[arg(long, default_value_t = PlaybackConfig::default().interval_ms)]
    interval_ms: u64,

    /// Seed for reproducible random arrays
    #[arg(long)]
    seed: Option<u64>,

    /// Print the narrated trace and exit
    #[arg(long)]
    dump: bool,

    /// Print the trace as JSON and exit
    #[arg(long, conflicts_with = "dump")]
    json: bool,
}

impl Args {
    fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            array: ArrayConfig {
                size: self.size,
                min_value: self.min,
                max_value: self.max,
            },
            interval_ms: self.interval_ms,
            seed: self.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = args.playback_config();

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let input = match args.array.as_deref().map(trace::parse_input).transpose() {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(values) = &input {
        if values.len() > MAX_ARRAY_SIZE {
            eprintln!(
                "Error: array has {} elements, the maximum is {}",
                values.len(),
                MAX_ARRAY_SIZE
            );
            std::process::exit(1);
        }
    }

    let mut controller = PlaybackController::new(&config, DeadlineScheduler::new());
    controller.reset(input);

    let trace = controller.trace();
    let stats = trace.stats();
    log::info!(
        "generated {} step(s) for {:?}: {} comparison(s), {} shift(s), ~{} bytes",
        stats.total_steps,
        trace.input(),
        stats.comparisons,
        stats.shifts,
        trace.estimated_size()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(trace)?);
        return Ok(());
    }
    if args.dump {
        print_trace(trace);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn print_trace(trace: &Trace) {
    println!("Input: {:?}", trace.input());
    for (idx, step) in trace.steps().iter().enumerate() {
        println!(
            "{:4} {:<8} {:?} {}",
            idx + 1,
            step.kind.label(),
            step.array,
            step.description()
        );
    }

    let stats = trace.stats();
    println!();
    println!(
        "{} step(s), {} comparison(s), {} shift(s), {} insert(s)",
        stats.total_steps, stats.comparisons, stats.shifts, stats.inserts
    );
}
