//! Memory Match runner (default binary).
//!
//! `memory-match` (or `memory-match play`) starts the terminal game. The
//! other subcommands are the topic-file tools: CSV converters and the topic
//! index generator.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event};
use log::info;

use memory_match::app::{App, AppNotice, Views};
use memory_match::config::Config;
use memory_match::data::convert::{
    default_multiple_output, default_pairs_output, read_csv, write_json,
};
use memory_match::data::{
    analyze, build_topic_index, convert_multiple, convert_pairs, discover_topics,
    write_topic_index, Loader,
};
use memory_match::logging;
use memory_match::term::{FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};
use memory_match::types::{MIN_ALTERNATIVES, TICK_MS};

#[derive(Parser)]
#[command(name = "memory-match", version, about = "Word-pair memory game for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play (the default)
    Play {
        /// Directory holding the topic files [default: $MEMORY_MATCH_DATA_DIR or data]
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Pairs dealt per game
        #[arg(long)]
        pairs: Option<usize>,

        /// Shuffle seed
        #[arg(long)]
        seed: Option<u32>,
    },
    /// Convert a two-column CSV into a pairs topic file
    ConvertPairs {
        csv: PathBuf,
        /// Defaults to the CSV path with a .json extension
        output: Option<PathBuf>,
    },
    /// Convert a CSV of word groups into an alternatives topic file
    ConvertMultiple {
        csv: PathBuf,
        /// Defaults to <csv stem>_multiple.json
        output: Option<PathBuf>,

        /// Rows with fewer cells are recorded as invalid
        #[arg(long, default_value_t = MIN_ALTERNATIVES)]
        min_alternatives: usize,

        /// Only print how many cells the rows have
        #[arg(long)]
        analyze: bool,
    },
    /// Regenerate topic_index.json for a data directory
    Index {
        /// Defaults to the configured data directory
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env();

    match cli.command.unwrap_or(Commands::Play {
        data_dir: None,
        pairs: None,
        seed: None,
    }) {
        Commands::Play {
            data_dir,
            pairs,
            seed,
        } => {
            if let Some(dir) = data_dir {
                config.data_dir = dir;
            }
            if let Some(pairs) = pairs.filter(|&n| n > 0) {
                config.pairs = pairs;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(path) = &config.log_path {
                logging::to_file(path)?;
            }
            play(config)
        }
        Commands::ConvertPairs { csv, output } => {
            logging::to_stderr()?;
            run_convert_pairs(&csv, output)
        }
        Commands::ConvertMultiple {
            csv,
            output,
            min_alternatives,
            analyze: analyze_only,
        } => {
            logging::to_stderr()?;
            if analyze_only {
                run_analyze(&csv)
            } else {
                run_convert_multiple(&csv, output, min_alternatives)
            }
        }
        Commands::Index { dir } => {
            logging::to_stderr()?;
            run_index(&dir.unwrap_or(config.data_dir))
        }
    }
}

fn play(config: Config) -> Result<()> {
    info!(
        "starting: data_dir={} pairs={} seed={}",
        config.data_dir.display(),
        config.pairs,
        config.seed
    );
    let (topics, notice) = match discover_topics(&config.data_dir) {
        Ok(topics) => (topics, None),
        Err(e) => (Vec::new(), Some(AppNotice::Error(e.to_string()))),
    };
    let loader = Loader::start().context("failed to start the topic loader")?;
    let views = Views::new(config.reverse_rtl);
    let mut app = App::new(config, topics, loader);
    if notice.is_some() {
        app.set_notice(notice);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app, &views);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App, views: &Views) -> Result<()> {
    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut throttle = RenderThrottle::new(250);
    let mut fb = FrameBuffer::new(0, 0);
    let mut size = crossterm::terminal::size().unwrap_or((80, 24));

    loop {
        // Render.
        let now_ms = started.elapsed().as_millis() as u64;
        let current = crossterm::terminal::size().unwrap_or((80, 24));
        let resized = current != size;
        if resized {
            size = current;
            term.invalidate();
        }
        let fingerprint = app.fingerprint();
        if throttle.should_render(now_ms, fingerprint, resized) {
            app.render_into(views, Viewport::new(size.0, size.1), &mut fb);
            for _ in 0..app.take_bells() {
                term.bell();
            }
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Resize(_, _) => throttle.reset(),
                _ => {}
            }
            if app.should_quit() {
                return Ok(());
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            app.tick(elapsed.as_millis() as u32);
        }
    }
}

fn run_convert_pairs(csv: &Path, output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| default_pairs_output(csv));
    let document = convert_pairs(&read_csv(csv)?);
    write_json(&output, &document)?;

    println!("Converted {} to {}", csv.display(), output.display());
    println!("Total valid pairs: {}", document.total_pairs);
    if let Some(invalid) = &document.invalid_rows {
        println!("Invalid rows (not pairs): {}", invalid.count);
    }
    Ok(())
}

fn run_convert_multiple(csv: &Path, output: Option<PathBuf>, min: usize) -> Result<()> {
    let output = output.unwrap_or_else(|| default_multiple_output(csv));
    let source = csv
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let document = convert_multiple(&read_csv(csv)?, &source, min)?;
    write_json(&output, &document)?;

    let stats = &document.statistics;
    println!("Converted {} to {}", csv.display(), output.display());
    println!("Total entries: {}", document.metadata.total_entries);
    println!(
        "Alternative counts: min={}, max={}, avg={:.2}",
        stats.min_alternatives, stats.max_alternatives, stats.average_alternatives
    );
    if let Some(invalid) = &document.invalid_rows {
        println!(
            "Invalid rows (fewer than {} alternatives): {}",
            min, invalid.count
        );
    }
    Ok(())
}

fn run_analyze(csv: &Path) -> Result<()> {
    let distribution = analyze(&read_csv(csv)?);

    println!("Analysis of {}:", csv.display());
    println!("Total non-empty rows: {}", distribution.total_rows);
    println!();
    println!("Distribution of alternatives per row:");
    for (&cells, &rows) in &distribution.counts {
        println!(
            "  {} alternatives: {} rows ({:.1}%)",
            cells,
            rows,
            distribution.percentage(cells)
        );
    }
    Ok(())
}

fn run_index(dir: &Path) -> Result<()> {
    let index = build_topic_index(dir)?;
    let path = write_topic_index(dir, &index)?;

    println!("Indexed {} files into {}", index.total_files, path.display());
    for file in &index.files {
        match (&file.read_error, file.total_entries) {
            (Some(err), _) => println!("  - {}: unreadable ({})", file.filename, err),
            (None, Some(n)) => println!("  - {}: {} entries", file.filename, n),
            (None, None) => println!("  - {}: unknown entries", file.filename),
        }
    }
    Ok(())
}
