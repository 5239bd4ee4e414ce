//! walkthrough: walk one simulated route across the campus.
//!
//! ```text
//! walkthrough [ROOM] [--realtime] [--out DIR] [--every N]
//! ```
//!
//! `ROOM` defaults to `60TA - 601`.  Without `--realtime` the scheduler runs
//! on a fake clock and the whole walk finishes instantly; with it, each tick
//! sleeps the configured 30 ms and the walk takes about 20 s.  `--out` writes
//! `trace.csv` and `sessions.csv` into `DIR`, one trace row every `N` ticks.
//!
//! Set `RUST_LOG=cw_sim=debug` (or `trace`) to watch the state machine.

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tracing::info;

use cw_core::NavConfig;
use cw_orientation::SimulatedCompass;
use cw_output::{CsvTraceWriter, TraceObserver};
use cw_route::{CampusLayout, load_zones_reader};
use cw_sim::{
    ManualPacer, NavDriver, NavObserver, NavUpdate, Pacer, RealtimePacer, RunOutcome, TickScheduler,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_ROOM:   &str = "60TA - 601";
const COMPASS_SEED:   u64  = 7;
const COMPASS_JITTER: f64  = 6.0;
const COMPASS_EVERY:  u64  = 25; // ticks between simulated sensor readings

// ── Zone table ────────────────────────────────────────────────────────────────

const ZONES_CSV: &str = "\
code,name,column\n\
TA,Tower A,70\n\
TB,Tower B,82\n\
TC,Tower C,94\n\
";

// ── Arguments ─────────────────────────────────────────────────────────────────

struct Args {
    room:     String,
    realtime: bool,
    out:      Option<PathBuf>,
    every:    u64,
}

fn parse_args() -> Result<Args> {
    let mut args = Args { room: DEFAULT_ROOM.to_owned(), realtime: false, out: None, every: 10 };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--realtime" => args.realtime = true,
            "--out" => args.out = Some(it.next().context("--out needs a directory")?.into()),
            "--every" => {
                let n = it.next().context("--every needs a tick count")?;
                args.every = n.parse().with_context(|| format!("bad --every value {n:?}"))?;
            }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            room => args.room = room.to_owned(),
        }
    }
    Ok(args)
}

// ── Console observer ──────────────────────────────────────────────────────────

/// Prints the banner whenever it changes, feeds the simulated compass, and
/// forwards everything to the optional trace writer.
struct Console {
    compass: Arc<SimulatedCompass>,
    last:    String,
    trace:   Option<TraceObserver<CsvTraceWriter>>,
}

impl NavObserver for Console {
    fn on_start(&mut self, update: &NavUpdate) {
        if let Some(t) = self.trace.as_mut() {
            t.on_start(update);
        }
    }

    fn on_update(&mut self, update: &NavUpdate) {
        // The simulated user holds the phone pointing where they walk.
        if update.tick.0 % COMPASS_EVERY == 0 {
            self.compass.set_base(update.heading_deg);
            self.compass.sample();
        }
        if update.headline != self.last {
            println!(
                "{:>5}  {:>6.2}%  {}  ETA {} min  compass {:>5.1}°  {}",
                update.tick.to_string(),
                update.progress,
                update.position,
                update.eta_minutes,
                update.compass_deg,
                update.headline,
            );
            self.last = update.headline.clone();
        }
        if let Some(t) = self.trace.as_mut() {
            t.on_update(update);
        }
    }

    fn on_arrived(&mut self, update: &NavUpdate) {
        if let Some(t) = self.trace.as_mut() {
            t.on_arrived(update);
        }
    }

    fn on_cancelled(&mut self, at: cw_core::Tick) {
        println!("Cancelled at {at}");
        if let Some(t) = self.trace.as_mut() {
            t.on_cancelled(at);
        }
    }
}

fn run<P: Pacer>(
    driver:  &mut NavDriver<CampusLayout, SimulatedCompass>,
    console: &mut Console,
    pacer:   P,
) -> Result<RunOutcome> {
    let mut scheduler = TickScheduler::for_config(&driver.config, pacer);
    Ok(scheduler.run(driver, console)?)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,walkthrough=info".into()),
        )
        .init();

    let args = parse_args()?;

    // 1. Campus layout with the embedded zone table.
    let zones = load_zones_reader(Cursor::new(ZONES_CSV))?;
    let layout = CampusLayout::default().with_zones(zones);
    println!("=== walkthrough: campus navigation ===");
    println!("Zones: {}", layout.zones.iter().map(|z| z.name.as_str()).collect::<Vec<_>>().join(", "));

    // 2. Driver with a simulated compass.
    let config = NavConfig::default();
    let compass = Arc::new(SimulatedCompass::new(0.0, COMPASS_JITTER, COMPASS_SEED));
    let mut driver = cw_sim::NavBuilder::new(layout)
        .config(config)
        .heading_source(Arc::clone(&compass))
        .build()?;
    driver.watch_compass(|deg| tracing::trace!(deg, "compass reading"));
    println!(
        "Tick {} ms  |  step {}  |  {} ticks to arrive ({:.2} s)",
        driver.config.tick_interval_ms,
        driver.config.progress_step,
        driver.config.ticks_to_arrive(),
        driver.config.traversal_time().as_secs_f64(),
    );

    // 3. Optional CSV trace.
    let trace = match &args.out {
        Some(dir) => {
            std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            Some(TraceObserver::sampled(CsvTraceWriter::new(dir)?, args.every))
        }
        None => None,
    };

    let mut console = Console { compass, last: String::new(), trace };

    // 4. Walk.
    println!("{} (ETA {} min)", driver.headline(), driver.eta_minutes());
    println!("Destination: {}", args.room);
    println!();
    driver.start_for(&args.room, &mut console)?;
    if let Some(session) = driver.session() {
        info!(zone = %session.route.zone(), length = session.route.total_length(), "route ready");
    }

    let outcome = if args.realtime {
        run(&mut driver, &mut console, RealtimePacer)?
    } else {
        run(&mut driver, &mut console, ManualPacer::default())?
    };

    println!();
    println!("Outcome: {outcome:?}  |  ticks: {}", driver.session().map_or(0, |s| s.ticks.0));
    driver.reset();

    // 5. Flush the trace.
    if let Some(mut trace) = console.trace.take() {
        if let Some(e) = trace.take_error() {
            bail!("trace output failed: {e}");
        }
        trace.into_writer()?;
        if let Some(dir) = &args.out {
            println!("Trace written to {}", dir.display());
        }
    }

    Ok(())
}
