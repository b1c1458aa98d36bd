use std::io::Write;
use std::time::Duration;

use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;
use willow_core::{
    format_clock, BreathAnimator, BreathingPattern, BreathingSessionEngine, Config, Event,
    FeedbackObserver, HapticFeedback, ImpactStyle, NotificationKind, SessionDuration,
    SessionStatus, VisualTarget,
};

const BAR_WIDTH: usize = 10;

#[derive(Args)]
pub struct BreatheArgs {
    /// Breathing pattern (relaxed, box_breathing, four_seven_eight)
    #[arg(long, short)]
    pattern: Option<BreathingPattern>,
    /// Session length (1m, 3m, 5m, or seconds)
    #[arg(long, short)]
    duration: Option<SessionDuration>,
    /// Print events as JSON lines
    #[arg(long)]
    json: bool,
    /// Silence the completion bell
    #[arg(long)]
    no_haptics: bool,
    /// Milliseconds per tick
    #[arg(long, default_value_t = 1000, hide = true)]
    tick_ms: u64,
}

/// The terminal bell stands in for a vibration motor.
struct TerminalHaptics;

impl HapticFeedback for TerminalHaptics {
    fn impact(&self, style: ImpactStyle) {
        tracing::trace!(?style, "haptic impact");
    }

    fn notify(&self, kind: NotificationKind) {
        tracing::debug!(?kind, "haptic notification");
        if kind == NotificationKind::Success {
            eprint!("\x07");
        }
    }
}

/// Draws the breathing indicator as a bar at the start of each phase line.
struct TerminalAnimator {
    enabled: bool,
}

impl BreathAnimator for TerminalAnimator {
    fn animate_to(&mut self, target: VisualTarget, over: Duration) {
        tracing::debug!(?target, secs = over.as_secs(), "indicator animating");
        if self.enabled {
            let filled = (target.scale() * BAR_WIDTH as f64).round() as usize;
            print!("[{:<width$}] ", "#".repeat(filled), width = BAR_WIDTH);
        }
    }
}

enum Outcome {
    Completed,
    Stopped { remaining: u32 },
}

pub fn run(args: BreatheArgs) -> willow_core::Result<()> {
    let config = Config::load_or_default();
    let pattern = args.pattern.unwrap_or(config.breathing.pattern);
    let duration = args.duration.unwrap_or(config.breathing.duration);
    let haptics = config.breathing.haptics && !args.no_haptics;

    let mut engine = BreathingSessionEngine::new(pattern, duration);
    engine.set_observer(Box::new(
        FeedbackObserver::new(
            TerminalHaptics,
            TerminalAnimator {
                enabled: !args.json,
            },
        )
        .with_haptics(haptics),
    ));

    if !args.json {
        println!(
            "{} for {}: {}. Enter pauses or resumes, q stops.",
            pattern.label(),
            duration.label(),
            pattern.description().to_lowercase()
        );
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let tick = Duration::from_millis(args.tick_ms.max(1));
    let outcome = runtime.block_on(drive(&mut engine, tick, args.json));
    // A pending stdin read must not hold the process open.
    runtime.shutdown_background();
    let outcome = outcome?;

    if args.json {
        println!("{}", serde_json::to_string(&engine.snapshot())?);
        return Ok(());
    }
    match outcome {
        Outcome::Completed => println!(
            "Session complete: {} for {}.",
            pattern.label(),
            duration.label()
        ),
        Outcome::Stopped { remaining } => {
            println!("Session stopped with {} left.", format_clock(remaining))
        }
    }
    Ok(())
}

/// Owns the once-per-tick clock. Ticks missed while the process was busy are
/// skipped, never replayed.
async fn drive(
    engine: &mut BreathingSessionEngine,
    period: Duration,
    json: bool,
) -> std::io::Result<Outcome> {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval.tick().await;

    if let Some(event) = engine.start() {
        render(engine, &event, json)?;
    }

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Some(event) = engine.tick() {
                    render(engine, &event, json)?;
                    if matches!(event, Event::SessionCompleted { .. }) {
                        return Ok(Outcome::Completed);
                    }
                }
            }
            line = input.next_line(), if input_open => {
                match line? {
                    Some(cmd) if cmd.trim().eq_ignore_ascii_case("q") => {
                        return Ok(stop(engine));
                    }
                    Some(_) => {
                        if engine.toggle_pause() && !json {
                            println!("{} at {}", status_word(engine), engine.formatted_time_remaining());
                        }
                    }
                    None => input_open = false,
                }
            }
            result = &mut ctrl_c => {
                result?;
                return Ok(stop(engine));
            }
        }
    }
}

fn stop(engine: &mut BreathingSessionEngine) -> Outcome {
    let remaining = engine.total_remaining();
    engine.stop();
    Outcome::Stopped { remaining }
}

fn status_word(engine: &BreathingSessionEngine) -> &'static str {
    match engine.status() {
        SessionStatus::Paused => "Paused",
        _ => "Resumed",
    }
}

fn render(engine: &BreathingSessionEngine, event: &Event, json: bool) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string(event)?)?;
        return out.flush();
    }
    match event {
        Event::PhaseChanged {
            kind,
            duration_secs,
            ..
        } => writeln!(
            out,
            "{:<12} {:>2}s   {} left",
            kind.instruction(),
            duration_secs,
            engine.formatted_time_remaining()
        )?,
        Event::SessionCompleted { .. } => {}
    }
    out.flush()
}
