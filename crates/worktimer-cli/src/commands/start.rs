use std::io::Write;
use std::time::Duration;

use clap::Args;
use worktimer_core::{Config, Event, Session, SessionEngine, SessionState};

use crate::{alert, render};

/// Tick granularity for the run loop. The engine works on wall-clock deltas,
/// so this only bounds display latency, not timing accuracy.
const TICK_MS: u64 = 200;

#[derive(Args)]
pub struct StartArgs {
    /// Workout duration in seconds (defaults to durations.workout_secs)
    pub workout_secs: Option<u64>,
    /// Rest duration in seconds (defaults to durations.rest_secs)
    pub rest_secs: Option<u64>,
    /// Suppress the phase-transition sound
    #[arg(long)]
    pub no_sound: bool,
    /// Emit one JSON event per line instead of the progress display
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: StartArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let workout_secs = args.workout_secs.unwrap_or(config.durations.workout_secs);
    let rest_secs = args.rest_secs.unwrap_or(config.durations.rest_secs);
    let session = Session::new(workout_secs, rest_secs)?;
    let sound = !args.no_sound && config.notifications.enabled;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_session(session, &config, sound, args.json))
}

async fn run_session(
    session: Session,
    config: &Config,
    sound: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = SessionEngine::new(session);

    if let Some(event) = engine.start() {
        if json {
            emit(&event)?;
        } else {
            println!(
                "session: {}s workout, {}s rest (Ctrl-C stops)",
                session.workout_secs(),
                session.rest_secs()
            );
        }
    }

    let mut ticker = tokio::time::interval(Duration::from_millis(TICK_MS));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match engine.tick() {
                    Some(event) => {
                        if json {
                            emit(&event)?;
                        } else if let Event::PhaseCompleted { phase, .. } = &event {
                            // Close out the line with a full bar.
                            println!("\r{}", render::progress_line(phase.label(), 0, 1.0));
                        }
                        if sound {
                            alert::play(config.notifications.custom_sound.as_deref());
                        }
                        if engine.state() == SessionState::Completed {
                            if !json {
                                println!("rest complete, session finished");
                            }
                            return Ok(());
                        }
                        if !json {
                            println!("workout complete, starting rest");
                        }
                    }
                    None => {
                        if !json {
                            print!(
                                "\r{}",
                                render::progress_line(
                                    engine.phase().label(),
                                    engine.remaining_secs(),
                                    engine.phase_progress(),
                                )
                            );
                            std::io::stdout().flush()?;
                        }
                    }
                }
            }
            _ = &mut ctrl_c => {
                if let Some(event) = engine.stop() {
                    if json {
                        emit(&event)?;
                    } else if let Event::SessionStopped { phase, remaining_ms, .. } = &event {
                        println!();
                        println!(
                            "stopped during {} with {}s remaining",
                            phase.label(),
                            remaining_ms.div_ceil(1000)
                        );
                    }
                }
                return Ok(());
            }
        }
    }
}

fn emit(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}
