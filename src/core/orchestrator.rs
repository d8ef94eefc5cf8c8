//! Sequential build orchestration
//!
//! The orchestrator drives the satellite queue one unit at a time through
//! a single-consumer event loop. All state lives in [`OrchestrationState`]
//! and every transition goes through [`OrchestrationState::apply`], a pure
//! function from an event to a list of commands. The loop owns the state
//! exclusively; the tick timer, the interrupt handler, and the in-flight
//! executor call are producers into one mpsc inbox, so no two events are
//! ever handled concurrently.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::sync::mpsc;

use crate::core::executor::Executor;
use crate::core::report::LiveRenderer;
use crate::core::unit::{BuildUnit, UnitOutcome};
use crate::error::OrbitError;

/// Animation refresh period
const TICK_PERIOD: Duration = Duration::from_millis(80);

/// Events delivered to the orchestration loop
#[derive(Debug)]
pub enum Event {
    /// Periodic animation refresh; never changes logical state
    Tick,
    /// The in-flight executor call finished
    Outcome(UnitOutcome),
    /// User-requested abort
    Interrupt,
}

/// Commands emitted by a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the executor for the given unit. At most one dispatch is
    /// outstanding at any time.
    Dispatch(BuildUnit),
    /// Repaint the progress view
    Render,
    /// Exit the event loop
    Finish,
}

/// State of one orchestration run
///
/// Invariants: `results.len() == cursor` at every observation point, and
/// `done` never reverts to false. On normal completion
/// `cursor == queue.len()`; after an interrupt `done` is forced true with
/// the cursor frozen short of the queue length.
#[derive(Debug, Clone)]
pub struct OrchestrationState {
    queue: Vec<BuildUnit>,
    cursor: usize,
    results: Vec<UnitOutcome>,
    done: bool,
    output_dir: PathBuf,
}

impl OrchestrationState {
    /// Construct the state for a satellite queue
    ///
    /// An empty queue starts out done; no executor call is ever issued.
    pub fn new(queue: Vec<BuildUnit>, output_dir: PathBuf) -> Self {
        let done = queue.is_empty();
        Self {
            queue,
            cursor: 0,
            results: Vec::new(),
            done,
            output_dir,
        }
    }

    /// The satellite queue, in dispatch order
    pub fn queue(&self) -> &[BuildUnit] {
        &self.queue
    }

    /// Outcomes recorded so far, in queue order
    pub fn results(&self) -> &[UnitOutcome] {
        &self.results
    }

    /// Index of the unit currently in flight (or one past the end)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the run has finished
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Whether the run was cut short by an interrupt
    pub fn was_interrupted(&self) -> bool {
        self.done && self.cursor < self.queue.len()
    }

    /// Output directory shown in the final report
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Commands to kick off the run
    pub fn start(&self) -> Vec<Command> {
        if self.done {
            vec![Command::Finish]
        } else {
            vec![Command::Render, Command::Dispatch(self.queue[0].clone())]
        }
    }

    /// Apply one event and return the commands it produces
    pub fn apply(&mut self, event: Event) -> Vec<Command> {
        let commands = match event {
            Event::Tick => {
                if self.done {
                    vec![]
                } else {
                    vec![Command::Render]
                }
            }
            Event::Outcome(outcome) => {
                if self.done {
                    // An in-flight unit finishing after an interrupt is
                    // dropped; the report covers only units that completed
                    // before the abort.
                    tracing::debug!("dropping late outcome for {}", outcome.unit.name());
                    return vec![];
                }
                self.results.push(outcome);
                self.cursor += 1;
                if self.cursor == self.queue.len() {
                    self.done = true;
                    vec![Command::Render, Command::Finish]
                } else {
                    vec![
                        Command::Render,
                        Command::Dispatch(self.queue[self.cursor].clone()),
                    ]
                }
            }
            Event::Interrupt => {
                tracing::info!("interrupted, stopping after {} units", self.cursor);
                self.done = true;
                vec![Command::Finish]
            }
        };
        debug_assert_eq!(self.results.len(), self.cursor);
        commands
    }
}

/// Run the orchestration loop to completion
///
/// Wires the tick timer, the ctrl-c handler, and executor completions into
/// one inbox and drains it until a transition emits `Finish`. Returns the
/// final state; the caller inspects it for interruption and failures.
pub async fn run<W: Write>(
    state: OrchestrationState,
    executor: Executor,
    renderer: &mut LiveRenderer<W>,
) -> Result<OrchestrationState, OrbitError> {
    let (tx, rx) = mpsc::channel::<Event>(16);

    let tick_tx = tx.clone();
    let ticker = tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_PERIOD);
        loop {
            interval.tick().await;
            if tick_tx.send(Event::Tick).await.is_err() {
                break;
            }
        }
    });

    let interrupt_tx = tx.clone();
    let interrupts = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = interrupt_tx.send(Event::Interrupt).await;
        }
    });

    let result = drive(state, executor, renderer, tx, rx).await;

    ticker.abort();
    interrupts.abort();
    result
}

/// Event loop body, separated from signal/timer wiring for tests
async fn drive<W: Write>(
    mut state: OrchestrationState,
    executor: Executor,
    renderer: &mut LiveRenderer<W>,
    tx: mpsc::Sender<Event>,
    mut rx: mpsc::Receiver<Event>,
) -> Result<OrchestrationState, OrbitError> {
    let mut commands = state.start();
    'run: loop {
        for command in commands {
            match command {
                Command::Dispatch(unit) => {
                    let outcome_tx = tx.clone();
                    let executor = executor.clone();
                    tokio::spawn(async move {
                        let outcome = executor.execute(unit).await;
                        let _ = outcome_tx.send(Event::Outcome(outcome)).await;
                    });
                }
                Command::Render => renderer.render(&state)?,
                Command::Finish => break 'run,
            }
        }
        let Some(event) = rx.recv().await else {
            break;
        };
        commands = state.apply(event);
    }
    renderer.finish(&state)?;
    Ok(state)
}
