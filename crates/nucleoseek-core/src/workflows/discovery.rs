use crate::core::catalog::ElementDef;
use crate::core::models::verdict::Verdict;
use crate::engine::config::{ConfigError, EngineParams};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::walker::InnerEngine;
use crate::judge::Judge;
use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{info, instrument};

/// How many of the most recent verdicts the session keeps around for
/// presentation. Older entries fall off the back.
const HISTORY_CAP: usize = 120;

/// Aggregate outcome of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveryReport {
    /// Ticks executed in this run.
    pub ticks: u64,
    /// How often the engine claimed it had found something stable.
    pub claims: u64,
    /// How many of those claims the judge certified correct.
    pub correct_claims: u64,
    /// Every element discovered so far, ascending by atomic number.
    pub discovered: Vec<&'static ElementDef>,
}

/// A complete simulation: one inner engine wired to one judge.
///
/// The session is the orchestrator's single entry point. Each [`tick`]
/// performs exactly one engine step and one judgement, then closes the
/// feedback loop by marking certified configurations solved so the walker
/// stops re-submitting them. Everything is synchronous; a manual "step once"
/// and a timer-driven run both funnel through the same `tick`.
///
/// [`tick`]: Self::tick
#[derive(Debug)]
pub struct DiscoverySession<R: Rng = StdRng> {
    engine: InnerEngine<R>,
    judge: Judge,
    max_z: u32,
    history: VecDeque<Verdict>,
    ticks: u64,
    claims: u64,
    correct_claims: u64,
}

impl DiscoverySession<StdRng> {
    /// Creates a session with an entropy-derived seed. `max_z` is the proton
    /// ceiling handed to every engine call, conventionally the catalog size.
    pub fn new(params: EngineParams, max_z: u32) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self::assemble(InnerEngine::new(params), max_z))
    }

    /// Creates a fully deterministic session for replayable runs.
    pub fn with_seed(params: EngineParams, max_z: u32, seed: u64) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self::assemble(InnerEngine::with_seed(params, seed), max_z))
    }
}

impl<R: Rng> DiscoverySession<R> {
    /// Creates a session drawing from the given random source.
    pub fn with_rng(params: EngineParams, max_z: u32, rng: R) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self::assemble(InnerEngine::with_rng(params, rng), max_z))
    }

    fn assemble(mut engine: InnerEngine<R>, max_z: u32) -> Self {
        engine.reset(max_z);
        Self {
            engine,
            judge: Judge::new(),
            max_z,
            history: VecDeque::new(),
            ticks: 0,
            claims: 0,
            correct_claims: 0,
        }
    }

    /// Executes one atomic tick: step, judge, feed back, record.
    pub fn tick(&mut self) -> Verdict {
        let outcome = self.engine.step(self.max_z);
        let verdict = self.judge.evaluate(outcome.nucleus, outcome.claimed_stable);
        if verdict.is_correct {
            self.engine.mark_solved(verdict.nucleus);
        }

        self.ticks += 1;
        if verdict.engine_claimed_stable {
            self.claims += 1;
        }
        if verdict.is_correct {
            self.correct_claims += 1;
        }

        self.history.push_front(verdict);
        self.history.truncate(HISTORY_CAP);
        verdict
    }

    /// Runs `ticks` consecutive ticks, reporting progress and each fresh
    /// discovery along the way.
    #[instrument(skip_all, name = "discovery_run", fields(ticks))]
    pub fn run(&mut self, ticks: u64, reporter: &ProgressReporter) -> DiscoveryReport {
        reporter.report(Progress::RunStart { total_ticks: ticks });
        for _ in 0..ticks {
            let known_before = self.judge.discovered_z().len();
            let verdict = self.tick();
            if self.judge.discovered_z().len() > known_before {
                if let Some(element) = verdict.matched_element {
                    reporter.report(Progress::Discovery {
                        atomic_number: element.atomic_number,
                        symbol: element.symbol,
                    });
                }
            }
            reporter.report(Progress::TickFinish);
        }
        reporter.report(Progress::RunFinish);

        let report = self.report();
        info!(
            ticks = report.ticks,
            claims = report.claims,
            correct = report.correct_claims,
            elements = report.discovered.len(),
            "discovery run finished"
        );
        report
    }

    /// A snapshot of the session's counters and discoveries so far.
    pub fn report(&self) -> DiscoveryReport {
        DiscoveryReport {
            ticks: self.ticks,
            claims: self.claims,
            correct_claims: self.correct_claims,
            discovered: self
                .judge
                .discovered_z()
                .iter()
                .filter_map(|&z| crate::core::catalog::lookup(z))
                .collect(),
        }
    }

    /// Restarts the whole simulation: random new walker position, empty
    /// solved set, no discoveries, no history, zeroed counters.
    pub fn reset(&mut self) {
        self.engine.reset(self.max_z);
        self.judge.clear_discoveries();
        self.history.clear();
        self.ticks = 0;
        self.claims = 0;
        self.correct_claims = 0;
    }

    /// The retained verdicts, newest first, capped at 120 entries.
    pub fn history(&self) -> impl Iterator<Item = &Verdict> {
        self.history.iter()
    }

    pub fn judge(&self) -> &Judge {
        &self.judge
    }

    /// How many exact configurations the engine has been told are solved.
    pub fn solved_count(&self) -> usize {
        self.engine.solved_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::nucleus::Nucleus;
    use rand::rngs::mock::StepRng;

    const MAX_Z: u32 = 118;

    fn session(seed: u64) -> DiscoverySession {
        DiscoverySession::with_seed(EngineParams::default(), MAX_Z, seed).unwrap()
    }

    #[test]
    fn construction_rejects_invalid_params() {
        let params = EngineParams {
            valley_move_prob: 2.0,
            ..EngineParams::default()
        };
        assert!(DiscoverySession::with_seed(params, MAX_Z, 0).is_err());
    }

    #[test]
    fn every_correct_claim_is_fed_back_as_solved() {
        let mut session = session(17);
        let mut correct = 0;
        for _ in 0..2000 {
            if session.tick().is_correct {
                correct += 1;
            }
        }
        assert_eq!(session.solved_count(), correct);
        assert_eq!(session.report().correct_claims, correct as u64);
    }

    #[test]
    fn correct_verdicts_always_discover_their_element() {
        let mut session = session(23);
        for _ in 0..2000 {
            let verdict = session.tick();
            if verdict.is_correct {
                assert!(session.judge().discovered_z().contains(&verdict.nucleus.protons));
            }
        }
    }

    #[test]
    fn history_is_newest_first_and_bounded() {
        let mut session = session(5);
        let mut last = None;
        for _ in 0..500 {
            last = Some(session.tick());
        }
        let history: Vec<_> = session.history().copied().collect();
        assert_eq!(history.len(), 120);
        assert_eq!(history.first().copied(), last);
    }

    #[test]
    fn identical_seeds_produce_identical_reports() {
        let mut first = session(4242);
        let mut second = session(4242);
        let reporter = ProgressReporter::new();
        let report_a = first.run(1000, &reporter);
        let report_b = second.run(1000, &reporter);
        assert_eq!(report_a, report_b);
        assert_eq!(report_a.ticks, 1000);
        assert!(report_a.claims >= report_a.correct_claims);
    }

    #[test]
    fn constant_random_source_run_matches_the_recorded_baseline() {
        // A zero-increment StepRng hands the walker the same draw forever,
        // which makes the whole 1000-tick run a fixture independent of any
        // particular seeded generator: the mixture roll is 0.125, so every
        // move is valley-seeking. The walker starts at (Z=15, N=29), rides
        // its believed valley down through the light elements solving as it
        // goes, and parks on the bare proton once everything nearby is
        // solved. Any change to the move mixture, the belief curve, the
        // oracle data or the feedback loop shifts these totals.
        let rng = StepRng::new(0x2000_0000_2000_0000, 0);
        let mut session =
            DiscoverySession::with_rng(EngineParams::default(), MAX_Z, rng).unwrap();
        let report = session.run(1000, &ProgressReporter::new());
        assert_eq!(report.ticks, 1000);
        assert_eq!(report.claims, 34);
        assert_eq!(report.correct_claims, 30);
        assert_eq!(session.solved_count(), 30);
        let discovered: Vec<u32> = report
            .discovered
            .iter()
            .map(|element| element.atomic_number)
            .collect();
        assert_eq!(discovered, (1..=15).collect::<Vec<_>>());
        let newest = session.history().next().copied().unwrap();
        assert_eq!(newest.nucleus, Nucleus::new(1, 0));
        assert!(newest.reality_stable);
        assert!(!newest.engine_claimed_stable);
    }

    #[test]
    fn all_zero_random_source_run_matches_the_recorded_baseline() {
        // All-zero draws always roll below the global-jump threshold, and a
        // zero jump lands on Z=1 with the noise floor clamping N to 0. The
        // bare proton is reality-stable, so hydrogen is discovered on the
        // first tick, but the engine never claims anything (it refuses N=0).
        let rng = StepRng::new(0, 0);
        let mut session =
            DiscoverySession::with_rng(EngineParams::default(), MAX_Z, rng).unwrap();
        let report = session.run(1000, &ProgressReporter::new());
        assert_eq!(report.ticks, 1000);
        assert_eq!(report.claims, 0);
        assert_eq!(report.correct_claims, 0);
        assert_eq!(session.solved_count(), 0);
        let discovered: Vec<u32> = report
            .discovered
            .iter()
            .map(|element| element.atomic_number)
            .collect();
        assert_eq!(discovered, vec![1]);
    }

    #[test]
    fn progress_events_bracket_the_run() {
        use std::sync::Mutex;
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(format!("{event:?}"));
        }));
        let mut session = session(1);
        session.run(50, &reporter);
        drop(reporter);
        let events = events.into_inner().unwrap();
        assert!(events.first().unwrap().contains("RunStart"));
        assert!(events.last().unwrap().contains("RunFinish"));
        assert_eq!(events.iter().filter(|e| e.contains("TickFinish")).count(), 50);
    }

    #[test]
    fn reset_returns_the_session_to_a_blank_slate() {
        let mut session = session(9);
        for _ in 0..300 {
            session.tick();
        }
        session.reset();
        assert_eq!(session.report().ticks, 0);
        assert_eq!(session.report().claims, 0);
        assert!(session.judge().discovered_z().is_empty());
        assert_eq!(session.history().count(), 0);
        assert_eq!(session.solved_count(), 0);
    }
}
