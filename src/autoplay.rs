//! Drives a `HuntTarget` strategy against a `GameSession` until the game ends.

use std::fmt;

use crate::engine::{Decision, GameResult, HuntTarget, Mode};
use crate::session::{GameSession, SessionError, SessionId};

/// How a game driven by this crate ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Won,
    Lost,
    /// Every cell is known and the opponent never declared the game over.
    Stuck,
    /// `max_attempts` reached first.
    Abandoned,
    /// Manual input ended before the game did.
    Quit,
}

impl From<GameResult> for PlayOutcome {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::Won => PlayOutcome::Won,
            GameResult::Lost => PlayOutcome::Lost,
        }
    }
}

impl fmt::Display for PlayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayOutcome::Won => "won",
            PlayOutcome::Lost => "lost",
            PlayOutcome::Stuck => "stuck",
            PlayOutcome::Abandoned => "abandoned",
            PlayOutcome::Quit => "quit",
        };
        f.write_str(s)
    }
}

/// Summary of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub outcome: PlayOutcome,
    /// Move attempts that reached the opponent.
    pub shots: u32,
    /// Move attempts that came back as `TransportFailure`.
    pub failures: u32,
    /// Queued cells dropped because they were already known.
    pub discarded: u32,
    /// Last score the opponent reported.
    pub score: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AutoPlayConfig {
    /// Stop after this many move attempts, successful or not. `None` plays
    /// until the game ends or no Unknown cell is left.
    pub max_attempts: Option<u32>,
}

/// The auto-play loop for one game.
pub struct AutoPlayer {
    strategy: HuntTarget,
    config: AutoPlayConfig,
}

impl AutoPlayer {
    /// Player with a fresh strategy.
    pub fn new(config: AutoPlayConfig) -> Self {
        Self::with_strategy(HuntTarget::new(), config)
    }

    /// Start from an existing strategy state.
    pub fn with_strategy(strategy: HuntTarget, config: AutoPlayConfig) -> Self {
        Self { strategy, config }
    }

    /// Strategy state, including the board as the player sees it.
    pub fn strategy(&self) -> &HuntTarget {
        &self.strategy
    }

    /// Play game `id` on `session` to the end.
    pub async fn play<S: GameSession + ?Sized>(&mut self, session: &mut S, id: &SessionId) -> GameReport {
        let mut report = GameReport {
            outcome: PlayOutcome::Stuck,
            shots: 0,
            failures: 0,
            discarded: 0,
            score: None,
        };

        loop {
            if self
                .config
                .max_attempts
                .is_some_and(|max| report.shots + report.failures >= max)
            {
                log::warn!("giving up after {} attempts", report.shots + report.failures);
                report.outcome = PlayOutcome::Abandoned;
                break;
            }

            let mode = self.strategy.mode();
            let target = match self.strategy.decide() {
                Decision::Fire(at) => at,
                Decision::Discard(_) => {
                    report.discarded += 1;
                    continue;
                }
                Decision::Stuck => {
                    log::warn!("no unknown cell left, stopping");
                    report.outcome = PlayOutcome::Stuck;
                    break;
                }
            };

            let result = session.execute_move(id, target).await;
            let Some(shot) = result.shot() else {
                log::debug!("{} -> transport failure", target);
                report.failures += 1;
                continue;
            };
            report.shots += 1;
            if let Some(score) = result.score() {
                report.score = Some(score);
            }
            log::debug!(
                "{} {} -> {:?}",
                if mode == Mode::Hunting { "hunt" } else { "target" },
                target,
                shot
            );

            if let Some(end) = self.strategy.observe(target, &result) {
                report.outcome = end.into();
                break;
            }
        }

        log::info!(
            "game {} {} after {} shots ({} failed attempts)",
            id,
            report.outcome,
            report.shots,
            report.failures
        );
        report
    }
}

/// Start a new game on `session` and auto-play it with a fresh strategy.
pub async fn auto_play<S: GameSession + ?Sized>(
    session: &mut S,
    config: AutoPlayConfig,
) -> Result<GameReport, SessionError> {
    let id = session.start_new_game().await?;
    log::info!("auto-play engaged: hunt/target strategy, game {}", id);
    Ok(AutoPlayer::new(config).play(session, &id).await)
}
