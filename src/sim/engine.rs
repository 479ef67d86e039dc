//! Round engine: owns the bubble set, the countdown, and the score.
//!
//! The host drives it with `tick()` once per second and `pop_bubble()` on
//! taps. Calls that arrive in the wrong phase are ignored rather than
//! reported, since taps racing the end of a round are normal.

use std::collections::VecDeque;

use rand::Rng;
use rand_pcg::Pcg32;

use super::palette::{COLOR_TABLE, random_entry};
use super::placement::find_free_position;
use super::state::{
    Bubble, BubbleColor, BubbleId, Playfield, RngState, RoundConfig, RoundEvent, RoundPhase,
};
use crate::consts::*;
use crate::persistence::ScoreStore;

#[derive(Debug, Clone)]
pub struct RoundEngine {
    /// Seed the RNG was created from (for replays)
    rng_state: RngState,
    rng: Pcg32,
    phase: RoundPhase,
    config: RoundConfig,
    /// Active bubbles in spawn order
    bubbles: Vec<Bubble>,
    score: u64,
    seconds_remaining: u32,
    last_popped_color: Option<BubbleColor>,
    /// Consecutive same-color pops, 1 after any non-bonus pop
    streak: u32,
    /// Best stored score, read at round start
    high_score: u64,
    /// Undrained change notifications, oldest first
    events: VecDeque<RoundEvent>,
    next_id: u32,
}

impl RoundEngine {
    /// Create an idle engine with a deterministic RNG
    pub fn new(seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        Self {
            rng: rng_state.to_rng(),
            rng_state,
            phase: RoundPhase::NotStarted,
            config: RoundConfig::new(Playfield::new(0.0, 0.0), 0, 0),
            bubbles: Vec::new(),
            score: 0,
            seconds_remaining: 0,
            last_popped_color: None,
            streak: 1,
            high_score: 0,
            events: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Create an idle engine seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Lay out a fresh round and enter `PreRound`. Replaces any prior round.
    pub fn configure(&mut self, config: RoundConfig) {
        // Undrained events belong to the previous round
        self.events.clear();
        self.config = config;
        self.score = 0;
        self.streak = 1;
        self.last_popped_color = None;
        self.seconds_remaining = config.duration_secs;
        self.bubbles.clear();
        self.set_phase(RoundPhase::PreRound);
        self.spawn_initial_bubbles();

        log::info!(
            "Round configured: {}x{} field, max {} bubbles, {}s, {} spawned",
            config.playfield.width,
            config.playfield.height,
            config.max_bubbles,
            config.duration_secs,
            self.bubbles.len()
        );
    }

    fn spawn_initial_bubbles(&mut self) {
        if self.config.max_bubbles == 0 {
            return;
        }
        let count = self.rng.random_range(1..=self.config.max_bubbles);
        for _ in 0..count {
            self.spawn_bubble();
        }
    }

    /// Start the clock. Only valid from `PreRound`.
    pub fn start<S: ScoreStore + ?Sized>(&mut self, store: &S) {
        if self.phase != RoundPhase::PreRound {
            log::trace!("start() ignored in {:?}", self.phase);
            return;
        }
        self.high_score = store.max_score();
        self.set_phase(RoundPhase::Active);
        log::info!("Round started (high score {})", self.high_score);
    }

    /// Configure and go straight to `Active`, skipping the pre-round countdown
    pub fn reset<S: ScoreStore + ?Sized>(&mut self, config: RoundConfig, store: &S) {
        self.configure(config);
        self.high_score = store.max_score();
        self.set_phase(RoundPhase::Active);
        log::info!("Round restarted (high score {})", self.high_score);
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) {
        if self.phase != RoundPhase::Active {
            return;
        }
        if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
            self.push_event(RoundEvent::TimeTick {
                remaining: self.seconds_remaining,
            });
        }
        if self.seconds_remaining == 0 {
            self.finish();
            log::info!("Time up, final score {}", self.score);
        }
    }

    /// Pop a bubble and score it. Returns the points awarded, or `None` if
    /// the round isn't active or the bubble no longer exists.
    pub fn pop_bubble(&mut self, id: BubbleId) -> Option<u32> {
        if self.phase != RoundPhase::Active {
            log::trace!("pop of {:?} ignored in {:?}", id, self.phase);
            return None;
        }
        let index = self.bubbles.iter().position(|b| b.id == id)?;
        let bubble = self.bubbles.remove(index);

        let bonus = self.last_popped_color == Some(bubble.color);
        let multiplier = if bonus { SAME_COLOR_BONUS } else { 1.0 };
        let points = (f64::from(bubble.points) * multiplier).round() as u32;

        self.score += u64::from(points);
        self.last_popped_color = Some(bubble.color);
        self.streak = if bonus { self.streak + 1 } else { 1 };
        self.push_event(RoundEvent::BubblePopped {
            id,
            color: bubble.color,
            points,
            bonus,
        });

        let replace = self.rng.random_range(1..=100) <= REPLACEMENT_CHANCE_PERCENT;
        if replace || self.bubbles.is_empty() {
            self.spawn_bubble();
        }

        Some(points)
    }

    /// Try to add one bubble. Returns false when at capacity or when no free
    /// spot was found within the attempt budget.
    pub fn spawn_bubble(&mut self) -> bool {
        if self.bubbles.len() >= self.config.max_bubbles {
            return false;
        }

        let entry = random_entry(&COLOR_TABLE, &mut self.rng);
        let Some(pos) = find_free_position(
            &mut self.rng,
            self.config.playfield,
            BUBBLE_DIAMETER,
            &self.bubbles,
            MAX_SPAWN_ATTEMPTS,
        ) else {
            log::debug!(
                "No free spot after {} attempts ({} bubbles on field)",
                MAX_SPAWN_ATTEMPTS,
                self.bubbles.len()
            );
            self.push_event(RoundEvent::SpawnFailed);
            return false;
        };

        let id = self.next_bubble_id();
        self.bubbles.push(Bubble::new(id, pos, entry.color, entry.points));
        self.push_event(RoundEvent::BubbleSpawned { id });
        true
    }

    /// End the round now, from any phase
    pub fn end_round(&mut self) {
        self.finish();
        log::info!("Round ended, final score {}", self.score);
    }

    fn finish(&mut self) {
        self.set_phase(RoundPhase::Finished);
        self.bubbles.clear();
    }

    fn set_phase(&mut self, to: RoundPhase) {
        let from = self.phase;
        if from != to {
            self.phase = to;
            self.push_event(RoundEvent::PhaseChanged { from, to });
        }
    }

    /// Queue an event, dropping the oldest once the queue is full
    fn push_event(&mut self, event: RoundEvent) {
        if self.events.len() >= MAX_QUEUED_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn next_bubble_id(&mut self) -> BubbleId {
        let id = BubbleId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        self.events.drain(..).collect()
    }

    /// Active bubbles in spawn order
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// Look up an active bubble
    pub fn bubble(&self, id: BubbleId) -> Option<&Bubble> {
        self.bubbles.iter().find(|b| b.id == id)
    }

    /// Score so far this round
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Seconds left on the round clock
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Current round phase
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// True while the clock is running
    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }

    /// True once the round is over
    pub fn is_finished(&self) -> bool {
        self.phase == RoundPhase::Finished
    }

    /// Best stored score, as read at round start
    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Consecutive same-color pops
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Color of the most recent pop
    pub fn last_popped_color(&self) -> Option<BubbleColor> {
        self.last_popped_color
    }

    /// Bubble cap for this round
    pub fn max_bubbles(&self) -> usize {
        self.config.max_bubbles
    }

    /// Playfield the round was configured with
    pub fn playfield(&self) -> Playfield {
        self.config.playfield
    }

    /// Seed the engine RNG was created from
    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }
}
