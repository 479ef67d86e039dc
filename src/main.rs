//! Bubble Pop entry point
//!
//! Native builds run one headless round with a scripted player: it taps a
//! few bubbles each second, preferring the last popped color for the bonus,
//! then records the score and prints the leaderboard.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bubble_pop::consts::PRE_ROUND_SECS;
    use bubble_pop::persistence::{JsonFileScoreStore, SCORES_KEY};
    use bubble_pop::sim::{Playfield, PreRoundCountdown, RoundEngine, RoundEvent};
    use bubble_pop::{HighScores, ScoreStore, Settings};

    /// Taps per simulated second
    const TAPS_PER_SEC: usize = 2;

    env_logger::init();
    log::info!("Bubble Pop (native) starting...");

    let settings = Settings::load_from(&Settings::default_path());
    let player = if settings.player_name.is_empty() {
        "Player".to_string()
    } else {
        settings.player_name.clone()
    };
    let mut store = JsonFileScoreStore::open(format!("{SCORES_KEY}.json"));

    let mut engine = RoundEngine::from_entropy();
    log::info!("Engine seeded with {}", engine.seed());
    engine.configure(settings.round_config(Playfield::new(390.0, 844.0)));

    let mut countdown = PreRoundCountdown::new(PRE_ROUND_SECS);
    while !countdown.is_done() {
        println!("{}...", countdown.remaining());
        if countdown.tick() {
            engine.start(&store);
        }
    }
    // Zero-length countdown never fires
    engine.start(&store);

    while engine.is_active() {
        for _ in 0..TAPS_PER_SEC {
            let target = engine
                .bubbles()
                .iter()
                .find(|b| Some(b.color) == engine.last_popped_color())
                .or_else(|| engine.bubbles().first())
                .map(|b| b.id);
            if let Some(id) = target {
                engine.pop_bubble(id);
            }
        }
        engine.tick();

        for event in engine.drain_events() {
            match event {
                RoundEvent::BubblePopped {
                    color,
                    points,
                    bonus,
                    ..
                } => {
                    let tag = if bonus { " (bonus!)" } else { "" };
                    println!("  popped {} +{}{}", color.as_str(), points, tag);
                }
                RoundEvent::TimeTick { remaining } => {
                    println!(
                        "{:>3}s  score {:>4}  bubbles {:>2}  streak {}",
                        remaining,
                        engine.score(),
                        engine.bubbles().len(),
                        engine.streak()
                    );
                }
                RoundEvent::SpawnFailed => log::debug!("spawn failed"),
                _ => {}
            }
        }
    }

    let score = engine.score();
    println!("\nFinal score: {} (previous best {})", score, engine.high_score());
    store.append_score(&player, score);
    log::info!("Score recorded in {}", store.path().display());

    let scores = HighScores {
        entries: store.list_scores(),
    };
    println!("\nHigh scores:");
    for (i, record) in scores.leaderboard().iter().enumerate() {
        println!("{:>2}. {:<16} {:>5}", i + 1, record.player_name, record.score);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosted by the page; nothing to run here
}
