use battleship_client::{auto_play, AutoPlayConfig, LocalSession, PlayOutcome};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u32 = args[2].parse()?;

    let mut session = LocalSession::new(SmallRng::seed_from_u64(seed), None);
    let mut shots = Vec::with_capacity(games as usize);
    let mut won = 0u32;
    let mut other = 0u32;

    for _ in 0..games {
        let report = auto_play(&mut session, AutoPlayConfig::default()).await?;
        match report.outcome {
            PlayOutcome::Won => won += 1,
            _ => other += 1,
        }
        shots.push(report.shots);
    }

    let total: u64 = shots.iter().map(|&s| s as u64).sum();
    let mean = if games == 0 {
        0.0
    } else {
        total as f64 / games as f64
    };
    let result = json!({
        "seed": seed,
        "games": games,
        "won": won,
        "not_won": other,
        "shots": {
            "min": shots.iter().min(),
            "max": shots.iter().max(),
            "mean": mean,
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
