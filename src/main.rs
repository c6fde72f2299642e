use std::time::Instant;
use string_evolution::{EvolutionConfig, SeededRandom, algorithms::string_ga::StringGA};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let start = Instant::now();

    let rng = SeededRandom::from_time();
    log::info!("Seeded from clock: {}", rng.seed());

    let ga = StringGA::new(EvolutionConfig::default(), rng)?;
    let best = ga.run();

    println!("{} {} {:?}", best.genome, best.fitness, start.elapsed());
    Ok(())
}
