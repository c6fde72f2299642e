use string_evolution::{
    EvolutionConfig, Evolver, SeededRandom, algorithms::string_ga::StringGA,
    operators::fitness::fitness,
};

fn main() -> anyhow::Result<()> {
    let config = EvolutionConfig {
        target: "Sovereign Symbiosis".to_string(),
        population_size: 200,
        generations: 2000,
        ..Default::default()
    };
    let mut ga = StringGA::new(config, SeededRandom::new(42))?;

    for generation in 0..ga.config().generations {
        ga.step();

        if generation % 100 == 0 {
            let best = ga.fittest();
            println!(
                "Gen {}: [{}] (Fitness: {}, mean {:.2})",
                generation,
                best.genome,
                best.fitness,
                ga.mean_fitness()
            );
        }

        if let Some(hit) = ga
            .population()
            .iter()
            .find(|g| fitness(g, ga.target()) == 0)
        {
            println!("Target reached at Gen {}: [{}]", generation, hit);
            break;
        }
    }
    Ok(())
}
