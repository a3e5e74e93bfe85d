#![warn(clippy::all)]

use pondlife::{
    generation_channel, get_config, patterns, DefaultProcessor, Dimensions, Life, Standard,
    Topology,
};

const GENERATIONS: u64 = 30;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let life = Life::new(
        Dimensions::new(16, 16),
        Topology::All,
        patterns::pulsar,
        Standard,
        DefaultProcessor::default(),
    )?;
    println!("{}", life);

    let (tx, mut rx) = generation_channel();
    let handle = life.start(Some(tx), Some(get_config().stream_interval));
    while let Some(generation) = rx.recv().await {
        println!(
            "generation {:>3}: {} living",
            generation.num,
            generation.population()
        );
        if generation.num >= GENERATIONS {
            break;
        }
    }
    let processed = handle.join().await?;

    // the stream may have run one generation past the last one printed
    let replayed = life.generation_at(GENERATIONS)?;
    println!(
        "replayed generation {}: {} living ({} processed live)",
        replayed.num,
        replayed.population(),
        processed
    );
    println!("{}", life.statistics());
    Ok(())
}
