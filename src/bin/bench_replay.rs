use pondlife::*;

fn main() -> anyhow::Result<()> {
    let timer = std::time::Instant::now();
    let life = Life::new(
        Dimensions::new(256, 256),
        Topology::All,
        |dims| patterns::random(dims, Some(0.3), Some(42)),
        Standard,
        Simultaneous,
    )?;
    println!("Time on building field: {:?}", timer.elapsed());

    let timer = std::time::Instant::now();
    for _ in 0..100 {
        life.process()?;
    }
    println!("Time on 100 live generations: {:?}", timer.elapsed());

    let timer = std::time::Instant::now();
    let replayed = life.generation_at(100)?;
    println!("Time on replaying 100 generations: {:?}", timer.elapsed());
    println!("{}", life.statistics());

    let mut live = life.generation_at(life.generation())?.living;
    live.sort();
    let mut replayed = replayed.living;
    replayed.sort();
    assert_eq!(live, replayed, "replay diverged from the live simulation");
    Ok(())
}
