use anyhow::Context;
use price_tally::utils::logger;
use price_tally::{Item, StdoutSink, TallyReport};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger();

    tracing::info!("Starting price-tally");

    let items = vec![
        Item::new("item1", 10),
        Item::new("item2", 20),
        Item::new("item3", 30),
    ];

    let mut report = TallyReport::new(StdoutSink);
    let total = report
        .run(&items)
        .context("price aggregation failed")?;

    tracing::info!("Aggregated {} items, total {}", items.len(), total);

    Ok(())
}
