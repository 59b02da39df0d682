use calorie_cart::config::parse_selection_spec;
use calorie_cart::utils::{logger, validation::Validate};
use calorie_cart::{CliConfig, HttpCatalogStore, HttpManifestEncoder, OrderFlow};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting calorie-cart CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = HttpCatalogStore::new(config.catalog_endpoint.clone());
    let encoder = HttpManifestEncoder::new(config.encoder_endpoint.clone());
    let mut flow = OrderFlow::new(store, encoder);

    let items = match flow.browse(config.query.as_deref()).await {
        Ok(items) => items,
        Err(e) => {
            tracing::error!("Catalog request failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    if items.is_empty() {
        println!("No food items found.");
        return Ok(());
    }

    if config.select.is_empty() {
        // Browse-only mode: list what the catalog returned.
        for item in &items {
            println!("{:<30} {:>6} kcal  [{}]", item.name, item.calories, item.category);
        }
        return Ok(());
    }

    for spec in &config.select {
        // Already validated, parse cannot fail here.
        let (name, quantity) = parse_selection_spec(spec)?;
        match items.iter().find(|i| i.name.eq_ignore_ascii_case(&name)) {
            Some(item) => {
                flow.selection_mut().add(item);
                flow.selection_mut()
                    .set_quantity(&item.id, i64::from(quantity) - 1);
            }
            None => {
                tracing::warn!("No catalog item named '{}', skipping", name);
                eprintln!("⚠️  No catalog item named '{}', skipping", name);
            }
        }
    }

    if flow.selection().is_empty() {
        eprintln!("❌ Nothing selected, not generating a QR code");
        std::process::exit(1);
    }

    for entry in flow.selection().snapshot() {
        println!(
            "{:<30} x{:<4} {:>6} kcal",
            entry.snapshot.name,
            entry.quantity,
            u64::from(entry.snapshot.calories) * u64::from(entry.quantity)
        );
    }

    match flow.checkout().await {
        Ok(token) => {
            tracing::info!("✅ Order manifest encoded successfully");
            println!("✅ QR token:");
            println!("{}", token);
        }
        Err(e) => {
            tracing::error!("Checkout failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    }

    Ok(())
}
