//! Sandbox Engine - grows a few random trees and logs them.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sandbox_domain::Dimension;
use sandbox_engine::infrastructure::config::RandomConfig;
use sandbox_engine::App;

/// Trees grown per run.
const TREE_COUNT: usize = 5;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sandbox_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sandbox Engine");

    let config = RandomConfig::from_env()?;
    let app = App::new(&config);
    let random = &app.use_cases.randomness;

    let canvas = Dimension::new(800, 600)?;
    for index in 0..TREE_COUNT {
        let tree = random.next_tree_within(canvas)?;
        tracing::info!(
            index,
            leaf_color = %tree.leaf_color(),
            translucent = !tree.leaf_color().is_opaque(),
            size = %tree.dimension(),
            "Grew tree"
        );
    }

    tracing::info!(
        texture_side = random.next_power_of_two(),
        backdrop = %random.next_opaque_color(),
        "Picked scene backdrop"
    );

    Ok(())
}
