//! Seed command implementation
//!
//! Loads (or creates) the store and seeds the demonstration records.

use super::{load_command_config, load_store, save_store};
use clap::Args;

/// Arguments for the seed command
#[derive(Args, Debug)]
pub struct SeedArgs {}

impl SeedArgs {
    /// Execute the seed command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_command_config(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let mut store = load_store(&config).await?;
        if !store.is_empty() {
            println!("ℹ️  Store already has records, nothing seeded");
            return Ok(0);
        }

        store.seed_demo_data()?;
        save_store(&config, &store).await?;

        println!("✅ Demonstration data seeded");
        println!("   Patients:      {}", store.patients().len());
        println!("   Professionals: {}", store.professionals().len());
        println!("   Beds:          {}", store.beds().len());
        Ok(0)
    }
}
