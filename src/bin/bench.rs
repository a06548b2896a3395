use std::path::Path;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use refixture::timing::{run_large_input, run_suite, FIXTURE_DIR, LARGE_INPUT_PATH};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Starting tests.\n");

    let suite = run_suite(Path::new(FIXTURE_DIR))?;
    println!("Fixture files finished in {} μs", suite.as_micros());

    let large = run_large_input(Path::new(LARGE_INPUT_PATH))?;
    println!("Large input finished in {} μs", large.as_micros());

    let total = suite + large;
    println!("Finished in {} μs!\n", total.as_micros());

    Ok(())
}
