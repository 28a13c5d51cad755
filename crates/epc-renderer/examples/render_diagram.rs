//! Render a sample EPC diagram from the bundled assets.
//!
//! Usage: cargo run -p epc-renderer --example render_diagram [FORMAT] [ASSETS_DIR]
//!
//! Writes `epc_diagram.<ext>` in the current directory.
//!
//! Set RUST_LOG=debug to see pointer placement.

use epc_renderer::{
    AssetConfig, DiagramComposer, EncodeOptions, FileBackend, OutputFormat, RatingReport,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let format: OutputFormat = match args.next() {
        Some(name) => name.parse()?,
        None => OutputFormat::Png,
    };
    let output = format!("epc_diagram.{}", format.extension());

    let mut config = AssetConfig::default();
    if let Some(dir) = args.next() {
        config = config.with_assets_dir(dir);
    }

    let report = RatingReport::new()
        .assessment("epc")?
        .with_address("1 Test Address, Success street.")
        .with_reference("ABC123")
        .with_current_energy_efficiency(40)
        .with_potential_energy_efficiency(50)
        .with_current_environmental_impact(60)
        .with_potential_environmental_impact(70);

    let composer = DiagramComposer::new(FileBackend::new(config)?);
    composer.save(&report, &output, &EncodeOptions::new(format, 90))?;

    println!("Saved to {}", output);
    Ok(())
}
