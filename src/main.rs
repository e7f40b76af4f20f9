#[macro_use]
extern crate log;

use modbam2bed::cli;

fn main() -> anyhow::Result<()> {
    let cfg = cli::handle_cli()?;
    info!(
        "Summarising {} modifications from {} against {}",
        cfg.mod_base().name(),
        cfg.alignment_path(),
        cfg.reference_path()
    );
    Ok(())
}
