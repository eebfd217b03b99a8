use anyhow::Result;
use is_terminal::IsTerminal as _;
use linediff::calculate::calculate;
use linediff::operands::contents_of;
use std::io;
fn main() -> Result<()> {
    let args = linediff::args::parsed();

    // Read both operands up front: a missing file must not leave a partial
    // report on stdout.
    let single = contents_of(&args.single)?;
    let multi = contents_of(&args.multi)?;

    if io::stdout().is_terminal() {
        calculate(&single, &multi, io::stdout().lock())?;
    } else {
        calculate(&single, &multi, io::BufWriter::new(io::stdout().lock()))?;
    };
    Ok(())
}
