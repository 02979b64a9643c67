use anyhow::Result;
use clap::Args;

use super::GuardInputs;
use crate::core::validator::enforce;

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub inputs: GuardInputs,
}

/// Run the startup check once and hand the exit status back to `main`.
///
/// Any incompatibility message is written to the real error stream here;
/// on a fatal verdict the caller terminates with status 1.
pub fn run(args: CheckArgs) -> Result<i32> {
    let resolved = args.inputs.resolve()?;

    let verdict = resolved
        .guard
        .evaluate(&resolved.current, resolved.override_present)?;

    let exit_code = enforce(&verdict, &mut std::io::stderr())?;
    Ok(exit_code)
}
