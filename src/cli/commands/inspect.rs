use anyhow::Result;
use clap::Args;
use colored::*;
use serde::Serialize;

use super::GuardInputs;
use crate::core::validator::Verdict;

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub inputs: GuardInputs,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct GuardReport {
    host_name: String,
    required_version: String,
    current_version: String,
    override_env: String,
    override_present: bool,
    verdict: String,
}

/// Report the guard inputs and verdict without enforcing anything.
///
/// An incompatible verdict still exits 0 here; only `check` applies the
/// fatal path.
pub fn run(args: InspectArgs) -> Result<()> {
    let resolved = args.inputs.resolve()?;

    let verdict = resolved
        .guard
        .evaluate(&resolved.current, resolved.override_present)?;

    let report = GuardReport {
        host_name: resolved.guard.host_name().to_string(),
        required_version: resolved.guard.required().to_string(),
        current_version: resolved.current.clone(),
        override_env: resolved.guard.override_env().to_string(),
        override_present: resolved.override_present,
        verdict: verdict.name().to_string(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let verdict_label = match &verdict {
        Verdict::Pass => report.verdict.green(),
        Verdict::Warn { .. } => report.verdict.yellow(),
        Verdict::Fatal { .. } => report.verdict.red(),
    };

    println!("{}", "Node.js runtime guard".bold());
    println!("  Host application: {}", report.host_name);
    println!("  Required version: {}", report.required_version);
    println!("  Current version:  {}", report.current_version);
    println!(
        "  Override ({}):    {}",
        report.override_env,
        if report.override_present {
            "set"
        } else {
            "not set"
        }
    );
    println!("  Verdict:          {}", verdict_label);

    Ok(())
}
