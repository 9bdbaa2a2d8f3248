use anyhow::Result;
use clap::Args;
use colored::Colorize;
use ff_lookup_core::{validate, Severity};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Candidate UID
    pub uid: String,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    let validation = validate(&args.uid);
    let message = validation
        .message()
        .unwrap_or_else(|| "No UID given".to_string());

    match validation.severity() {
        Severity::Success => {
            println!("{} {}: {}", "✓".green(), args.uid.bold(), message);
            Ok(())
        }
        Severity::Warning => anyhow::bail!("{} ({})", message, "warning".yellow()),
        Severity::Error | Severity::None => anyhow::bail!("{message}"),
    }
}
