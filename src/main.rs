//! `phonemask`: format phone numbers and replay edit scripts from the
//! command line.

mod script;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mask_core::config::resolve_plan;
use mask_core::{NumberingPlan, PhoneMask};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser, Debug)]
#[command(name = "phonemask", version, about = "Phone-number input masking")]
struct Cli {
    /// Preset name (plus7, trunk8) or path to a plan TOML file
    #[arg(long, global = true)]
    plan: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the masked form of each input
    Format {
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Run an edit script and print every intermediate state
    Replay { script: PathBuf },
}

fn plan_from(name: Option<&str>) -> Result<NumberingPlan> {
    match name {
        Some(name) => resolve_plan(name).with_context(|| format!("cannot use plan {name:?}")),
        None => Ok(NumberingPlan::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Format { inputs } => {
            let mask = PhoneMask::new(plan_from(cli.plan.as_deref())?);
            for input in &inputs {
                println!("{}", mask.format(input));
            }
        }
        Command::Replay { script: path } => {
            let script = script::load(&path)?;
            let plan = plan_from(cli.plan.as_deref().or(script.plan.as_deref()))?;
            log::debug!("replaying {} step(s) under {:?}", script.steps.len(), plan.template());
            for line in script::replay(&PhoneMask::new(plan), &script) {
                println!("{line}");
            }
        }
    }
    Ok(())
}
