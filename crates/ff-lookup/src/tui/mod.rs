//! Interactive lookup dashboard
//!
//! Architecture:
//! - Main thread: owns all view state, renders and handles input events
//! - Worker thread: runs lookups against the injected `PlayerLookup`
//! - Communication via mpsc channels (request -> worker, response <- worker)
//!
//! Layout:
//! ```text
//! ┌ FF LOOKUP ──┐ Dashboard                                   ● Admin
//! │ Home        │ Free Fire account lookup                      Administrator
//! │▶ UID Lookup │┌Lookups today┐┌Active users┐┌Active keys┐┌Success rate┐
//! │ Accounts    ││ 1,234       ││ 856        ││ 127       ││ 98.5%      │
//! │ Key Panel   │└─────────────┘└────────────┘└───────────┘└────────────┘
//! │ Statistics  │┌ Player lookup ─────────────────┐┌ Recent lookups ────┐
//! │ Security    ││ ▌ 1234567890█                  ││ ProGamer_VN  Lv75  │
//! │ Settings    ││ UID looks valid                │└────────────────────┘
//! │             │└────────────────────────────────┘┌ Quick stats ───────┐
//! │             │ profile │ outfit                  │ ...                │
//! │             │ guild │ pet │ status              └────────────────────┘
//! │ v0.1.0      │ [Enter search] [^u clear] [Tab section] [Esc quit]
//! └─────────────┘
//! ```

mod app;
mod search;
mod ui;

use anyhow::Result;
use clap::Args;
use ff_lookup_core::{Config, MockLookup};
use std::sync::Arc;
use std::time::Duration;

pub use app::AppOptions;

#[derive(Args, Debug, Default)]
pub struct TuiArgs {
    /// Override the simulated lookup delay
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Start with the sidebar hidden
    #[arg(long)]
    pub no_sidebar: bool,
}

pub fn execute(args: TuiArgs, config: &Config) -> Result<()> {
    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.lookup_delay());

    let options = AppOptions {
        reveal_step: config.reveal_step(),
        sidebar_open: config.sidebar && !args.no_sidebar,
        operator: config.operator.clone(),
    };

    log::debug!("starting dashboard with lookup delay {delay:?}");
    app::run(Arc::new(MockLookup::new(delay)), options)
}
