use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use ff_lookup_core::model::group_thousands;
use ff_lookup_core::{Config, MockLookup, PlayerBundle, PlayerLookup, Presence, Uid};
use indicatif::ProgressBar;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Player UID (digits only)
    pub uid: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Override the simulated lookup delay
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,
}

pub fn execute(args: LookupArgs, config: &Config) -> Result<()> {
    let uid = Uid::parse(&args.uid).map_err(|validation| {
        anyhow::anyhow!(
            "{}",
            validation
                .message()
                .unwrap_or_else(|| "No UID given".to_string())
        )
    })?;

    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.lookup_delay());
    let lookup = MockLookup::new(delay);

    let bundle = fetch(&lookup, &uid)?;

    if args.json {
        let json = serde_json::to_string_pretty(&bundle).context("Failed to serialize result")?;
        println!("{json}");
    } else {
        for line in format_bundle(&bundle) {
            println!("{line}");
        }
    }
    Ok(())
}

fn fetch(lookup: &dyn PlayerLookup, uid: &Uid) -> Result<PlayerBundle> {
    let spinner = create_spinner(&format!("Looking up {uid}..."));
    let outcome = lookup.lookup(uid);
    spinner.finish_and_clear();
    log::debug!("lookup for {uid} finished: ok={}", outcome.is_ok());
    Ok(outcome?)
}

fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(message.to_string());
    spinner
}

fn presence_colored(presence: &Presence) -> String {
    let label = presence.label();
    match presence {
        Presence::Online => label.green().to_string(),
        Presence::InGame { .. } => label.cyan().to_string(),
        Presence::Offline => label.dimmed().to_string(),
    }
}

fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {:<12} {}", format!("{label}:").dimmed(), value)
}

fn format_bundle(bundle: &PlayerBundle) -> Vec<String> {
    let p = &bundle.player;
    let g = &bundle.guild;
    let pet = &bundle.pet;

    let mut lines = vec![
        format!(
            "{} {} {}",
            p.nickname.bold(),
            format!("UID {}", p.uid).dimmed(),
            presence_colored(&p.presence)
        ),
        field("Level", p.level),
        field("Likes", group_thousands(p.likes)),
        field("Experience", group_thousands(p.experience)),
        field("Rank", &p.rank),
        field("BR rank", p.br_rank.yellow()),
        field("CS rank", &p.cs_rank),
        field("Region", &p.region),
        field("Created", p.account_created.format("%Y-%m-%d")),
        field("Last login", p.last_login.format("%Y-%m-%d %H:%M")),
        String::new(),
        format!("{}", "Guild".bold()),
        field("Name", format!("{} (#{})", g.name, g.id)),
        field("Level", g.level),
        field("Members", format!("{}/{}", g.members, g.capacity)),
        field("Leader", &g.leader),
        String::new(),
        format!("{}", "Pet".bold()),
        field("Name", format!("{} ({})", pet.name, pet.kind)),
        field("Level", pet.level),
        field("Experience", group_thousands(pet.experience)),
        field("Skill", &pet.skill),
        String::new(),
        format!("{}", "Outfit".bold()),
    ];
    lines.extend(
        bundle
            .outfit
            .slots()
            .iter()
            .map(|(slot, item)| field(slot, item)),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PlayerBundle {
        MockLookup::new(Duration::ZERO)
            .lookup(&Uid::parse("1234567890").unwrap())
            .unwrap()
    }

    #[test]
    fn test_format_bundle_plain() {
        colored::control::set_override(false);
        let lines = format_bundle(&sample());
        insta::assert_snapshot!(lines[0], @"ProGamer_VN UID 1234567890 Online");
        insta::assert_snapshot!(lines[2].trim(), @"Likes:       15,420");
        assert!(lines.iter().any(|l| l.contains("Members:     48/55")));
        assert!(lines.iter().any(|l| l.contains("Weapon:      Dragon AK")));
        assert_eq!(lines.last().unwrap().trim(), "Weapon:      Dragon AK");
    }

    #[test]
    fn test_fetch_not_found() {
        let err = fetch(
            &MockLookup::new(Duration::ZERO),
            &Uid::parse("99999999").unwrap(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "No player found for UID 99999999");
    }
}
