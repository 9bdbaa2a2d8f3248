//! Player lookup collaborator
//!
//! The dashboard only talks to [`PlayerLookup`]. [`MockLookup`] stands in for a
//! real account service: it waits a fixed delay, then hands back the same
//! sample bundle for every UID except the not-found sentinels.

use crate::model::{GuildInfo, OutfitInfo, PetInfo, PlayerBundle, PlayerInfo, Presence};
use crate::uid::Uid;
use chrono::NaiveDate;
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// UIDs the mock reports as unknown
pub const NOT_FOUND_SENTINELS: &[&str] = &["99999999"];

/// Default simulated fetch delay
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No player found for UID {uid}")]
    NotFound { uid: Uid },
}

/// Resolves a validated UID to a player bundle
pub trait PlayerLookup: Send + Sync {
    fn lookup(&self, uid: &Uid) -> Result<PlayerBundle, LookupError>;
}

/// Canned lookup with an artificial delay
#[derive(Debug, Clone)]
pub struct MockLookup {
    delay: Duration,
}

impl Default for MockLookup {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl MockLookup {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl PlayerLookup for MockLookup {
    fn lookup(&self, uid: &Uid) -> Result<PlayerBundle, LookupError> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        if NOT_FOUND_SENTINELS.contains(&uid.as_str()) {
            log::debug!("mock lookup: {uid} is a not-found sentinel");
            return Err(LookupError::NotFound { uid: uid.clone() });
        }

        log::debug!("mock lookup: returning sample bundle for {uid}");
        Ok(sample_bundle(uid))
    }
}

/// Presence varies with the last digit so repeated demos don't all look alike
fn presence_for(uid: &Uid) -> Presence {
    let last = uid
        .as_str()
        .bytes()
        .last()
        .map(|b| b - b'0')
        .unwrap_or(0);
    match last % 3 {
        0 => Presence::Online,
        1 => Presence::InGame {
            elapsed_minutes: Some(u32::from(last) * 4 + 3),
        },
        _ => Presence::Offline,
    }
}

fn sample_bundle(uid: &Uid) -> PlayerBundle {
    let account_created = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap_or_default();
    let last_login = NaiveDate::from_ymd_opt(2024, 1, 8)
        .and_then(|d| d.and_hms_opt(14, 30, 0))
        .unwrap_or_default();

    PlayerBundle {
        player: PlayerInfo {
            uid: uid.clone(),
            nickname: "ProGamer_VN".to_string(),
            level: 75,
            likes: 15_420,
            experience: 2_847_560,
            rank: "Heroic".to_string(),
            br_rank: "Grandmaster".to_string(),
            cs_rank: "Diamond IV".to_string(),
            region: "Vietnam".to_string(),
            account_created,
            last_login,
            presence: presence_for(uid),
        },
        guild: GuildInfo {
            name: "Vietnam Elite".to_string(),
            id: 60_012_345,
            level: 6,
            members: 48,
            capacity: 55,
            leader: "EliteCaptain".to_string(),
        },
        pet: PetInfo {
            name: "Shadow".to_string(),
            kind: "Falco".to_string(),
            level: 7,
            experience: 1_250,
            skill: "Skyline Spree".to_string(),
        },
        outfit: OutfitInfo {
            head: "Booyah Cap".to_string(),
            face: "Cobra Mask".to_string(),
            top: "Criminal Jacket".to_string(),
            bottom: "Angelic Pants".to_string(),
            shoes: "Sakura Sneakers".to_string(),
            weapon: "Dragon AK".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn uid(s: &str) -> Uid {
        Uid::parse(s).unwrap()
    }

    #[test]
    fn test_sentinel_is_not_found() {
        let lookup = MockLookup::new(Duration::ZERO);
        let err = lookup.lookup(&uid("99999999")).unwrap_err();
        assert_eq!(
            err,
            LookupError::NotFound {
                uid: uid("99999999")
            }
        );
        assert_eq!(err.to_string(), "No player found for UID 99999999");
    }

    #[test]
    fn test_bundle_carries_requested_uid() {
        let lookup = MockLookup::new(Duration::ZERO);
        let bundle = lookup.lookup(&uid("1234567890")).unwrap();
        assert_eq!(bundle.player.uid.as_str(), "1234567890");
        assert_eq!(bundle.player.nickname, "ProGamer_VN");
        assert_eq!(bundle.guild.members, 48);
        assert!(bundle.guild.members <= bundle.guild.capacity);
        assert_eq!(bundle.outfit.slots().len(), 6);
    }

    #[test]
    fn test_delay_is_applied() {
        let lookup = MockLookup::new(Duration::from_millis(30));
        let start = Instant::now();
        lookup.lookup(&uid("12345678")).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_presence_varies_by_last_digit() {
        assert_eq!(presence_for(&uid("12345670")), Presence::Online);
        assert_eq!(
            presence_for(&uid("12345671")),
            Presence::InGame {
                elapsed_minutes: Some(7)
            }
        );
        assert_eq!(presence_for(&uid("12345672")), Presence::Offline);
    }
}
