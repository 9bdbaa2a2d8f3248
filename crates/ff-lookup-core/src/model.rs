//! Player view-model shapes

use crate::uid::Uid;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Whether the player is currently around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum Presence {
    Online,
    Offline,
    InGame { elapsed_minutes: Option<u32> },
}

impl Presence {
    pub fn label(&self) -> String {
        match self {
            Presence::Online => "Online".to_string(),
            Presence::Offline => "Offline".to_string(),
            Presence::InGame {
                elapsed_minutes: Some(m),
            } => format!("In game ({m}m)"),
            Presence::InGame {
                elapsed_minutes: None,
            } => "In game".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerInfo {
    pub uid: Uid,
    pub nickname: String,
    pub level: u32,
    pub likes: u64,
    pub experience: u64,
    pub rank: String,
    pub br_rank: String,
    pub cs_rank: String,
    pub region: String,
    pub account_created: NaiveDate,
    pub last_login: NaiveDateTime,
    pub presence: Presence,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuildInfo {
    pub name: String,
    pub id: u64,
    pub level: u32,
    pub members: u32,
    pub capacity: u32,
    pub leader: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetInfo {
    pub name: String,
    pub kind: String,
    pub level: u32,
    pub experience: u64,
    pub skill: String,
}

/// Equipped items, one per slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitInfo {
    pub head: String,
    pub face: String,
    pub top: String,
    pub bottom: String,
    pub shoes: String,
    pub weapon: String,
}

impl OutfitInfo {
    /// `(slot label, item)` in head-to-toe order, weapon last
    pub fn slots(&self) -> [(&'static str, &str); 6] {
        [
            ("Head", &self.head),
            ("Face", &self.face),
            ("Top", &self.top),
            ("Bottom", &self.bottom),
            ("Shoes", &self.shoes),
            ("Weapon", &self.weapon),
        ]
    }
}

/// Everything one lookup returns. Held and discarded as a unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerBundle {
    pub player: PlayerInfo,
    pub guild: GuildInfo,
    pub pet: PetInfo,
    pub outfit: OutfitInfo,
}

/// Group thousands with commas, e.g. `15420` -> `15,420`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
