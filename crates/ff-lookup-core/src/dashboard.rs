//! Static dashboard content around the lookup panel
//!
//! None of this is computed; it is sample content in the shape a live
//! dashboard would feed in.

/// Day-over-day change shown under a stat tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trend {
    pub percent: u32,
    pub positive: bool,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        if self.positive { "↑" } else { "↓" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub title: String,
    pub value: String,
    pub trend: Option<Trend>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentSearch {
    pub uid: String,
    pub nickname: String,
    pub level: u32,
    pub ago: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Operational,
    Degraded,
    Down,
}

impl ServiceState {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceState::Operational => "Operational",
            ServiceState::Degraded => "Warming up",
            ServiceState::Down => "Down",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub name: String,
    pub state: ServiceState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStats {
    pub succeeded: u32,
    pub failed: u32,
}

impl QuickStats {
    /// Share of successful lookups in `0.0..=1.0`; 0 when nothing ran
    pub fn success_ratio(&self) -> f64 {
        let total = self.succeeded + self.failed;
        if total == 0 {
            return 0.0;
        }
        f64::from(self.succeeded) / f64::from(total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub subtitle: String,
    pub operator: String,
    pub role: String,
}

/// Everything the dashboard shows besides the lookup itself
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub header: Header,
    pub tiles: Vec<StatTile>,
    pub recent: Vec<RecentSearch>,
    pub quick: QuickStats,
    pub services: Vec<ServiceStatus>,
    pub version: String,
}

fn tile(title: &str, value: &str, trend: Option<(u32, bool)>) -> StatTile {
    StatTile {
        title: title.to_string(),
        value: value.to_string(),
        trend: trend.map(|(percent, positive)| Trend { percent, positive }),
    }
}

fn recent(uid: &str, nickname: &str, level: u32, ago: &str) -> RecentSearch {
    RecentSearch {
        uid: uid.to_string(),
        nickname: nickname.to_string(),
        level,
        ago: ago.to_string(),
    }
}

fn service(name: &str, state: ServiceState) -> ServiceStatus {
    ServiceStatus {
        name: name.to_string(),
        state,
    }
}

impl DashboardData {
    pub fn sample(operator: &str) -> Self {
        Self {
            header: Header {
                title: "Dashboard".to_string(),
                subtitle: "Free Fire account lookup".to_string(),
                operator: operator.to_string(),
                role: "Administrator".to_string(),
            },
            tiles: vec![
                tile("Lookups today", "1,234", Some((12, true))),
                tile("Active users", "856", Some((8, true))),
                tile("Active keys", "127", Some((3, false))),
                tile("Success rate", "98.5%", None),
            ],
            recent: vec![
                recent("1234567890", "ProGamer_VN", 75, "2 min ago"),
                recent("9876543210", "DragonSlayer", 68, "15 min ago"),
                recent("5555555555", "NightHawk_FF", 82, "1 h ago"),
                recent("1111111111", "VietnamPro", 71, "2 h ago"),
                recent("2222222222", "HeadshotKing", 79, "3 h ago"),
            ],
            quick: QuickStats {
                succeeded: 1215,
                failed: 19,
            },
            services: vec![
                service("API Server", ServiceState::Operational),
                service("Database", ServiceState::Operational),
                service("Cache", ServiceState::Degraded),
            ],
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
