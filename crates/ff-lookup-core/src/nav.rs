//! Sidebar navigation state

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    Home,
    #[default]
    Search,
    Accounts,
    Keys,
    Stats,
    Security,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Home,
        Tab::Search,
        Tab::Accounts,
        Tab::Keys,
        Tab::Stats,
        Tab::Security,
        Tab::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Search => "UID Lookup",
            Tab::Accounts => "Accounts",
            Tab::Keys => "Key Panel",
            Tab::Stats => "Statistics",
            Tab::Security => "Security",
            Tab::Settings => "Settings",
        }
    }

    /// Tabs that render the lookup dashboard rather than a placeholder
    pub fn shows_dashboard(&self) -> bool {
        matches!(self, Tab::Home | Tab::Search)
    }

    fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

/// Active section and sidebar visibility, owned by the top-level app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    active: Tab,
    sidebar_open: bool,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Navigation {
    pub fn new(sidebar_open: bool) -> Self {
        Self {
            active: Tab::default(),
            sidebar_open,
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn next(&mut self) {
        let i = (self.active.index() + 1) % Tab::ALL.len();
        self.active = Tab::ALL[i];
    }

    pub fn prev(&mut self) {
        let len = Tab::ALL.len();
        let i = (self.active.index() + len - 1) % len;
        self.active = Tab::ALL[i];
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}
