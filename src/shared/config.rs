//! Application configuration. Business-rule limits and startup defaults.

use serde::Deserialize;

pub const DEFAULT_MAX_PRIORITY_TACTICS: usize = 5;
pub const DEFAULT_MAX_BOARD_MEMBERS: usize = 20;
pub const DEFAULT_MAX_SPECIAL_SESSION_MEMBERS: usize = 20;
pub const DEFAULT_MAX_HIGH_SCHOOL_PARTNERS: usize = 20;
pub const DEFAULT_MAX_HIGH_SCHOOL_INTERACTIONS: usize = 50;
pub const DEFAULT_MAX_INTERACTION_ARTIFACTS: usize = 5;
pub const DEFAULT_TACTIC_TRUNCATE_WORDS: usize = 15;
pub const DEFAULT_DEPARTMENT: &str = "automotive";

#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    /// Max prioritized tactics. Read from ADVISORY_MAX_PRIORITY_TACTICS.
    #[serde(default)]
    pub max_priority_tactics: Option<usize>,

    /// Read from ADVISORY_MAX_BOARD_MEMBERS.
    #[serde(default)]
    pub max_board_members: Option<usize>,

    /// Read from ADVISORY_MAX_SPECIAL_SESSION_MEMBERS.
    #[serde(default)]
    pub max_special_session_members: Option<usize>,

    /// Read from ADVISORY_MAX_HIGH_SCHOOL_PARTNERS.
    #[serde(default)]
    pub max_high_school_partners: Option<usize>,

    /// Read from ADVISORY_MAX_HIGH_SCHOOL_INTERACTIONS.
    #[serde(default)]
    pub max_high_school_interactions: Option<usize>,

    /// Max artifact file names per interaction. Read from ADVISORY_MAX_INTERACTION_ARTIFACTS.
    #[serde(default)]
    pub max_interaction_artifacts: Option<usize>,

    /// Tactic year selected at startup. Read from ADVISORY_DEFAULT_TACTIC_YEAR.
    #[serde(default)]
    pub default_tactic_year: Option<i32>,

    /// Words kept when a tactic name is shown truncated.
    #[serde(default)]
    pub tactic_truncate_words: Option<usize>,

    /// Department loaded at startup. Read from ADVISORY_DEPARTMENT.
    #[serde(default)]
    pub department: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("ADVISORY"));
        if let Ok(path) = std::env::var("ADVISORY_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn max_priority_tactics_or_default(&self) -> usize {
        self.max_priority_tactics
            .unwrap_or(DEFAULT_MAX_PRIORITY_TACTICS)
    }

    pub fn max_board_members_or_default(&self) -> usize {
        self.max_board_members.unwrap_or(DEFAULT_MAX_BOARD_MEMBERS)
    }

    pub fn max_special_session_members_or_default(&self) -> usize {
        self.max_special_session_members
            .unwrap_or(DEFAULT_MAX_SPECIAL_SESSION_MEMBERS)
    }

    pub fn max_high_school_partners_or_default(&self) -> usize {
        self.max_high_school_partners
            .unwrap_or(DEFAULT_MAX_HIGH_SCHOOL_PARTNERS)
    }

    pub fn max_high_school_interactions_or_default(&self) -> usize {
        self.max_high_school_interactions
            .unwrap_or(DEFAULT_MAX_HIGH_SCHOOL_INTERACTIONS)
    }

    pub fn max_interaction_artifacts_or_default(&self) -> usize {
        self.max_interaction_artifacts
            .unwrap_or(DEFAULT_MAX_INTERACTION_ARTIFACTS)
    }

    /// Defaults to the store's default year (2025).
    pub fn default_tactic_year_or_default(&self) -> i32 {
        self.default_tactic_year
            .unwrap_or(crate::state::DEFAULT_TACTIC_YEAR)
    }

    pub fn tactic_truncate_words_or_default(&self) -> usize {
        self.tactic_truncate_words
            .unwrap_or(DEFAULT_TACTIC_TRUNCATE_WORDS)
    }

    pub fn department_or_default(&self) -> String {
        self.department
            .clone()
            .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string())
    }
}
