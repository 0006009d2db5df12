use std::path::PathBuf;

use crate::record::FanClassifier;

/// Fan ids whose count is a bonus-tile (dora) tally.
pub const DORA_FANS: [i32; 4] = [31, 32, 33, 34];
/// Fan ids listed individually in player reports. `-1` is nagashi mangan.
pub const RARE_FANS: [i32; 10] = [-1, 3, 4, 5, 6, 18, 19, 20, 24, 28];

pub const ORIGIN_POINT_4: i32 = 25000;
pub const ORIGIN_POINT_3: i32 = 35000;

pub const TEAMS_4: [&str; 4] = ["青チーム", "赤チーム", "白チーム", "黒チーム"];
pub const TEAMS_3: [&str; 3] = ["チームA", "チームB", "チームC"];

/// File locations, read from the environment with repository-relative defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub paifu_dir: PathBuf,
    pub members_file: PathBuf,
    pub fans_file: PathBuf,
    pub report_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paifu_dir: PathBuf::from("paifu"),
            members_file: PathBuf::from("credential/members.json"),
            fans_file: PathBuf::from("constants/fans.json"),
            report_dir: PathBuf::from("reports"),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let path = |key: &str, default: PathBuf| lookup(key).map(PathBuf::from).unwrap_or(default);

        Self {
            paifu_dir: path("PAIFU_DIR", defaults.paifu_dir),
            members_file: path("MEMBERS_FILE", defaults.members_file),
            fans_file: path("FANS_FILE", defaults.fans_file),
            report_dir: path("REPORT_DIR", defaults.report_dir),
        }
    }

    /// Directory holding the logs of one bracket, e.g. `paifu/4`.
    pub fn paifu_dir_for(&self, player_count: usize) -> PathBuf {
        self.paifu_dir.join(player_count.to_string())
    }
}

pub fn fan_classifier() -> FanClassifier {
    FanClassifier::new(DORA_FANS, RARE_FANS)
}

/// Starting points of every seat.
pub fn origin_point(player_count: usize) -> i32 {
    if player_count == 3 {
        ORIGIN_POINT_3
    } else {
        ORIGIN_POINT_4
    }
}

/// Team column order of the standings table.
pub fn team_order(player_count: usize) -> &'static [&'static str] {
    if player_count == 3 {
        &TEAMS_3
    } else {
        &TEAMS_4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_environment_is_empty() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn environment_overrides_paths() {
        let env: HashMap<&str, &str> = [("PAIFU_DIR", "/data/logs"), ("REPORT_DIR", "/tmp/out")].into();
        let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.paifu_dir, PathBuf::from("/data/logs"));
        assert_eq!(config.report_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.members_file, PathBuf::from("credential/members.json"));
        assert_eq!(config.paifu_dir_for(3), PathBuf::from("/data/logs/3"));
    }

    #[test]
    fn origin_points_per_bracket() {
        assert_eq!(origin_point(3), 35000);
        assert_eq!(origin_point(4), 25000);
        assert_eq!(team_order(3).len(), 3);
        assert_eq!(team_order(4).len(), 4);
    }

    #[test]
    fn nagashi_counts_as_rare() {
        assert!(fan_classifier().is_rare(crate::record::NAGASHI_FAN_ID));
        assert!(fan_classifier().is_bonus(33));
    }
}
