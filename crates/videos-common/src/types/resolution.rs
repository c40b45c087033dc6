use serde::{Deserialize, Serialize};

use crate::error::CommonError;

/// Video resolution labels accepted by the API
///
/// The set is closed: anything outside these eight labels is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resolution {
    P144,
    P240,
    P360,
    P480,
    P720,
    P1080,
    P1440,
    P2160,
}

impl Resolution {
    /// Every resolution, lowest first
    pub const ALL: [Resolution; 8] = [
        Resolution::P144,
        Resolution::P240,
        Resolution::P360,
        Resolution::P480,
        Resolution::P720,
        Resolution::P1080,
        Resolution::P1440,
        Resolution::P2160,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::P144 => "P144",
            Resolution::P240 => "P240",
            Resolution::P360 => "P360",
            Resolution::P480 => "P480",
            Resolution::P720 => "P720",
            Resolution::P1080 => "P1080",
            Resolution::P1440 => "P1440",
            Resolution::P2160 => "P2160",
        }
    }

    /// Comma-separated list of every label, for error messages
    pub fn allowed_list() -> String {
        Self::ALL
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::str::FromStr for Resolution {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| CommonError::UnknownResolution(s.to_string()))
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("P720".parse::<Resolution>().unwrap(), Resolution::P720);
        assert!("p720".parse::<Resolution>().is_err());
        assert!("P4320".parse::<Resolution>().is_err());
    }

    #[test]
    fn test_allowed_list() {
        assert_eq!(
            Resolution::allowed_list(),
            "P144, P240, P360, P480, P720, P1080, P1440, P2160"
        );
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&vec![Resolution::P144, Resolution::P2160]).unwrap();
        assert_eq!(json, r#"["P144","P2160"]"#);
        let back: Vec<Resolution> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Resolution::P144, Resolution::P2160]);
    }

    proptest::proptest! {
        #[test]
        fn prop_display_parses_back(index in 0usize..8) {
            let resolution = Resolution::ALL[index];
            proptest::prop_assert_eq!(resolution.to_string().parse::<Resolution>().unwrap(), resolution);
        }
    }
}
