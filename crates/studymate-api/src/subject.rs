//! Subjects and study goals

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A school subject a study session can be attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Korean,
    Math,
    English,
    Science,
    Social,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 6] = [
        Subject::Korean,
        Subject::Math,
        Subject::English,
        Subject::Science,
        Subject::Social,
        Subject::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Korean => "korean",
            Subject::Math => "math",
            Subject::English => "english",
            Subject::Science => "science",
            Subject::Social => "social",
            Subject::Other => "other",
        }
    }

    /// Display label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Subject::Korean => "국어",
            Subject::Math => "수학",
            Subject::English => "영어",
            Subject::Science => "과학",
            Subject::Social => "사회",
            Subject::Other => "기타",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "korean" => Ok(Subject::Korean),
            "math" => Ok(Subject::Math),
            "english" => Ok(Subject::English),
            "science" => Ok(Subject::Science),
            "social" => Ok(Subject::Social),
            "other" => Ok(Subject::Other),
            _ => Err(format!("unknown subject: {}", s)),
        }
    }
}

/// The kind of goal a study plan targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// 중간고사 대비
    Midterm,
    /// 기말고사 대비
    Final,
    /// 수능 대비
    Sat,
    /// 일반 학습
    Regular,
}

impl GoalType {
    pub fn label(&self) -> &'static str {
        match self {
            GoalType::Midterm => "중간고사 대비",
            GoalType::Final => "기말고사 대비",
            GoalType::Sat => "수능 대비",
            GoalType::Regular => "일반 학습",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_round_trips_through_str() {
        for subject in Subject::ALL {
            let parsed: Subject = subject.as_str().parse().unwrap();
            assert_eq!(parsed, subject);
        }
        assert!("history".parse::<Subject>().is_err());
    }

    #[test]
    fn subject_serializes_snake_case() {
        let json = serde_json::to_string(&Subject::Korean).unwrap();
        assert_eq!(json, "\"korean\"");

        let parsed: Subject = serde_json::from_str("\"social\"").unwrap();
        assert_eq!(parsed, Subject::Social);
    }

    #[test]
    fn goal_type_serializes_snake_case() {
        let json = serde_json::to_string(&GoalType::Midterm).unwrap();
        assert_eq!(json, "\"midterm\"");
    }
}
