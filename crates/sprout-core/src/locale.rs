//! Console vocabulary.
//!
//! A [`Locale`] decides which tokens the user types to pick a species, a
//! care action or a continuation answer, and how every message reads. Token
//! matching is always exact and case-sensitive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::care::CareAction;
use crate::policy::Species;

/// Language of the console session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ko")]
    Korean,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Korean];

    /// Token the user types to choose `species`.
    pub fn species_token(self, species: Species) -> &'static str {
        match (self, species) {
            (Self::English, Species::Cactus) => "Cactus",
            (Self::English, Species::Rose) => "Rose",
            (Self::English, Species::Tomato) => "Tomato",
            (Self::Korean, Species::Cactus) => "선인장",
            (Self::Korean, Species::Rose) => "장미",
            (Self::Korean, Species::Tomato) => "방울토마토",
        }
    }

    /// Token the user types to choose `action`.
    pub fn action_token(self, action: CareAction) -> &'static str {
        match (self, action) {
            (Self::English, CareAction::Water) => "Water",
            (Self::English, CareAction::Feed) => "Feed",
            (Self::English, CareAction::ControlPests) => "ControlPests",
            (Self::English, CareAction::AdjustSunlight) => "AdjustSunlight",
            (Self::Korean, CareAction::Water) => "물주기",
            (Self::Korean, CareAction::Feed) => "영양분공급",
            (Self::Korean, CareAction::ControlPests) => "해충관리",
            (Self::Korean, CareAction::AdjustSunlight) => "햇빛조절",
        }
    }

    pub fn yes_token(self) -> &'static str {
        match self {
            Self::English => "yes",
            Self::Korean => "Y",
        }
    }

    pub fn no_token(self) -> &'static str {
        match self {
            Self::English => "no",
            Self::Korean => "N",
        }
    }

    pub fn species_question(self) -> &'static str {
        match self {
            Self::English => "Which plant would you like to care for?",
            Self::Korean => "어떤 식물을 관리하시겠습니까?",
        }
    }

    pub fn unknown_species(self) -> &'static str {
        match self {
            Self::English => "No such plant.",
            Self::Korean => "존재하지 않는 식물입니다",
        }
    }

    pub fn action_question(self) -> &'static str {
        match self {
            Self::English => "Which care action should be performed?",
            Self::Korean => "어떤 관리를 실행하시겠습니까?",
        }
    }

    pub fn unknown_action(self) -> &'static str {
        match self {
            Self::English => "That care action cannot be performed.",
            Self::Korean => "수행할 수 없는 작업입니다",
        }
    }

    pub fn continue_question(self) -> &'static str {
        match self {
            Self::English => "Perform another care action?",
            Self::Korean => "다른 관리를 더 진행합니까?",
        }
    }

    pub fn invalid_answer(self) -> &'static str {
        match self {
            Self::English => "Invalid input.",
            Self::Korean => "잘못된 입력입니다",
        }
    }

    pub fn shutdown(self) -> &'static str {
        match self {
            Self::English => "Shutting down the plant care system.",
            Self::Korean => "식물 관리 시스템을 종료합니다.",
        }
    }

    pub fn action_started(self, action: CareAction) -> &'static str {
        match (self, action) {
            (Self::English, CareAction::Water) => "Watering...",
            (Self::English, CareAction::Feed) => "Supplying nutrients...",
            (Self::English, CareAction::ControlPests) => "Controlling pests...",
            (Self::English, CareAction::AdjustSunlight) => "Adjusting sunlight...",
            (Self::Korean, CareAction::Water) => "물을 주는 중...",
            (Self::Korean, CareAction::Feed) => "영양분을 공급하는 중...",
            (Self::Korean, CareAction::ControlPests) => "해충을 관리하는 중...",
            (Self::Korean, CareAction::AdjustSunlight) => "햇빛을 조절하는 중...",
        }
    }

    pub fn action_finished(self, action: CareAction) -> &'static str {
        match (self, action) {
            (Self::English, CareAction::Water) => "Watering complete!",
            (Self::English, CareAction::Feed) => "Nutrient supply complete!",
            (Self::English, CareAction::ControlPests) => "Pest control complete!",
            (Self::English, CareAction::AdjustSunlight) => "Sunlight adjustment complete!",
            (Self::Korean, CareAction::Water) => "물 주기 작업 완료!",
            (Self::Korean, CareAction::Feed) => "영양분 공급 작업 완료!",
            (Self::Korean, CareAction::ControlPests) => "해충 관리 작업 완료!",
            (Self::Korean, CareAction::AdjustSunlight) => "햇빛 조절 작업 완료!",
        }
    }

    /// ASCII art shown while `action` runs.
    pub fn decoration(self, action: CareAction) -> &'static [&'static str] {
        match (self, action) {
            (_, CareAction::Water) => &["| | | | |", " | | | | |", "| | | | |"],
            (_, CareAction::Feed) => &["* * * * *", " * * * * *", "* * * * *"],
            (Self::English, CareAction::ControlPests) => {
                &["- - bzzz - -", "- - - - - - ", "- - splat - -"]
            }
            (Self::Korean, CareAction::ControlPests) => {
                &["- - 윙윙 - -", "- - - - - - ", "- - 깨꼬닥 - -"]
            }
            (_, CareAction::AdjustSunlight) => &["-o-"],
        }
    }

    pub fn growth_progress(self, plant: &str, growth: u32) -> String {
        format!("{plant} has grown 10%. Current growth: {growth}%")
    }

    pub fn growth_complete(self, plant: &str) -> String {
        match self {
            Self::English => format!("{plant} has finished growing. Time to start cultivating!"),
            Self::Korean => format!("{plant}의 성장이 완료되었습니다. 재배를 시작하세요!"),
        }
    }

    /// Full first-time prompt: the question followed by the accepted tokens.
    pub fn with_options<'a>(self, question: &str, tokens: impl IntoIterator<Item = &'a str>) -> String {
        let options: Vec<&str> = tokens.into_iter().collect();
        format!("{question} ({}) ", options.join("/"))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::English => "en",
            Self::Korean => "ko",
        };
        f.write_str(s)
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::English),
            "ko" => Ok(Self::Korean),
            other => Err(LocaleParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an unknown [`Locale`] code.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown locale: {0:?} (expected \"en\" or \"ko\")")]
pub struct LocaleParseError(pub String);
