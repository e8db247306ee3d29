use serde::{Deserialize, Serialize};

/// The five Likert response labels, in score order (1 through 5).
pub const LIKERT_OPTIONS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

/// One of the eight MBTI dimension letters.
///
/// Serialized as the bare letter ("E", "I", ...) in YAML and JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum MbtiLetter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl MbtiLetter {
    /// The four axes in type-code order. The first letter of a pair wins an
    /// axis only on a strictly greater count; ties go to the second letter.
    pub const AXES: [(MbtiLetter, MbtiLetter); 4] = [
        (MbtiLetter::E, MbtiLetter::I),
        (MbtiLetter::S, MbtiLetter::N),
        (MbtiLetter::T, MbtiLetter::F),
        (MbtiLetter::J, MbtiLetter::P),
    ];

    /// The other letter of this letter's axis.
    pub fn opposite(self) -> MbtiLetter {
        match self {
            MbtiLetter::E => MbtiLetter::I,
            MbtiLetter::I => MbtiLetter::E,
            MbtiLetter::S => MbtiLetter::N,
            MbtiLetter::N => MbtiLetter::S,
            MbtiLetter::T => MbtiLetter::F,
            MbtiLetter::F => MbtiLetter::T,
            MbtiLetter::J => MbtiLetter::P,
            MbtiLetter::P => MbtiLetter::J,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            MbtiLetter::E => 'E',
            MbtiLetter::I => 'I',
            MbtiLetter::S => 'S',
            MbtiLetter::N => 'N',
            MbtiLetter::T => 'T',
            MbtiLetter::F => 'F',
            MbtiLetter::J => 'J',
            MbtiLetter::P => 'P',
        }
    }
}

/// One of the five Big Five trait dimensions.
///
/// Serialized as the single letter ("O", "C", "E", "A", "N").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum OceanTrait {
    #[serde(rename = "O")]
    Openness,
    #[serde(rename = "C")]
    Conscientiousness,
    #[serde(rename = "E")]
    Extraversion,
    #[serde(rename = "A")]
    Agreeableness,
    #[serde(rename = "N")]
    Neuroticism,
}

impl OceanTrait {
    /// All five traits in display order (O, C, E, A, N).
    pub const ALL: [OceanTrait; 5] = [
        OceanTrait::Openness,
        OceanTrait::Conscientiousness,
        OceanTrait::Extraversion,
        OceanTrait::Agreeableness,
        OceanTrait::Neuroticism,
    ];

    /// Full trait name ("Openness", "Conscientiousness", ...).
    pub fn name(self) -> &'static str {
        match self {
            OceanTrait::Openness => "Openness",
            OceanTrait::Conscientiousness => "Conscientiousness",
            OceanTrait::Extraversion => "Extraversion",
            OceanTrait::Agreeableness => "Agreeableness",
            OceanTrait::Neuroticism => "Neuroticism",
        }
    }

    pub fn letter(self) -> char {
        match self {
            OceanTrait::Openness => 'O',
            OceanTrait::Conscientiousness => 'C',
            OceanTrait::Extraversion => 'E',
            OceanTrait::Agreeableness => 'A',
            OceanTrait::Neuroticism => 'N',
        }
    }
}

/// A multiple-choice MBTI item.
///
/// `dimensions` is aligned positionally with `options`: picking option k
/// counts one point toward `dimensions[k]`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MbtiQuestion {
    pub id: u32,

    /// Prompt shown to the respondent
    pub text: String,

    /// Answer options, in presentation order
    pub options: Vec<String>,

    /// Dimension letter credited per option, same length as `options`
    pub dimensions: Vec<MbtiLetter>,
}

/// A Likert-scale Big Five item.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OceanQuestion {
    pub id: u32,

    /// Prompt shown to the respondent
    pub text: String,

    /// The five response labels, from 1 (strongly disagree) to 5
    pub options: Vec<String>,

    /// Trait this item measures
    pub dimension: OceanTrait,

    /// Reverse-scored item: a response x counts as 6 - x
    #[serde(default)]
    pub reverse: bool,
}

/// The full question bank: both questionnaires, in scoring order.
///
/// Scoring pairs answers with questions positionally, so the order of these
/// lists is part of the contract. A custom bank file may replace either list;
/// a list left out of the file falls back to the built-in questions.
///
/// Example YAML:
/// ```yaml
/// mbti:
///   - id: 1
///     text: "At a party, you would most likely:"
///     options: ["Meet new people", "Stick with close friends"]
///     dimensions: [E, I]
/// ocean:
///   - id: 1
///     text: "I am the life of the party"
///     options: ["Strongly Disagree", "Disagree", "Neutral", "Agree", "Strongly Agree"]
///     dimension: E
///   - id: 2
///     text: "I don't talk a lot"
///     options: ["Strongly Disagree", "Disagree", "Neutral", "Agree", "Strongly Agree"]
///     dimension: E
///     reverse: true
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionBank {
    #[serde(default)]
    pub mbti: Vec<MbtiQuestion>,

    #[serde(default)]
    pub ocean: Vec<OceanQuestion>,
}
