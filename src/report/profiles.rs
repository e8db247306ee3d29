use serde::Serialize;

/// One of the sixteen MBTI type profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeProfile {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const PROFILES: [TypeProfile; 16] = [
    TypeProfile {
        code: "INTJ",
        name: "The Architect",
        description: "Imaginative and strategic thinkers",
    },
    TypeProfile {
        code: "INTP",
        name: "The Thinker",
        description: "Innovative inventors with an unquenchable thirst for knowledge",
    },
    TypeProfile {
        code: "ENTJ",
        name: "The Commander",
        description: "Bold, imaginative and strong-willed leaders",
    },
    TypeProfile {
        code: "ENTP",
        name: "The Debater",
        description: "Smart and curious thinkers who cannot resist an intellectual challenge",
    },
    TypeProfile {
        code: "INFJ",
        name: "The Advocate",
        description: "Creative and insightful, inspired by their own values",
    },
    TypeProfile {
        code: "INFP",
        name: "The Mediator",
        description: "Poetic, kind and altruistic people",
    },
    TypeProfile {
        code: "ENFJ",
        name: "The Protagonist",
        description: "Charismatic and inspiring leaders",
    },
    TypeProfile {
        code: "ENFP",
        name: "The Campaigner",
        description: "Enthusiastic, creative and sociable free spirits",
    },
    TypeProfile {
        code: "ISTJ",
        name: "The Logistician",
        description: "Practical and fact-minded, reliable",
    },
    TypeProfile {
        code: "ISFJ",
        name: "The Protector",
        description: "Very dedicated and warm protectors",
    },
    TypeProfile {
        code: "ESTJ",
        name: "The Executive",
        description: "Excellent administrators, unsurpassed at managing things",
    },
    TypeProfile {
        code: "ESFJ",
        name: "The Consul",
        description: "Extraordinarily caring, social and popular",
    },
    TypeProfile {
        code: "ISTP",
        name: "The Virtuoso",
        description: "Bold and practical experimenters",
    },
    TypeProfile {
        code: "ISFP",
        name: "The Adventurer",
        description: "Flexible and charming artists",
    },
    TypeProfile {
        code: "ESTP",
        name: "The Entrepreneur",
        description: "Smart, energetic and very perceptive people",
    },
    TypeProfile {
        code: "ESFP",
        name: "The Entertainer",
        description: "Spontaneous, energetic and enthusiastic people",
    },
];

impl TypeProfile {
    /// All sixteen profiles, in catalog order.
    pub fn all() -> &'static [TypeProfile] {
        &PROFILES
    }

    /// Look up a profile by its four-letter code, case-insensitively.
    pub fn lookup(code: &str) -> Option<&'static TypeProfile> {
        PROFILES
            .iter()
            .find(|profile| profile.code.eq_ignore_ascii_case(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::MbtiLetter;

    #[test]
    fn test_catalog_is_complete() {
        assert_eq!(TypeProfile::all().len(), 16);
    }

    #[test]
    fn test_lookup_by_code() {
        let profile = TypeProfile::lookup("INFP").unwrap();
        assert_eq!(profile.name, "The Mediator");
        assert_eq!(profile.description, "Poetic, kind and altruistic people");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(TypeProfile::lookup("estj").is_some());
        assert!(TypeProfile::lookup("EsTj").is_some());
    }

    #[test]
    fn test_lookup_unknown_code() {
        assert!(TypeProfile::lookup("XXXX").is_none());
        assert!(TypeProfile::lookup("").is_none());
    }

    #[test]
    fn test_every_scorable_type_has_a_profile() {
        // Every combination of one letter per axis must resolve
        for &e in &[MbtiLetter::E, MbtiLetter::I] {
            for &s in &[MbtiLetter::S, MbtiLetter::N] {
                for &t in &[MbtiLetter::T, MbtiLetter::F] {
                    for &j in &[MbtiLetter::J, MbtiLetter::P] {
                        let code: String = [e, s, t, j].iter().map(|l| l.as_char()).collect();
                        assert!(
                            TypeProfile::lookup(&code).is_some(),
                            "missing profile for {}",
                            code
                        );
                    }
                }
            }
        }
    }
}
