use super::types::{
    MbtiLetter, MbtiQuestion, OceanQuestion, OceanTrait, QuestionBank, LIKERT_OPTIONS,
};

impl QuestionBank {
    /// The compiled-in questionnaire: 20 MBTI items and 39 Big Five items.
    pub fn builtin() -> Self {
        QuestionBank {
            mbti: builtin_mbti(),
            ocean: builtin_ocean(),
        }
    }
}

fn mbti(id: u32, text: &str, options: [&str; 4], dimensions: [MbtiLetter; 4]) -> MbtiQuestion {
    MbtiQuestion {
        id,
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        dimensions: dimensions.to_vec(),
    }
}

fn likert(id: u32, text: &str, dimension: OceanTrait, reverse: bool) -> OceanQuestion {
    OceanQuestion {
        id,
        text: text.to_string(),
        options: LIKERT_OPTIONS.iter().map(|o| o.to_string()).collect(),
        dimension,
        reverse,
    }
}

fn builtin_mbti() -> Vec<MbtiQuestion> {
    use MbtiLetter::{E, F, I, J, N, P, S, T};

    vec![
        mbti(
            1,
            "At a party, you would most likely:",
            [
                "Meet new people and engage in conversations",
                "Have deep conversations with a few close friends",
                "Observe the crowd and analyze social dynamics",
                "Take charge and organize activities",
            ],
            [E, I, N, S],
        ),
        mbti(
            2,
            "When making important decisions, you primarily rely on:",
            [
                "Logical analysis and objective facts",
                "Personal values and how it affects others",
                "Past experiences and proven methods",
                "Future possibilities and innovative approaches",
            ],
            [T, F, S, N],
        ),
        mbti(
            3,
            "Your ideal work environment would be:",
            [
                "Structured with clear deadlines and procedures",
                "Flexible with room for creativity and spontaneity",
                "Collaborative with lots of team interaction",
                "Quiet and focused with minimal interruptions",
            ],
            [J, P, E, I],
        ),
        mbti(
            4,
            "When learning something new, you prefer to:",
            [
                "Start with the big picture and work down to details",
                "Start with specific details and build up to the big picture",
                "Learn through hands-on practice and experimentation",
                "Learn through reading and theoretical study",
            ],
            [N, S, S, N],
        ),
        mbti(
            5,
            "In a conflict, you tend to:",
            [
                "Focus on finding the most logical solution",
                "Focus on how everyone feels and finding harmony",
                "Address the issue directly and quickly",
                "Take time to understand all perspectives first",
            ],
            [T, F, E, I],
        ),
        mbti(
            6,
            "You feel most energized when:",
            [
                "Working on multiple projects simultaneously",
                "Focusing deeply on one complex problem",
                "Collaborating with others on shared goals",
                "Working independently on your own ideas",
            ],
            [P, J, E, I],
        ),
        mbti(
            7,
            "When planning a vacation, you would:",
            [
                "Create a detailed itinerary with reservations",
                "Keep it flexible and see what happens",
                "Research extensively and plan every detail",
                "Go with the flow and be spontaneous",
            ],
            [J, P, J, P],
        ),
        mbti(
            8,
            "You prefer to receive feedback that is:",
            [
                "Direct and honest, even if it's harsh",
                "Gentle and considerate of your feelings",
                "Specific and detailed with examples",
                "General and focused on potential",
            ],
            [T, F, S, N],
        ),
        mbti(
            9,
            "In a group project, you naturally:",
            [
                "Take on a leadership role and delegate tasks",
                "Support others and help them succeed",
                "Focus on the technical details and quality",
                "Generate creative ideas and solutions",
            ],
            [E, F, S, N],
        ),
        mbti(
            10,
            "You feel most comfortable when:",
            [
                "You have a clear plan and know what's coming",
                "You have flexibility and can adapt as needed",
                "You're surrounded by people who understand you",
                "You have time alone to process your thoughts",
            ],
            [J, P, E, I],
        ),
        mbti(
            11,
            "When working on a project, you prefer to:",
            [
                "Start immediately and figure things out as you go",
                "Plan everything thoroughly before starting",
                "Collaborate with others throughout the process",
                "Work alone and present the final result",
            ],
            [P, J, E, I],
        ),
        mbti(
            12,
            "Your ideal learning environment is:",
            [
                "A quiet library with minimal distractions",
                "A bustling coffee shop with background noise",
                "A structured classroom with clear instructions",
                "An open space where you can move around",
            ],
            [I, E, S, N],
        ),
        mbti(
            13,
            "When someone asks for your opinion, you:",
            [
                "Give a direct, honest answer immediately",
                "Consider their feelings before responding",
                "Ask clarifying questions to understand the context",
                "Take time to think through all possibilities",
            ],
            [T, F, S, N],
        ),
        mbti(
            14,
            "You're most productive when:",
            [
                "You have a strict schedule to follow",
                "You can work at your own pace",
                "You're surrounded by motivated people",
                "You have complete silence and solitude",
            ],
            [J, P, E, I],
        ),
        mbti(
            15,
            "When facing a complex problem, you:",
            [
                "Break it down into smaller, manageable parts",
                "Look for patterns and connections",
                "Ask others for their perspectives",
                "Trust your intuition and go with your gut",
            ],
            [S, N, E, N],
        ),
        mbti(
            16,
            "Your ideal weekend would be:",
            [
                "A planned itinerary with activities and reservations",
                "A spontaneous adventure with no set plans",
                "Social gatherings with friends and family",
                "Quiet time at home with books or hobbies",
            ],
            [J, P, E, I],
        ),
        mbti(
            17,
            "When making important life decisions, you:",
            [
                "Research extensively and weigh all options",
                "Follow your heart and personal values",
                "Seek advice from trusted friends and family",
                "Trust your instincts and make quick decisions",
            ],
            [S, F, E, N],
        ),
        mbti(
            18,
            "You feel most energized after:",
            [
                "A day of socializing and meeting new people",
                "A quiet day of reflection and introspection",
                "Completing a challenging task successfully",
                "Exploring new ideas and possibilities",
            ],
            [E, I, S, N],
        ),
        mbti(
            19,
            "When someone disagrees with you, you:",
            [
                "Present logical arguments to convince them",
                "Try to understand their perspective first",
                "Avoid conflict and change the subject",
                "Engage in a lively debate to explore both sides",
            ],
            [T, F, F, T],
        ),
        mbti(
            20,
            "Your ideal work schedule would be:",
            [
                "Fixed hours with clear start and end times",
                "Flexible hours based on your energy levels",
                "Regular hours with frequent social interaction",
                "Variable hours that allow for deep focus periods",
            ],
            [J, P, E, I],
        ),
    ]
}

fn builtin_ocean() -> Vec<OceanQuestion> {
    use OceanTrait::{
        Agreeableness as A, Conscientiousness as C, Extraversion as E, Neuroticism as N,
        Openness as O,
    };

    vec![
        likert(1, "I am the life of the party", E, false),
        likert(2, "I feel comfortable around people", E, false),
        likert(3, "I start conversations", E, false),
        likert(4, "I don't talk a lot", E, true),
        likert(5, "I think a lot", O, false),
        likert(6, "I have difficulty understanding abstract ideas", O, true),
        likert(7, "I have a vivid imagination", O, false),
        likert(8, "I am not interested in abstract ideas", O, true),
        likert(9, "I have excellent ideas", O, false),
        likert(10, "I am always prepared", C, false),
        likert(11, "I pay attention to details", C, false),
        likert(12, "I get chores done right away", C, false),
        likert(13, "I like order", C, false),
        likert(14, "I follow a schedule", C, false),
        likert(15, "I am exacting in my work", C, false),
        likert(16, "I leave my belongings around", C, true),
        likert(17, "I make a mess of things", C, true),
        likert(
            18,
            "I often forget to put things back in their proper place",
            C,
            true,
        ),
        likert(19, "I shirk my duties", C, true),
        likert(20, "I am interested in people", A, false),
        likert(21, "I feel others' emotions", A, false),
        likert(22, "I have a soft heart", A, false),
        likert(23, "I am not really interested in others", A, true),
        likert(24, "I am not interested in other people's problems", A, true),
        likert(25, "I feel little concern for others", A, true),
        likert(26, "I am hard to get to know", E, true),
        likert(27, "I am quiet around strangers", E, true),
        likert(28, "I don't like to draw attention to myself", E, true),
        likert(29, "I don't mind being the center of attention", E, false),
        likert(30, "I get stressed out easily", N, false),
        likert(31, "I am relaxed most of the time", N, true),
        likert(32, "I worry about things", N, false),
        likert(33, "I seldom feel blue", N, true),
        likert(34, "I am easily disturbed", N, false),
        likert(35, "I get upset easily", N, false),
        likert(36, "I change my mood a lot", N, false),
        likert(37, "I have frequent mood swings", N, false),
        likert(38, "I get irritated easily", N, false),
        likert(39, "I often feel blue", N, false),
    ]
}
