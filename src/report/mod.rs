pub mod formatter;
pub mod profiles;

pub use formatter::{
    format_mbti_questions, format_mbti_questions_tsv, format_mbti_report, format_ocean_questions,
    format_ocean_questions_tsv, format_ocean_report, format_types_table, format_types_tsv,
    should_use_colors,
};
pub use profiles::TypeProfile;
