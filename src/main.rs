use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use traitcheck::bank::{self, QuestionBank};
use traitcheck::interactive;
use traitcheck::report::{self, TypeProfile};
use traitcheck::scoring::{self, Scorer, TestOutcome};
use traitcheck::tui::{self, TestKind};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID_ANSWERS: i32 = 1;
const EXIT_TERMINAL: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    /// Four-axis type questionnaire (E/I, S/N, T/F, J/P)
    Mbti,
    /// Big Five trait questionnaire
    Ocean,
}

impl From<Kind> for TestKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Mbti => TestKind::Mbti,
            Kind::Ocean => TestKind::Ocean,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take a questionnaire interactively (default if no subcommand)
    Take {
        /// Which questionnaire to take
        #[arg(value_enum)]
        kind: Option<Kind>,

        /// Only ask the first N questions
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Numbered prompts instead of the full-screen interface
        #[arg(long)]
        plain: bool,
    },
    /// Print the questions of a questionnaire
    Questions {
        /// Which questionnaire to print
        #[arg(value_enum)]
        kind: Kind,

        /// Print a random sample of N questions instead of the full bank
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Output as tab-separated values
        #[arg(long, conflicts_with = "json")]
        tsv: bool,
    },
    /// Score answers given on the command line
    Score {
        /// Which questionnaire the answers belong to
        #[arg(value_enum)]
        kind: Kind,

        /// Answers in bank order: option numbers for mbti, ratings 1-5 for
        /// ocean. Comma- or space-separated; "-" reads from stdin.
        #[arg(required = true)]
        answers: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the sixteen type profiles
    Types {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Output as tab-separated values
        #[arg(long, conflicts_with = "json")]
        tsv: bool,
    },
    /// Write the built-in question bank to an editable file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "traitcheck")]
#[command(about = "Personality questionnaires in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a question bank file (defaults to ~/.config/traitcheck/questions.yaml)
    #[arg(short, long, global = true)]
    bank: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Take {
        kind: None,
        count: None,
        plain: false,
    });

    match command {
        Commands::Init { force } => match bank::write_default_bank(cli.bank, force) {
            Ok(path) => {
                println!("Wrote question bank to {}", path.display());
                println!("Edit it and traitcheck will pick it up on the next run.");
            }
            Err(e) => {
                eprintln!("Init error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        },
        Commands::Take { kind, count, plain } => {
            let bank = load_validated_bank(cli.bank, cli.verbose);
            run_take(&bank, kind.unwrap_or(Kind::Mbti), count, plain);
        }
        Commands::Questions {
            kind,
            count,
            json,
            tsv,
        } => {
            let bank = load_validated_bank(cli.bank, cli.verbose);
            run_questions(&bank, kind, count, json, tsv);
        }
        Commands::Score { kind, answers, json } => {
            let bank = load_validated_bank(cli.bank, cli.verbose);
            run_score(&bank, kind, &answers, json, cli.verbose);
        }
        Commands::Types { json, tsv } => run_types(json, tsv),
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Load the question bank and exit with a config error if it is unusable.
fn load_validated_bank(path: Option<PathBuf>, verbose: bool) -> QuestionBank {
    let from_file = path.is_some() || bank::get_bank_path().exists();

    let bank = match bank::load_bank(path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Question bank error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = scoring::validate_bank(&bank) {
        eprintln!("Question bank errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if verbose {
        let source = if from_file { "file" } else { "built-in" };
        eprintln!(
            "Loaded {} mbti and {} ocean questions ({})",
            bank.mbti.len(),
            bank.ocean.len(),
            source
        );
    }

    bank
}

fn run_take(bank: &QuestionBank, kind: Kind, count: Option<usize>, plain: bool) {
    let use_tui = !plain && io::stdout().is_terminal() && io::stdin().is_terminal();

    if use_tui {
        match tui::run(kind.into(), bank, count) {
            Ok(Some(outcome)) => print_outcome(&outcome, false),
            Ok(None) => {} // Quit before finishing, nothing to report
            Err(e) => {
                eprintln!("Terminal error: {}", e);
                std::process::exit(EXIT_TERMINAL);
            }
        }
        return;
    }

    // Plain mode: numbered prompts over stdin/stdout
    let result = match kind {
        Kind::Mbti => {
            let questions = slice_questions(&bank.mbti, count);
            interactive::run_mbti(questions)
                .map(|answers| TestOutcome::Mbti(scoring::score_mbti(questions, &answers)))
        }
        Kind::Ocean => {
            let questions = slice_questions(&bank.ocean, count);
            interactive::run_ocean(questions).and_then(|answers| {
                scoring::score_ocean(questions, &answers)
                    .map(TestOutcome::Ocean)
                    .map_err(Into::into)
            })
        }
    };

    match result {
        Ok(outcome) => {
            println!();
            print_outcome(&outcome, false);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_INVALID_ANSWERS);
        }
    }
}

fn run_questions(bank: &QuestionBank, kind: Kind, count: Option<usize>, json: bool, tsv: bool) {
    let use_colors = report::should_use_colors();
    match kind {
        Kind::Mbti => {
            // A count returns a random sample without replacement; the full
            // list stays in bank order
            let questions = match count {
                Some(n) => bank.sample_mbti(n),
                None => bank.mbti.clone(),
            };
            if json {
                print_json(&questions);
            } else if tsv {
                println!("{}", report::format_mbti_questions_tsv(&questions));
            } else {
                println!("{}", report::format_mbti_questions(&questions, use_colors));
            }
        }
        Kind::Ocean => {
            let questions = match count {
                Some(n) => bank.sample_ocean(n),
                None => bank.ocean.clone(),
            };
            if json {
                print_json(&questions);
            } else if tsv {
                println!("{}", report::format_ocean_questions_tsv(&questions));
            } else {
                println!("{}", report::format_ocean_questions(&questions, use_colors));
            }
        }
    }
}

fn run_score(bank: &QuestionBank, kind: Kind, answers: &[String], json: bool, verbose: bool) {
    let input = gather_answer_input(answers);
    let scorer = Scorer::new(bank);

    let outcome = match kind {
        Kind::Mbti => match parse_mbti_answers(&input) {
            Ok(picks) => {
                log_truncation(verbose, picks.len(), bank.mbti.len());
                TestOutcome::Mbti(scorer.score_mbti(&picks))
            }
            Err(e) => {
                eprintln!("Answer error: {}", e);
                std::process::exit(EXIT_INVALID_ANSWERS);
            }
        },
        Kind::Ocean => {
            let ratings = match parse_ocean_answers(&input) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Answer error: {}", e);
                    std::process::exit(EXIT_INVALID_ANSWERS);
                }
            };
            log_truncation(verbose, ratings.len(), bank.ocean.len());
            match scorer.score_ocean(&ratings) {
                Ok(report) => TestOutcome::Ocean(report),
                Err(e) => {
                    eprintln!("Answer error: {}", e);
                    std::process::exit(EXIT_INVALID_ANSWERS);
                }
            }
        }
    };

    print_outcome(&outcome, json);
}

fn log_truncation(verbose: bool, answers: usize, questions: usize) {
    if verbose && answers != questions {
        eprintln!(
            "{} answers for {} questions; scoring the overlapping prefix",
            answers, questions
        );
    }
}

fn run_types(json: bool, tsv: bool) {
    let profiles = TypeProfile::all();
    if json {
        print_json(&profiles);
    } else if tsv {
        println!("{}", report::format_types_tsv(profiles));
    } else {
        println!("{}", report::format_types_table(profiles, report::should_use_colors()));
    }
}

fn print_outcome(outcome: &TestOutcome, json: bool) {
    let use_colors = report::should_use_colors();
    match outcome {
        TestOutcome::Mbti(r) => {
            if json {
                print_json(r);
            } else {
                println!("{}", report::format_mbti_report(r, use_colors));
            }
        }
        TestOutcome::Ocean(r) => {
            if json {
                print_json(r);
            } else {
                println!("{}", report::format_ocean_report(r, use_colors));
            }
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}

fn slice_questions<T>(questions: &[T], count: Option<usize>) -> &[T] {
    match count {
        Some(count) => &questions[..count.min(questions.len())],
        None => questions,
    }
}

/// Collect the raw answer input, reading stdin when the single answer is "-".
fn gather_answer_input(answers: &[String]) -> String {
    if answers.len() == 1 && answers[0] == "-" {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("Failed to read answers from stdin: {}", e);
            std::process::exit(EXIT_INVALID_ANSWERS);
        }
        buf
    } else {
        answers.join(" ")
    }
}

fn split_answer_list(input: &str) -> Vec<&str> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parse mbti answers as 1-based option numbers into 0-based picks.
fn parse_mbti_answers(input: &str) -> Result<Vec<usize>, String> {
    let mut picks = Vec::new();
    for token in split_answer_list(input) {
        let number: usize = token
            .parse()
            .map_err(|_| format!("invalid answer '{}': expected an option number", token))?;
        if number == 0 {
            return Err(format!(
                "invalid answer '{}': option numbers are 1-based",
                token
            ));
        }
        picks.push(number - 1);
    }
    Ok(picks)
}

/// Parse ocean answers as Likert ratings. Range checking happens in the
/// scorer, which only validates answers that pair with a question.
fn parse_ocean_answers(input: &str) -> Result<Vec<u8>, String> {
    let mut ratings = Vec::new();
    for token in split_answer_list(input) {
        let value: u8 = token
            .parse()
            .map_err(|_| format!("invalid answer '{}': expected a rating from 1 to 5", token))?;
        ratings.push(value);
    }
    Ok(ratings)
}
