use std::time::Instant;

use ratatui::widgets::ListState;

use crate::bank::{MbtiQuestion, OceanQuestion};
use crate::scoring::{score_mbti, score_ocean, TestOutcome};
use crate::tui::theme::ThemeColors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    Mbti,
    Ocean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Question,
    Results,
}

/// The questions a session walks through, in scoring order.
#[derive(Debug, Clone)]
pub enum Items {
    Mbti(Vec<MbtiQuestion>),
    Ocean(Vec<OceanQuestion>),
}

impl Items {
    pub fn kind(&self) -> TestKind {
        match self {
            Items::Mbti(_) => TestKind::Mbti,
            Items::Ocean(_) => TestKind::Ocean,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Items::Mbti(questions) => questions.len(),
            Items::Ocean(questions) => questions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn prompt(&self, index: usize) -> &str {
        match self {
            Items::Mbti(questions) => &questions[index].text,
            Items::Ocean(questions) => &questions[index].text,
        }
    }

    pub fn options(&self, index: usize) -> &[String] {
        match self {
            Items::Mbti(questions) => &questions[index].options,
            Items::Ocean(questions) => &questions[index].options,
        }
    }
}

pub struct App {
    pub items: Items,
    pub picks: Vec<usize>,
    pub current: usize,
    pub option_state: ListState,
    pub screen: Screen,
    pub theme: ThemeColors,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub outcome: Option<TestOutcome>,
}

impl App {
    pub fn new(items: Items, theme: ThemeColors) -> Self {
        let mut option_state = ListState::default();
        option_state.select(Some(0));

        Self {
            items,
            picks: Vec::new(),
            current: 0,
            option_state,
            screen: Screen::Intro,
            theme,
            flash_message: None,
            should_quit: false,
            outcome: None,
        }
    }

    /// Leave the intro screen. An empty question list scores straight away.
    pub fn start(&mut self) {
        if self.items.is_empty() {
            self.finish();
        } else {
            self.screen = Screen::Question;
        }
    }

    pub fn option_count(&self) -> usize {
        self.items.options(self.current).len()
    }

    pub fn next_option(&mut self) {
        let count = self.option_count();
        if count == 0 {
            return;
        }
        let i = match self.option_state.selected() {
            Some(i) => {
                if i >= count - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.option_state.select(Some(i));
    }

    pub fn previous_option(&mut self) {
        let count = self.option_count();
        if count == 0 {
            return;
        }
        let i = match self.option_state.selected() {
            Some(i) => {
                if i == 0 {
                    count - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.option_state.select(Some(i));
    }

    /// Record the highlighted option and advance, scoring after the last
    /// question.
    pub fn confirm(&mut self) {
        let pick = self.option_state.selected().unwrap_or(0);
        self.picks.push(pick);
        if self.picks.len() == self.items.len() {
            self.finish();
        } else {
            self.current += 1;
            self.option_state.select(Some(0));
        }
    }

    /// Quick-select an option by its 1-based number.
    pub fn pick_number(&mut self, number: usize) {
        if number >= 1 && number <= self.option_count() {
            self.option_state.select(Some(number - 1));
            self.confirm();
        }
    }

    /// Step back to the previous question, restoring its pick.
    pub fn revisit_previous(&mut self) {
        match self.picks.pop() {
            Some(previous_pick) => {
                self.current = self.current.saturating_sub(1);
                self.option_state.select(Some(previous_pick));
            }
            None => self.show_flash("Already at the first question".to_string()),
        }
    }

    fn finish(&mut self) {
        let outcome = match &self.items {
            Items::Mbti(questions) => TestOutcome::Mbti(score_mbti(questions, &self.picks)),
            Items::Ocean(questions) => {
                // Option cursors are 0-based; the Likert scale is 1-5
                let responses: Vec<u8> = self.picks.iter().map(|&pick| pick as u8 + 1).collect();
                match score_ocean(questions, &responses) {
                    Ok(report) => TestOutcome::Ocean(report),
                    Err(e) => {
                        // Unreachable with picks bounded by the option list
                        self.show_flash(format!("Scoring failed: {}", e));
                        return;
                    }
                }
            }
        };
        self.outcome = Some(outcome);
        self.screen = Screen::Results;
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{MbtiLetter, OceanTrait, LIKERT_OPTIONS};

    fn question(id: u32, first: MbtiLetter, second: MbtiLetter) -> MbtiQuestion {
        MbtiQuestion {
            id,
            text: format!("Question {}", id),
            options: vec!["First".to_string(), "Second".to_string()],
            dimensions: vec![first, second],
        }
    }

    fn mbti_app() -> App {
        let items = Items::Mbti(vec![
            question(1, MbtiLetter::E, MbtiLetter::I),
            question(2, MbtiLetter::J, MbtiLetter::P),
        ]);
        App::new(items, ThemeColors::dark())
    }

    #[test]
    fn test_starts_on_intro() {
        let mut app = mbti_app();
        assert_eq!(app.screen, Screen::Intro);
        app.start();
        assert_eq!(app.screen, Screen::Question);
        assert_eq!(app.current, 0);
    }

    #[test]
    fn test_confirm_walks_to_results() {
        let mut app = mbti_app();
        app.start();
        app.confirm();
        assert_eq!(app.current, 1);

        app.next_option();
        app.confirm();
        assert_eq!(app.screen, Screen::Results);
        assert_eq!(app.picks, vec![0, 1]);

        // E from the first pick, P from the second, ties fall to N and F
        match app.outcome {
            Some(TestOutcome::Mbti(ref report)) => assert_eq!(report.mbti_type, "ENFP"),
            _ => panic!("expected an MBTI outcome"),
        }
    }

    #[test]
    fn test_option_navigation_wraps() {
        let mut app = mbti_app();
        app.start();
        assert_eq!(app.option_state.selected(), Some(0));
        app.next_option();
        assert_eq!(app.option_state.selected(), Some(1));
        app.next_option();
        assert_eq!(app.option_state.selected(), Some(0));
        app.previous_option();
        assert_eq!(app.option_state.selected(), Some(1));
    }

    #[test]
    fn test_pick_number() {
        let mut app = mbti_app();
        app.start();
        app.pick_number(2);
        assert_eq!(app.picks, vec![1]);
        assert_eq!(app.current, 1);

        // Out-of-range numbers are ignored
        app.pick_number(9);
        app.pick_number(0);
        assert_eq!(app.picks, vec![1]);
    }

    #[test]
    fn test_revisit_restores_pick() {
        let mut app = mbti_app();
        app.start();
        app.pick_number(2);

        app.revisit_previous();
        assert_eq!(app.current, 0);
        assert!(app.picks.is_empty());
        assert_eq!(app.option_state.selected(), Some(1));

        // Nothing left to pop
        app.revisit_previous();
        assert!(app.flash_message.is_some());
    }

    #[test]
    fn test_empty_items_score_immediately() {
        let mut app = App::new(Items::Mbti(vec![]), ThemeColors::dark());
        app.start();
        assert_eq!(app.screen, Screen::Results);
        match app.outcome {
            Some(TestOutcome::Mbti(ref report)) => {
                assert_eq!(report.answered, 0);
                assert_eq!(report.mbti_type, "INFP");
            }
            _ => panic!("expected an MBTI outcome"),
        }
    }

    #[test]
    fn test_ocean_picks_score_as_ratings() {
        let items = Items::Ocean(vec![OceanQuestion {
            id: 1,
            text: "Statement".to_string(),
            options: LIKERT_OPTIONS.iter().map(|s| s.to_string()).collect(),
            dimension: OceanTrait::Openness,
            reverse: false,
        }]);
        let mut app = App::new(items, ThemeColors::dark());
        app.start();
        app.pick_number(5);

        assert_eq!(app.screen, Screen::Results);
        match app.outcome {
            Some(TestOutcome::Ocean(ref report)) => {
                assert_eq!(report.scores[&OceanTrait::Openness], 5.0);
            }
            _ => panic!("expected a Big Five outcome"),
        }
    }
}
