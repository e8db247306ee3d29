use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, List, ListItem, Paragraph, Wrap};

use crate::bank::{MbtiLetter, OceanTrait};
use crate::report::TypeProfile;
use crate::scoring::{MbtiReport, OceanReport, TestOutcome, TraitLevel};
use crate::tui::app::{App, Screen, TestKind};
use crate::tui::theme::ThemeColors;

const AXIS_BAR_WIDTH: usize = 12;
const TRAIT_BAR_WIDTH: usize = 20;
const LIKERT_MAX: f64 = 5.0;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 10 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    match app.screen {
        Screen::Intro => render_intro(frame, app),
        Screen::Question => render_question(frame, app),
        Screen::Results => render_results(frame, app),
    }
}

fn render_intro(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(52, 9, frame.area());

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" traitcheck ")
        .border_style(Style::default().fg(app.theme.popup_border));
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let (test_name, instruction) = match app.items.kind() {
        TestKind::Mbti => ("MBTI questionnaire", "Pick the option that fits you best."),
        TestKind::Ocean => (
            "Big Five questionnaire",
            "Rate how well each statement describes you.",
        ),
    };

    let lines = vec![
        Line::from(Span::styled(test_name, Style::new().bold())),
        Line::from(""),
        Line::from(format!(
            "{} questions. There are no right answers.",
            app.items.len()
        )),
        Line::from(instruction),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(app.theme.status_key_color)),
            Span::raw(":start  "),
            Span::styled("q", Style::default().fg(app.theme.status_key_color)),
            Span::raw(":quit"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_question(frame: &mut Frame, app: &mut App) {
    // Layout: Title(1) + Progress(1) + gap + Question(4) + Options(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    render_title(frame, chunks[0], app);
    render_progress(frame, chunks[1], app);

    let question = Paragraph::new(app.items.prompt(app.current).to_string())
        .style(Style::new().bold())
        .wrap(Wrap { trim: true });
    frame.render_widget(question, chunks[3]);

    render_options(frame, chunks[4], app);
    render_status_bar(frame, chunks[5], app);
}

fn render_results(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    render_title(frame, chunks[0], app);

    let body = match &app.outcome {
        Some(TestOutcome::Mbti(report)) => mbti_result_lines(report, &app.theme),
        Some(TestOutcome::Ocean(report)) => ocean_result_lines(report, &app.theme),
        None => vec![Line::from("No result")],
    };
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), chunks[2]);

    render_status_bar(frame, chunks[3], app);
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    // Build title with the test name on the right
    let mut spans = vec![Span::styled(
        "traitcheck",
        Style::default().fg(app.theme.title_color).bold(),
    )];

    let right_text = match app.items.kind() {
        TestKind::Mbti => "MBTI",
        TestKind::Ocean => "Big Five",
    };
    let padding_len = (area.width as usize).saturating_sub("traitcheck".len() + right_text.len());
    spans.push(Span::raw(" ".repeat(padding_len)));
    spans.push(Span::styled(
        right_text,
        Style::default().fg(app.theme.muted),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let total = app.items.len();
    let label = format!("Question {} of {}", app.current + 1, total);
    let ratio = (app.current + 1) as f64 / total as f64;
    let percent = format!("{:.0}% complete", ratio * 100.0);

    let bar_width = (area.width as usize)
        .saturating_sub(label.len() + percent.len() + 4)
        .min(30);

    let mut spans = vec![
        Span::styled(label, Style::default().fg(app.theme.muted)),
        Span::raw("  "),
    ];
    spans.extend(ratio_bar_spans(ratio, bar_width, &app.theme));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(percent, Style::default().fg(app.theme.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &mut App) {
    let items: Vec<ListItem> = app
        .items
        .options(app.current)
        .iter()
        .enumerate()
        .map(|(i, option)| ListItem::new(format!("{}) {}", i + 1, option)))
        .collect();

    let list = List::new(items)
        .highlight_style(app.theme.option_selected)
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.option_state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(app.theme.flash_color),
        ))
    } else {
        // Build hints with colored shortcut keys
        let hints: &[(&str, &str)] = match app.screen {
            Screen::Intro => &[("Enter", ":start "), ("q", ":quit")],
            Screen::Question => &[
                ("j/k", ":move "),
                ("1-9", ":pick "),
                ("Enter", ":confirm "),
                ("Left", ":back "),
                ("q", ":quit"),
            ],
            Screen::Results => &[("q", ":quit")],
        };

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                *key,
                Style::default().fg(app.theme.status_key_color),
            ));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(app.theme.status_bar_bg)),
        area,
    );
}

fn mbti_result_lines(report: &MbtiReport, theme: &ThemeColors) -> Vec<Line<'static>> {
    let profile = TypeProfile::lookup(&report.mbti_type);

    let mut lines = Vec::new();
    let heading = match profile {
        Some(profile) => format!("You are {} - {}", report.mbti_type, profile.name),
        None => format!("You are {}", report.mbti_type),
    };
    lines.push(Line::from(Span::styled(heading, Style::new().bold())));
    if let Some(profile) = profile {
        lines.push(Line::from(Span::styled(
            profile.description,
            Style::default().fg(theme.muted),
        )));
    }
    lines.push(Line::from(""));

    for (first, second) in MbtiLetter::AXES {
        let share_first = report.breakdown.get(&first).copied().unwrap_or(0.5);
        let share_second = report.breakdown.get(&second).copied().unwrap_or(0.5);

        let mut spans = vec![Span::raw(format!("{} ", first.as_char()))];
        spans.extend(ratio_bar_spans(share_first, AXIS_BAR_WIDTH, theme));
        spans.push(Span::raw(format!(
            " {:>3.0}%   {} ",
            share_first * 100.0,
            second.as_char()
        )));
        spans.extend(ratio_bar_spans(share_second, AXIS_BAR_WIDTH, theme));
        spans.push(Span::raw(format!(" {:>3.0}%", share_second * 100.0)));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Confidence: {:.0}%",
        report.confidence * 100.0
    )));
    if report.answered == 0 {
        lines.push(Line::from(Span::styled(
            "No answers were scored; this is the neutral default.",
            Style::default().fg(theme.muted),
        )));
    }
    lines
}

fn ocean_result_lines(report: &OceanReport, theme: &ThemeColors) -> Vec<Line<'static>> {
    let name_width = OceanTrait::ALL
        .iter()
        .map(|t| t.name().len())
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        Line::from(Span::styled("Your Big Five profile", Style::new().bold())),
        Line::from(""),
    ];
    for trait_ in OceanTrait::ALL {
        let score = report.scores.get(&trait_).copied().unwrap_or(0.0);
        let level = report
            .interpretation
            .get(&trait_)
            .copied()
            .unwrap_or(TraitLevel::Low);
        let level_color = match level {
            TraitLevel::High => theme.level_high,
            TraitLevel::Low => theme.level_low,
        };

        let mut spans = vec![Span::raw(format!(
            "{:<width$}  {:.1}  ",
            trait_.name(),
            score,
            width = name_width
        ))];
        spans.extend(ratio_bar_spans(score / LIKERT_MAX, TRAIT_BAR_WIDTH, theme));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            level.as_str(),
            Style::default().fg(level_color),
        ));
        lines.push(Line::from(spans));
    }

    if report.answered == 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No answers were scored.",
            Style::default().fg(theme.muted),
        )));
    }
    lines
}

fn ratio_bar_spans(ratio: f64, width: usize, theme: &ThemeColors) -> Vec<Span<'static>> {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);
    let empty = width - filled;

    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled(
            "█".repeat(filled),
            Style::default().fg(theme.bar_filled),
        ));
    }
    if empty > 0 {
        spans.push(Span::styled(
            "░".repeat(empty),
            Style::default().fg(theme.bar_empty),
        ));
    }
    spans
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    // Calculate centered position
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}
