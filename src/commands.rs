use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context as _, Result, anyhow, bail};
use birthday_picker::grid::{check_year, weekday_labels, weeks};
use birthday_picker::svg::{self, Card, Theme};
use birthday_picker::{
    GridCell, Intent, MonthCursor, PickerState, Step, build_report, generate_month_grid,
};
use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::cli::{AgeArgs, CalendarArgs, Cli, RenderArgs};
use crate::config::PickerConfig;

/// Settings shared by every subcommand, with CLI flags applied over config.
pub struct Context {
    /// Captured once per invocation.
    pub today: NaiveDate,
    pub week_start: Weekday,
    pub config: PickerConfig,
}

impl Context {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = PickerConfig::load(cli.config.as_deref())?;
        let today = cli
            .today
            .or(config.today)
            .unwrap_or_else(|| Local::now().date_naive());
        check_year(today.year()).context("unsupported value for today")?;
        let week_start: Weekday = cli.week_start.unwrap_or(config.week_start).into();
        tracing::debug!(%today, ?week_start, "resolved context");
        Ok(Self {
            today,
            week_start,
            config,
        })
    }

    fn birth_date(&self, arg: Option<NaiveDate>) -> Result<NaiveDate> {
        arg.or(self.config.birth_date)
            .ok_or_else(|| anyhow!("no birth date given on the command line or in config"))
    }
}

pub fn age(ctx: &Context, args: AgeArgs) -> Result<()> {
    let birth = ctx.birth_date(args.birth_date)?;
    let report = build_report(birth, ctx.today)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Age: {}", report.age);
        println!(
            "Next birthday: {} ({})",
            report.next_birthday.format("%B %d, %Y"),
            report.countdown
        );
        println!("{}", report.countdown.message());
    }
    Ok(())
}

pub fn calendar(ctx: &Context, args: CalendarArgs) -> Result<()> {
    let year = args.year.unwrap_or(ctx.today.year());
    let month = args.month.unwrap_or(ctx.today.month());
    let cursor = MonthCursor::new(year, month)?;
    let grid = generate_month_grid(cursor, ctx.today, args.select, ctx.week_start);
    print!("{}", text_grid(cursor, &grid, ctx.week_start));
    Ok(())
}

/// Writes the dark and light cards.
pub fn render(ctx: &Context, args: RenderArgs) -> Result<()> {
    let birth = args.birth.or(ctx.config.birth_date);
    let cards = render_cards(ctx.today, ctx.week_start, birth)?;

    let out_dir = args.out_dir.unwrap_or_else(|| ctx.config.out_dir.clone());
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    for (theme, svg) in cards {
        let path = out_dir.join(theme.file_name());
        fs::write(&path, svg).with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), ?theme, "wrote card");
    }

    println!(
        "Generated {} and {} successfully.",
        Theme::Dark.file_name(),
        Theme::Light.file_name()
    );
    Ok(())
}

/// With a birth date the grid shows the birth month with that day selected,
/// as the picker does after a pick. Without one it shows today's month and
/// no report.
fn render_cards(
    today: NaiveDate,
    week_start: Weekday,
    birth: Option<NaiveDate>,
) -> Result<Vec<(Theme, String)>> {
    let report = birth.map(|b| build_report(b, today)).transpose()?;
    let cursor = MonthCursor::containing(birth.unwrap_or(today))?;
    let grid = generate_month_grid(cursor, today, birth, week_start);
    let card = Card {
        cursor,
        grid: &grid,
        week_start,
        report: report.as_ref(),
    };

    Ok([Theme::Dark, Theme::Light]
        .into_iter()
        .map(|theme| (theme, svg::generate_svg(&card, theme)))
        .collect())
}

pub fn picker(ctx: &Context) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut state = PickerState::new(ctx.today)?;

    writeln!(stdout, "{}", view(&state, ctx.week_start))?;
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let intent = match parse_intent(&line) {
            Ok(Some(intent)) => intent,
            Ok(None) => break,
            Err(e) => {
                writeln!(stdout, "{e}")?;
                continue;
            }
        };
        state = state.apply(intent);
        writeln!(stdout, "{}", view(&state, ctx.week_start))?;
    }
    Ok(())
}

/// Maps one input line to an intent. `Ok(None)` ends the session.
fn parse_intent(line: &str) -> Result<Option<Intent>> {
    let mut words = line.split_whitespace();
    let intent = match (words.next(), words.next()) {
        (Some("quit" | "exit"), None) => return Ok(None),
        (Some("open" | "toggle"), None) => Intent::TogglePicker,
        (Some("close"), None) => Intent::ClosePicker,
        (Some("prev"), None) => Intent::NavigateMonth(Step::Previous),
        (Some("next"), None) => Intent::NavigateMonth(Step::Next),
        (Some("years"), None) => Intent::ToggleYearDropdown,
        (Some("year"), Some(year)) => Intent::SelectYear(
            year.parse()
                .with_context(|| format!("not a year: {year}"))?,
        ),
        (Some("select"), Some(date)) => Intent::SelectDate(
            date.parse()
                .with_context(|| format!("not a date (YYYY-MM-DD): {date}"))?,
        ),
        (Some("submit"), None) => Intent::Submit,
        _ => bail!(
            "unknown command {line:?}; try open, close, prev, next, years, \
             year N, select YYYY-MM-DD, submit, quit"
        ),
    };
    Ok(Some(intent))
}

fn view(state: &PickerState, week_start: Weekday) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Birth date: {}\n",
        state.input_text().unwrap_or_else(|| "-".to_string())
    ));

    if state.picker_open {
        out.push_str(&text_grid(state.cursor, &state.grid(week_start), week_start));
        if state.year_dropdown_open {
            let mut years = state.year_options();
            if let (Some(newest), Some(oldest)) = (years.next(), years.last()) {
                out.push_str(&format!("Years: {} .. {}", newest.year, oldest.year));
                if let Some(current) = state.year_options().find(|o| o.selected) {
                    out.push_str(&format!(" [{}]", current.year));
                }
                out.push('\n');
            }
        }
    }

    match &state.outcome {
        Some(Ok(report)) => {
            out.push_str(&format!("Age: {}\n", report.age));
            out.push_str(&format!("{}\n", report.countdown.message()));
        }
        Some(Err(e)) => out.push_str(&format!("Error: {e}\n")),
        None => {}
    }
    out
}

/// Plain-text month grid. Today is bracketed, the selected day starred.
fn text_grid(cursor: MonthCursor, grid: &[GridCell], week_start: Weekday) -> String {
    let mut out = format!("{:^28}\n", cursor.label());
    for label in weekday_labels(week_start) {
        out.push_str(&format!(" {label} "));
    }
    out.push('\n');

    for week in weeks(grid) {
        for cell in week {
            let day = if cell.in_month {
                format!("{:>2}", cell.date.day())
            } else {
                "  ".to_string()
            };
            let (open, close) = match (cell.is_today, cell.is_selected) {
                (_, true) => ('*', '*'),
                (true, false) => ('[', ']'),
                _ => (' ', ' '),
            };
            out.push(open);
            out.push_str(&day);
            out.push(close);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_intents() {
        assert_eq!(parse_intent("open").unwrap(), Some(Intent::TogglePicker));
        assert_eq!(
            parse_intent("prev").unwrap(),
            Some(Intent::NavigateMonth(Step::Previous))
        );
        assert_eq!(parse_intent("year 1990").unwrap(), Some(Intent::SelectYear(1990)));
        assert_eq!(
            parse_intent("select 1990-06-15").unwrap(),
            Some(Intent::SelectDate(d(1990, 6, 15)))
        );
        assert_eq!(parse_intent("quit").unwrap(), None);
    }

    #[test]
    fn rejects_bad_intents() {
        assert!(parse_intent("year abc").is_err());
        assert!(parse_intent("select 1990-02-30").is_err());
        assert!(parse_intent("dance").is_err());
    }

    #[test]
    fn text_grid_marks_today_and_selection() {
        let today = d(2024, 6, 15);
        let cursor = MonthCursor::containing(today).unwrap();
        let grid = generate_month_grid(cursor, today, Some(d(2024, 6, 3)), Weekday::Mon);
        let text = text_grid(cursor, &grid, Weekday::Mon);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 + 5);
        assert!(lines[0].contains("June 2024"));
        assert!(lines[1].starts_with(" Mo "));
        assert!(text.contains("[15]"));
        assert!(text.contains("* 3*"));
    }

    #[test]
    fn view_shows_submit_error() {
        let state = PickerState::new(d(2024, 6, 15)).unwrap().apply(Intent::Submit);
        let text = view(&state, Weekday::Mon);
        assert!(text.contains("Error: no birth date selected"));
    }

    #[test]
    fn view_marks_cursor_year_in_dropdown() {
        let state = PickerState::new(d(2024, 6, 15))
            .unwrap()
            .apply(Intent::TogglePicker)
            .apply(Intent::ToggleYearDropdown);
        let text = view(&state, Weekday::Mon);
        assert!(text.contains("Years: 2034 .. 1900 [2024]"));
    }

    #[test]
    fn rendered_card_selects_birth_day() {
        let cards = render_cards(d(2024, 6, 15), Weekday::Mon, Some(d(1990, 3, 7))).unwrap();
        assert_eq!(cards.len(), 2);
        for (_, svg) in &cards {
            assert!(svg.contains("March 1990"));
            assert_eq!(svg.matches("class=\"selected\"> 7<").count(), 1);
            assert!(svg.contains("34 years, 3 months, 8 days"));
        }
    }

    #[test]
    fn rendered_card_without_birth_date() {
        let cards = render_cards(d(2024, 6, 15), Weekday::Mon, None).unwrap();
        let (theme, svg) = &cards[1];
        assert_eq!(*theme, Theme::Light);
        assert!(svg.contains("June 2024"));
        assert!(svg.contains("no date selected"));
        assert!(!svg.contains("class=\"selected\">"));
    }

    #[test]
    fn rendered_card_rejects_future_birth() {
        let err = render_cards(d(2024, 6, 15), Weekday::Mon, Some(d(2025, 1, 1))).unwrap_err();
        assert!(err.to_string().contains("cannot be in the future"));
    }
}
