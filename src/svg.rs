use chrono::{Datelike, Weekday};

use crate::grid::{GridCell, MonthCursor, weekday_labels, weeks};
use crate::report::AgeReport;

const START_Y: i32 = 30;
const LINE_HEIGHT: i32 = 20;
const LEFT_PADDING: f32 = 15.0;
const GAP_BETWEEN_COLUMNS: f32 = 30.0;
const RIGHT_PADDING: f32 = 30.0;
const CHAR_WIDTH: f32 = 9.6;
const CELL_CHARS: usize = 3;
const MIN_RIGHT_COL_CHARS: usize = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
    pub today: &'static str,
    pub selected: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                key: "#ffa657",
                value: "#a5d6ff",
                cc: "#616e7f",
                today: "#3fb950",
                selected: "#f85149",
            },
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                text: "#24292f",
                key: "#d73a49",
                value: "#0366d6",
                cc: "#6a737d",
                today: "#1a7f37",
                selected: "#cf222e",
            },
        }
    }

    /// File name the card for this theme is written to.
    pub fn file_name(self) -> &'static str {
        match self {
            Theme::Dark => "dark_mode.svg",
            Theme::Light => "light_mode.svg",
        }
    }
}

/// What a card shows: one month of the picker and, optionally, a report.
pub struct Card<'a> {
    pub cursor: MonthCursor,
    pub grid: &'a [GridCell],
    pub week_start: Weekday,
    pub report: Option<&'a AgeReport>,
}

// Utilities for building SVG content

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.len() + value.len();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.len()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

fn cell_class(cell: &GridCell) -> &'static str {
    if cell.is_selected {
        "selected"
    } else if cell.is_today {
        "today"
    } else if !cell.in_month {
        "cc"
    } else {
        "value"
    }
}

// Builds the calendar column and returns (tspans, width, height)

fn build_calendar_column(card: &Card<'_>) -> (String, f32, f32) {
    let width_chars = CELL_CHARS * 7;
    let mut out = String::new();

    let header = card.cursor.label();
    let header_pad = width_chars.saturating_sub(header.len()) / 2;
    let header_x = LEFT_PADDING + header_pad as f32 * CHAR_WIDTH;
    out.push_str(&format!(
        "<tspan x=\"{header_x}\" y=\"{START_Y}\" class=\"key\">{}</tspan>\n",
        escape_xml(&header)
    ));

    let labels_y = START_Y + LINE_HEIGHT;
    for (i, label) in weekday_labels(card.week_start).iter().enumerate() {
        let x = LEFT_PADDING + (i * CELL_CHARS) as f32 * CHAR_WIDTH;
        out.push_str(&format!(
            "<tspan x=\"{x}\" y=\"{labels_y}\" class=\"cc\">{label}</tspan>\n"
        ));
    }

    let mut rows = 0;
    for (row, week) in weeks(card.grid).enumerate() {
        let y = START_Y + (row as i32 + 2) * LINE_HEIGHT;
        for (col, cell) in week.iter().enumerate() {
            let x = LEFT_PADDING + (col * CELL_CHARS) as f32 * CHAR_WIDTH;
            out.push_str(&format!(
                "<tspan x=\"{x}\" y=\"{y}\" class=\"{}\">{:>2}</tspan>\n",
                cell_class(cell),
                cell.date.day()
            ));
        }
        rows += 1;
    }

    let width_px = LEFT_PADDING + width_chars as f32 * CHAR_WIDTH;
    let height_px = (rows + 2) as f32 * LINE_HEIGHT as f32 + START_Y as f32;
    (out, width_px, height_px)
}

// Builds the right column content and returns (tspans, width, height)

fn build_right_column(
    card: &Card<'_>,
    left_width_px: f32,
    left_height_px: f32,
) -> (String, f32, f32) {
    enum Line {
        Header(String),
        Blank,
        Stat { k: String, d: String, v: String },
        Note(String),
    }

    let rows: Vec<(&str, String)> = match card.report {
        Some(report) => vec![
            ("Born", report.birth_date.format("%B %d, %Y").to_string()),
            ("Today", report.today.format("%B %d, %Y").to_string()),
            ("Age", report.age.to_string()),
            ("Next birthday", report.next_birthday.format("%B %d, %Y").to_string()),
            ("Countdown", report.countdown.to_string()),
        ],
        None => vec![("Born", "no date selected".to_string())],
    };

    let align_width = rows
        .iter()
        .map(|(k, v)| k.len() + 2 + v.len())
        .max()
        .unwrap_or(0)
        .max(MIN_RIGHT_COL_CHARS);

    let mut lines = vec![Line::Header(build_header_line("birthday", align_width))];
    for (key, value) in &rows {
        let (k, d, v) = build_stat_row(key, value, align_width);
        lines.push(Line::Stat { k, d, v });
    }
    if let Some(report) = card.report {
        lines.push(Line::Blank);
        lines.push(Line::Note(report.countdown.message()));
    }

    // Render
    let right_height_px = lines.len() as f32 * LINE_HEIGHT as f32 + START_Y as f32;
    let right_x = left_width_px + GAP_BETWEEN_COLUMNS;

    let mut right_tspans = String::new();
    for (i, line) in lines.iter().enumerate() {
        let y = START_Y + (i as i32) * LINE_HEIGHT;

        match line {
            Line::Blank => {}
            Line::Header(text) => {
                right_tspans.push_str(&format!(
                    r#"<tspan x="{right_x}" y="{y}">{}</tspan>
"#,
                    escape_xml(text)
                ));
            }
            Line::Note(text) => {
                right_tspans.push_str(&format!(
                    r#"<tspan x="{right_x}" y="{y}" class="today">{}</tspan>
"#,
                    escape_xml(text)
                ));
            }
            Line::Stat { k, d, v } => {
                right_tspans.push_str(&format!(
                    r#"<tspan x="{right_x}" y="{y}" class="cc">. </tspan>
<tspan class="key">{}</tspan><tspan class="cc">{}</tspan><tspan class="value">{}</tspan>
"#,
                    escape_xml(k),
                    escape_xml(d),
                    escape_xml(v)
                ));
            }
        }
    }

    let content_width = right_x + (align_width as f32 + 2.0) * CHAR_WIDTH + RIGHT_PADDING;
    let content_height = left_height_px.max(right_height_px) + 30.0;

    (right_tspans, content_width, content_height)
}

/// Main SVG generation function
pub fn generate_svg(card: &Card<'_>, theme: Theme) -> String {
    let colors = theme.colors();

    let (calendar_tspans, left_w, left_h) = build_calendar_column(card);
    let (right_tspans, w, h) = build_right_column(card, left_w, left_h);

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">

<style>
.key      {{ fill: {key}; }}
.value    {{ fill: {value}; }}
.cc       {{ fill: {cc}; }}
.today    {{ fill: {today}; font-weight: bold; }}
.selected {{ fill: {selected}; font-weight: bold; text-decoration: underline; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<!-- LEFT CALENDAR -->
<text fill="{text}" xml:space="preserve">
{calendar}
</text>

<!-- RIGHT COLUMN -->
<text fill="{text}">
{right}
</text>

</svg>
"#,
        w = w,
        h = h,
        bg = colors.bg,
        text = colors.text,
        key = colors.key,
        value = colors.value,
        cc = colors.cc,
        today = colors.today,
        selected = colors.selected,
        calendar = calendar_tspans,
        right = right_tspans
    )
}
