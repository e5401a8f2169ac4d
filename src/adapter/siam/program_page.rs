//! Program Page Parser
//!
//! SIAMのプログラムページ（`program.cfm?CONFCODE=...`）からセッション一覧を抽出する
//!
//! ページは1つの表で構成されている:
//!
//! - `<td colspan>` を含む行: 日の見出し（曜日名を含む場合）
//! - 3セルの行: 新しい時間帯（時刻 / セッション / 部屋）
//! - 2セルの行: 直前の時間帯と並行するセッション（セッション / 部屋）
//!
//! 構造が合わない行は黙って読み飛ばす

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::links::resolve_href;
use crate::domain::entities::program::{ConferenceProgram, DEFAULT_HEADING};
use crate::domain::entities::session::{Session, TimeSlot};
use crate::domain::services::session_filter::SessionFilter;

static HEADING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1, h2").expect("valid heading selector"));
static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("valid row selector"));
static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("valid cell selector"));
static SPANNING_CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td[colspan]").expect("valid colspan selector"));
static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid link selector"));
static WEEKDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)\b")
        .expect("valid weekday regex")
});

/// 要素内のテキストノードを trim して空白1つで連結する
pub(crate) fn collapsed_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// セル内の最初のリンク（タイトルと解決済みURL）
fn first_link(cell: &ElementRef, page_url: &str) -> Option<(String, String)> {
    let link = cell.select(&LINK_SELECTOR).next()?;
    let href = link.value().attr("href")?;
    Some((collapsed_text(&link), resolve_href(page_url, href)))
}

/// ページの見出し（最初の `<h1>` または `<h2>`）
pub fn extract_heading(document: &Html) -> String {
    document
        .select(&HEADING_SELECTOR)
        .next()
        .map(|h| collapsed_text(&h))
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| DEFAULT_HEADING.to_string())
}

/// プログラムページを解析する
///
/// # Arguments
///
/// * `html` - プログラムページのHTML
/// * `page_url` - 相対リンク解決の基準URL
/// * `filter` - トークセッションの判定
///
/// # Returns
///
/// ソース順のセッションを持つプログラム（トークはまだ空）
pub fn parse_program_page(html: &str, page_url: &str, filter: &SessionFilter) -> ConferenceProgram {
    let document = Html::parse_document(html);
    let heading = extract_heading(&document);
    info!("Extracted main heading: {}", heading);

    let mut program = ConferenceProgram::new(heading, page_url);
    let mut current_day: Option<String> = None;
    let mut last_time_text = String::new();

    for row in document.select(&ROW_SELECTOR) {
        if let Some(spanning) = row.select(&SPANNING_CELL_SELECTOR).next() {
            let text = collapsed_text(&spanning);
            if WEEKDAY_RE.is_match(&text) {
                info!("Detected new day: {}", text);
                current_day = Some(text);
            }
            continue;
        }

        let cells: Vec<ElementRef> = row.select(&CELL_SELECTOR).collect();
        let session = match cells.len() {
            0 => continue,
            3 => {
                last_time_text = collapsed_text(&cells[0]);
                let Some(slot) = TimeSlot::parse(&last_time_text) else {
                    debug!("Could not extract time from text: {}", last_time_text);
                    continue;
                };
                let Some((title, url)) = first_link(&cells[1], page_url) else {
                    continue;
                };

                let mut session = Session::new(SessionFilter::clean_title(&title), url);
                session.day = current_day.clone();
                session.time_slot = Some(slot);
                session.room = collapsed_text(&cells[2]);
                session
            }
            2 => {
                if current_day.is_none() {
                    debug!("Additional session row without a current day. Skipping.");
                    continue;
                }

                let mut session = match first_link(&cells[0], page_url) {
                    Some((title, url)) => Session::new(SessionFilter::clean_title(&title), url),
                    None => {
                        let title = SessionFilter::clean_title(&collapsed_text(&cells[0]));
                        debug!("No link found for session '{}'. Using '#'.", title);
                        Session::new(title, Session::NO_LINK)
                    }
                };
                session.day = current_day.clone();
                session.room = collapsed_text(&cells[1]);

                // 並行セッションは同じ日の直前のセッションの時刻を引き継ぐ。
                // 部屋のセルが空のときは部屋も引き継ぐ
                match program.sessions.iter().rev().find(|s| s.day == current_day) {
                    Some(previous) => {
                        session.time_slot = previous.time_slot.clone();
                        if session.room.is_empty() {
                            session.room = previous.room.clone();
                        }
                    }
                    None => {
                        session.time_slot = TimeSlot::parse(&last_time_text);
                    }
                }
                session
            }
            n => {
                debug!("Skipping row with unexpected number of <td>: {}", n);
                continue;
            }
        };

        if !filter.is_talk_session(&session.title) {
            debug!("Omitting non-talk session: '{}'", session.title);
            continue;
        }

        debug!(
            "Parsed session: {:?}, {}, {}",
            session.day,
            session.time_slot.as_ref().map(TimeSlot::label).unwrap_or_default(),
            session.title
        );
        program.sessions.push(session);
    }

    info!("Total sessions parsed: {}", program.sessions.len());
    program
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_URL: &str = "https://meetings.siam.org/program.cfm?CONFCODE=SODA25";

    fn parse(html: &str) -> ConferenceProgram {
        parse_program_page(html, PAGE_URL, &SessionFilter::default())
    }

    #[test]
    fn test_heading_default_when_missing() {
        let program = parse("<html><body><table></table></body></html>");
        assert_eq!(program.heading, DEFAULT_HEADING);
        assert!(program.is_empty());
    }

    #[test]
    fn test_heading_prefers_first_h1_or_h2() {
        let program = parse("<h2>2025 SODA</h2><h1>Other</h1>");
        assert_eq!(program.heading, "2025 SODA");
    }

    #[test]
    fn test_parses_new_slot_row() {
        let html = r#"<table>
            <tr><td colspan="3">Sunday, January 12</td></tr>
            <tr>
              <td>9:00 AM - 10:40 AM</td>
              <td><a href="sess/dsp_programsess.cfm?SESSIONCODE=1">CP1 SODA Session 1A</a></td>
              <td>Salon A</td>
            </tr>
        </table>"#;

        let program = parse(html);

        assert_eq!(program.sessions.len(), 1);
        let session = &program.sessions[0];
        assert_eq!(session.title, "SODA Session 1A");
        assert_eq!(session.day.as_deref(), Some("Sunday, January 12"));
        assert_eq!(session.room, "Salon A");
        assert_eq!(
            session.url,
            "https://meetings.siam.org/sess/dsp_programsess.cfm?SESSIONCODE=1"
        );
        let slot = session.time_slot.as_ref().unwrap();
        assert_eq!(slot.start, "9:00 AM");
        assert_eq!(slot.end.as_deref(), Some("10:40 AM"));
    }

    #[test]
    fn test_concurrent_row_inherits_time_and_keeps_own_room() {
        let html = r#"<table>
            <tr><td colspan="3">Monday, January 13</td></tr>
            <tr><td>1:30 PM - 3:10 PM</td><td><a href="https://meetings.siam.org/sess/a">SODA Session 5A</a></td><td>Room 1</td></tr>
            <tr><td><a href="https://meetings.siam.org/sess/b">ALENEX Session 5</a></td><td>Room 2</td></tr>
            <tr><td>SOSA Session Without Link</td><td>Room 3</td></tr>
        </table>"#;

        let program = parse(html);

        assert_eq!(program.sessions.len(), 3);
        let b = &program.sessions[1];
        assert_eq!(b.title, "ALENEX Session 5");
        assert_eq!(b.url, "https://meetings.siam.org/sess/b");
        assert_eq!(b.room, "Room 2");
        assert_eq!(b.time_slot.as_ref().unwrap().start, "1:30 PM");

        let c = &program.sessions[2];
        assert_eq!(c.title, "SOSA Session Without Link");
        assert_eq!(c.url, "#");
        assert_eq!(c.room, "Room 3");
    }

    #[test]
    fn test_concurrent_row_with_empty_room_cell_inherits_room() {
        let html = r#"<table>
            <tr><td colspan="3">Monday, January 13</td></tr>
            <tr><td>1:30 PM - 3:10 PM</td><td><a href="https://meetings.siam.org/sess/a">SODA Session 5A</a></td><td>Room 1</td></tr>
            <tr><td><a href="https://meetings.siam.org/sess/b">ALENEX Session 5</a></td><td> </td></tr>
        </table>"#;

        let program = parse(html);

        assert_eq!(program.sessions[1].room, "Room 1");
        assert_eq!(program.sessions[1].time_slot.as_ref().unwrap().start, "1:30 PM");
    }

    #[test]
    fn test_concurrent_row_without_day_is_skipped() {
        let html = r#"<table>
            <tr><td><a href="https://meetings.siam.org/sess/b">SODA Session 5B</a></td><td>Room 2</td></tr>
        </table>"#;

        assert!(parse(html).is_empty());
    }

    #[test]
    fn test_concurrent_row_without_previous_session_uses_last_time_cell() {
        let html = r#"<table>
            <tr><td colspan="3">Tuesday, January 14</td></tr>
            <tr><td>8:00 AM - 9:00 AM</td><td><a href="https://meetings.siam.org/x">Registration</a></td><td>Lobby</td></tr>
            <tr><td><a href="https://meetings.siam.org/sess/c">SODA Session 9C</a></td><td>Room 3</td></tr>
        </table>"#;

        let program = parse(html);

        assert_eq!(program.sessions.len(), 1);
        let session = &program.sessions[0];
        assert_eq!(session.time_slot.as_ref().unwrap().start, "8:00 AM");
        assert_eq!(session.room, "Room 3");
    }

    #[test]
    fn test_non_talk_sessions_and_rows_without_time_are_omitted() {
        let html = r#"<table>
            <tr><td colspan="3">Sunday, January 12</td></tr>
            <tr><td>10:40 AM - 11:00 AM</td><td><a href="/break">Coffee Break</a></td><td>Foyer</td></tr>
            <tr><td>TBA</td><td><a href="/sess/x">SODA Session 2A</a></td><td>Room</td></tr>
            <tr><td>11:00 AM</td><td>No link Session</td><td>Room</td></tr>
            <tr><td>a</td><td>b</td><td>c</td><td>d</td></tr>
        </table>"#;

        assert!(parse(html).is_empty());
    }

    #[test]
    fn test_colspan_row_without_weekday_keeps_current_day() {
        let html = r#"<table>
            <tr><td colspan="3">Sunday, January 12</td></tr>
            <tr><td colspan="3">Morning</td></tr>
            <tr><td>9:00 AM</td><td><a href="https://meetings.siam.org/sess/a">IP1 Invited Lecture</a></td><td>Ballroom</td></tr>
        </table>"#;

        let program = parse(html);

        assert_eq!(program.sessions[0].day.as_deref(), Some("Sunday, January 12"));
    }

    #[test]
    fn test_absolute_links_copied_verbatim() {
        let href = "https://meetings.siam.org/sess/dsp_programsess.cfm?SESSIONCODE=81234&x=1";
        let html = format!(
            r#"<table><tr><td>9:00 AM</td><td><a href="{}">SODA Session 1</a></td><td>R</td></tr></table>"#,
            href.replace('&', "&amp;")
        );

        let program = parse(&html);

        assert_eq!(program.sessions[0].url, href);
    }
}
