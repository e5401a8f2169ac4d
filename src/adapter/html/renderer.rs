//! Program Renderer
//!
//! プログラムを1枚の静的HTML文書に変換する。
//! 同じ入力からは常にバイト単位で同じ出力を返す（生成日も引数で受け取る）

use chrono::NaiveDate;
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::domain::entities::program::ConferenceProgram;
use crate::domain::entities::session::Session;
use crate::domain::services::schedule_layout::{ProgramLayout, SlotGroup};

const STYLE: &str = r#"        table { width: 100%; border-collapse: collapse; }
        th, td { border: 1px solid #ccc; padding: 10px; vertical-align: top; }
        th { background-color: #f4f4f4; text-align: center; }
        a, a:link { text-decoration: none; color: black; }
        .day-header { background-color: #d9edf7; font-size: 1.2em; }
        .session-title { font-weight: bold; }
        .speaker { color: #555; font-size: 0.9em; }
"#;

fn link(url: &str, text: &str) -> String {
    format!(
        r#"<a href="{}">{}</a>"#,
        encode_double_quoted_attribute(url),
        encode_text(text)
    )
}

/// セッションセルの中身（太字のセッションリンクとトークの一覧）
fn session_cell(session: &Session, slot_label: Option<&str>) -> String {
    let mut cell = format!(
        r#"<strong class="session-title">{}</strong><br>"#,
        link(&session.url, &session.title)
    );

    if let Some(label) = slot_label {
        cell.push_str(&format!("<em>{}</em><br>", encode_text(label)));
    }

    for talk in &session.talks {
        cell.push_str(&link(&talk.url, &talk.title));
        if let Some(speaker) = &talk.speaker {
            cell.push_str(&format!(
                r#" <span class="speaker">{}</span>"#,
                encode_text(speaker)
            ));
        }
        cell.push_str("<br>");
    }

    cell
}

fn render_slot(out: &mut String, slot: &SlotGroup, columns: usize) {
    if let [session] = slot.sessions.as_slice() {
        // 単独セッションは全列にまたがる。トークがなければ時間帯を表示
        let label = session
            .talks
            .is_empty()
            .then_some(slot.label.as_str())
            .filter(|l| !l.is_empty());
        out.push_str(&format!(
            "      <tr>\n        <td colspan=\"{}\">{}</td>\n      </tr>\n",
            columns,
            session_cell(session, label)
        ));
        return;
    }

    out.push_str("      <tr>\n");
    for i in 0..columns {
        match slot.sessions.get(i) {
            Some(session) => out.push_str(&format!(
                "        <td>{}</td>\n",
                session_cell(session, None)
            )),
            None => out.push_str("        <td></td>\n"),
        }
    }
    out.push_str("      </tr>\n");
}

/// プログラムをHTMLに変換する
///
/// # Arguments
///
/// * `program` - 描画するプログラム
/// * `generated_on` - 「Generated ...」行に埋め込む日付
pub fn render_program(program: &ConferenceProgram, generated_on: NaiveDate) -> String {
    let layout = ProgramLayout::build(&program.sessions);
    let heading = encode_text(&program.heading);

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("    <meta charset=\"utf-8\">\n");
    out.push_str(&format!("    <title>{}</title>\n", heading));
    out.push_str("    <style>\n");
    out.push_str(STYLE);
    out.push_str("    </style>\n</head>\n<body>\n");
    out.push_str(&format!("    <h1>{}</h1>\n", heading));
    out.push_str(&format!(
        "    <p>Generated {} from the official program ({})</p>\n",
        generated_on.format("%Y-%m-%d"),
        link(&program.source_url, "link")
    ));
    out.push_str("    <table>\n    <tbody>\n");

    for day in &layout.days {
        if !day.day.is_empty() {
            out.push_str(&format!(
                "      <tr>\n        <th class=\"day-header\" colspan=\"{}\">{}</th>\n      </tr>\n",
                layout.columns,
                encode_text(&day.day)
            ));
        }
        for slot in &day.slots {
            render_slot(&mut out, slot, layout.columns);
        }
    }

    out.push_str("    </tbody>\n    </table>\n</body>\n</html>\n");
    out
}
