//! # Schedule Layout Service
//!
//! セッションを日→時間帯の表レイアウトにまとめる
//!
//! どちらのグループ化も最初の出現順を保持する（並べ替えはしない）

use chrono::NaiveTime;

use crate::domain::entities::session::Session;

/// 同じ開始時刻の並行セッション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGroup {
    /// `開始 - 最も遅い終了` 形式のラベル
    pub label: String,
    pub sessions: Vec<Session>,
}

/// 1日分のスケジュール
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    /// 日の見出し（不明な場合は空文字列）
    pub day: String,
    pub slots: Vec<SlotGroup>,
}

/// プログラム表のレイアウト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramLayout {
    pub days: Vec<DaySchedule>,
    /// 表の列数（最大並行セッション数、最低1）
    pub columns: usize,
}

impl ProgramLayout {
    /// セッション列からレイアウトを構築する
    pub fn build(sessions: &[Session]) -> Self {
        // (day, [(start, sessions)])
        let mut grouped: Vec<(String, Vec<(String, Vec<Session>)>)> = Vec::new();

        for session in sessions {
            let day = session.day.clone().unwrap_or_default();
            let start = session.start_time().to_string();

            let day_idx = match grouped.iter().position(|(d, _)| *d == day) {
                Some(idx) => idx,
                None => {
                    grouped.push((day, Vec::new()));
                    grouped.len() - 1
                }
            };
            let slots = &mut grouped[day_idx].1;
            match slots.iter_mut().find(|(s, _)| *s == start) {
                Some((_, members)) => members.push(session.clone()),
                None => slots.push((start, vec![session.clone()])),
            }
        }

        let days: Vec<DaySchedule> = grouped
            .into_iter()
            .map(|(day, slots)| DaySchedule {
                day,
                slots: slots
                    .into_iter()
                    .map(|(start, sessions)| SlotGroup {
                        label: slot_label(&start, &sessions),
                        sessions,
                    })
                    .collect(),
            })
            .collect();

        let columns = days
            .iter()
            .flat_map(|d| d.slots.iter())
            .map(|slot| slot.sessions.len())
            .max()
            .unwrap_or(0)
            .max(1);

        Self { days, columns }
    }

    /// セッション総数
    pub fn session_count(&self) -> usize {
        self.days
            .iter()
            .flat_map(|d| d.slots.iter())
            .map(|slot| slot.sessions.len())
            .sum()
    }
}

/// 12時間表記の時刻を解釈する（`9:00 AM` / `9:00am` の両方を受け付ける）
pub fn parse_clock_time(text: &str) -> Option<NaiveTime> {
    let upper = text.trim().to_uppercase();
    let normalized = match upper.strip_suffix("AM").or_else(|| upper.strip_suffix("PM")) {
        Some(clock) => format!("{} {}", clock.trim_end(), &upper[upper.len() - 2..]),
        None => return None,
    };
    NaiveTime::parse_from_str(&normalized, "%I:%M %p").ok()
}

/// 時間帯ラベルを作る
///
/// 終了時刻のうち最も遅いものを使う。解釈できる終了時刻がなければ開始時刻のみ
fn slot_label(start: &str, sessions: &[Session]) -> String {
    let latest_end = sessions
        .iter()
        .filter_map(|s| s.time_slot.as_ref()?.end.as_deref())
        .filter_map(|end| parse_clock_time(end).map(|t| (t, end)))
        .max_by_key(|(t, _)| *t)
        .map(|(_, end)| end);

    match latest_end {
        Some(end) => format!("{} - {}", start, end),
        None => start.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::session::TimeSlot;

    fn session(title: &str, day: &str, start: &str, end: Option<&str>) -> Session {
        let mut s = Session::new(title, format!("https://meetings.siam.org/sess/{}", title));
        s.day = Some(day.to_string());
        s.time_slot = Some(TimeSlot::new(start, end.map(str::to_string)));
        s
    }

    #[test]
    fn test_parse_clock_time() {
        assert_eq!(
            parse_clock_time("9:05 AM"),
            NaiveTime::from_hms_opt(9, 5, 0)
        );
        assert_eq!(
            parse_clock_time("1:30pm"),
            NaiveTime::from_hms_opt(13, 30, 0)
        );
        assert_eq!(parse_clock_time("noon"), None);
        assert_eq!(parse_clock_time(""), None);
    }

    #[test]
    fn test_build_groups_by_day_and_start() {
        let sessions = vec![
            session("A", "Sunday, January 12", "9:00 AM", Some("10:00 AM")),
            session("B", "Sunday, January 12", "9:00 AM", Some("10:40 AM")),
            session("C", "Sunday, January 12", "11:00 AM", None),
            session("D", "Monday, January 13", "9:00 AM", Some("10:00 AM")),
        ];

        let layout = ProgramLayout::build(&sessions);

        assert_eq!(layout.days.len(), 2);
        assert_eq!(layout.days[0].day, "Sunday, January 12");
        assert_eq!(layout.days[0].slots.len(), 2);
        assert_eq!(layout.days[0].slots[0].label, "9:00 AM - 10:40 AM");
        assert_eq!(layout.days[0].slots[0].sessions.len(), 2);
        assert_eq!(layout.days[0].slots[1].label, "11:00 AM");
        assert_eq!(layout.days[1].day, "Monday, January 13");
        assert_eq!(layout.columns, 2);
        assert_eq!(layout.session_count(), 4);
    }

    #[test]
    fn test_build_keeps_source_order() {
        // ソース上の順序が時刻順でなくても並べ替えない
        let sessions = vec![
            session("Late", "Day", "2:00 PM", None),
            session("Early", "Day", "9:00 AM", None),
            session("Zeta", "Day", "2:00 PM", None),
            session("Alpha", "Day", "2:00 PM", None),
        ];

        let layout = ProgramLayout::build(&sessions);
        let slots = &layout.days[0].slots;

        assert_eq!(slots[0].label, "2:00 PM");
        let titles: Vec<&str> = slots[0].sessions.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Late", "Zeta", "Alpha"]);
        assert_eq!(slots[1].sessions[0].title, "Early");
        assert_eq!(layout.columns, 3);
    }

    #[test]
    fn test_build_empty() {
        let layout = ProgramLayout::build(&[]);
        assert!(layout.days.is_empty());
        assert_eq!(layout.columns, 1);
        assert_eq!(layout.session_count(), 0);
    }

    #[test]
    fn test_session_without_day() {
        let sessions = vec![Session::new("Orphan Session", "#")];
        let layout = ProgramLayout::build(&sessions);
        assert_eq!(layout.days[0].day, "");
        assert_eq!(layout.days[0].slots[0].label, "");
    }
}
