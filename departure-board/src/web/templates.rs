//! Askama templates and view models for the board page.

use askama::Template;

use crate::board::{Board, UpcomingDeparture};

use super::links::train_details_url;

/// Shown when the direction key is missing or unknown.
pub const MSG_INVALID_DIRECTION: &str = "方向が不明です。";

/// Shown when no stop has the requested name.
pub const MSG_STATION_NOT_FOUND: &str = "駅データが見つかりません。";

/// Shown when the schedule could not be loaded or parsed.
pub const MSG_LOAD_FAILURE: &str = "データの読み込みに失敗しました。";

/// Shown when the `time` override is malformed.
pub const MSG_INVALID_TIME: &str = "時刻の指定が不正です。";

/// Shown when no departures remain today in a direction.
pub fn service_ended_message(label: &str) -> String {
    format!("本日の{}方面の発車は終了しました。", label)
}

/// Page title for a station and direction label.
pub fn board_title(station: &str, label: &str) -> String {
    format!("{} - {} の次の発車", station, label)
}

// ============================================================================
// Page Templates
// ============================================================================

/// The departure board page.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub page: BoardView,
}

// ============================================================================
// View Models
// ============================================================================

/// Everything the board page displays.
///
/// Either `cards` is non-empty, or `message` holds the single fallback text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    /// Set once the direction is known.
    pub title: Option<String>,
    pub cards: Vec<DepartureCard>,
    pub message: Option<String>,
}

impl BoardView {
    /// A page with only a fallback message.
    pub fn message(title: Option<String>, message: impl Into<String>) -> Self {
        Self {
            title,
            cards: Vec::new(),
            message: Some(message.into()),
        }
    }

    /// Create from a built board.
    pub fn from_board(board: &Board) -> Self {
        let title = Some(board_title(&board.station, &board.label));

        if board.is_service_ended() {
            return Self::message(title, service_ended_message(&board.label));
        }

        Self {
            title,
            cards: board
                .departures()
                .iter()
                .map(DepartureCard::from_upcoming)
                .collect(),
            message: None,
        }
    }

    /// Text for the `<title>` element.
    pub fn document_title(&self) -> &str {
        self.title.as_deref().unwrap_or("次の発車")
    }
}

/// One departure card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureCard {
    pub time: String,
    pub kind: String,
    pub destination: String,
    pub minutes_left: i32,
    pub walk: String,
    pub bike: String,
    pub link: String,
}

impl DepartureCard {
    /// Create from an upcoming departure.
    pub fn from_upcoming(upcoming: &UpcomingDeparture) -> Self {
        let dep = &upcoming.departure;
        Self {
            time: dep.time.to_string(),
            kind: dep.kind.clone().unwrap_or_default(),
            destination: dep.destination.clone(),
            minutes_left: upcoming.minutes_left,
            walk: upcoming.walk.to_string(),
            bike: upcoming.bike.to_string(),
            link: train_details_url(&dep.train_id),
        }
    }

    /// First line of the card, e.g. "08:10 普通 松本 行".
    pub fn headline(&self) -> String {
        format!("{} {} {} 行", self.time, self.kind, self.destination)
    }

    /// Second line of the card with both reachability marks.
    pub fn marks(&self) -> String {
        format!("🚶‍♂️{}　🚴‍♀️{}", self.walk, self.bike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardConfig, select_departures};
    use crate::domain::ClockTime;
    use crate::schedule::ScheduleDocument;

    fn doc() -> ScheduleDocument {
        serde_json::from_str(
            r#"{ "stops": [ { "name": "長野", "departures": { "上り": [
                { "time": "08:10", "type": "普通", "destination": "松本", "trainId": "1234M" },
                { "time": "08:30", "destination": "篠ノ井" }
            ] } } ] }"#,
        )
        .unwrap()
    }

    fn board(now: &str, dir: &str) -> Board {
        select_departures(
            &doc(),
            "長野",
            dir,
            ClockTime::parse_hhmm(now).unwrap(),
            &BoardConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn messages() {
        assert_eq!(
            service_ended_message("上り"),
            "本日の上り方面の発車は終了しました。"
        );
        assert_eq!(board_title("長野", "下り"), "長野 - 下り の次の発車");
    }

    #[test]
    fn view_from_board_with_departures() {
        let view = BoardView::from_board(&board("08:00", "up"));
        assert_eq!(view.title.as_deref(), Some("長野 - 上り の次の発車"));
        assert_eq!(view.message, None);
        assert_eq!(view.cards.len(), 2);

        let card = &view.cards[0];
        assert_eq!(card.headline(), "08:10 普通 松本 行");
        assert_eq!(card.marks(), "🚶‍♂️△　🚴‍♀️〇");
        assert_eq!(card.link, "train-details.html?trainId=1234M");

        // Missing type leaves an empty slot, missing trainId an empty link value
        let card = &view.cards[1];
        assert_eq!(card.headline(), "08:30  篠ノ井 行");
        assert_eq!(card.link, "train-details.html?trainId=");
    }

    #[test]
    fn view_from_ended_board() {
        let view = BoardView::from_board(&board("08:00", "down"));
        assert_eq!(view.title.as_deref(), Some("長野 - 下り の次の発車"));
        assert!(view.cards.is_empty());
        assert_eq!(
            view.message.as_deref(),
            Some("本日の下り方面の発車は終了しました。")
        );
    }

    #[test]
    fn message_only_view() {
        let view = BoardView::message(None, MSG_INVALID_DIRECTION);
        assert_eq!(view.document_title(), "次の発車");
        assert_eq!(view.message.as_deref(), Some("方向が不明です。"));
    }

    #[test]
    fn renders_cards() {
        let html = BoardTemplate {
            page: BoardView::from_board(&board("08:00", "up")),
        }
        .render()
        .unwrap();

        assert!(html.contains("長野 - 上り の次の発車"));
        assert!(html.contains("08:10 普通 松本 行"));
        assert!(html.contains("train-details.html?trainId=1234M"));
        assert!(html.contains("departureCard"));
    }

    #[test]
    fn renders_message() {
        let html = BoardTemplate {
            page: BoardView::message(None, MSG_LOAD_FAILURE),
        }
        .render()
        .unwrap();

        assert!(html.contains("データの読み込みに失敗しました。"));
        assert!(!html.contains("link-style"));
    }
}
