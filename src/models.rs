//! Frontend Models
//!
//! Data structures matching the backend's JSON responses (camelCase on the wire).

use serde::{Deserialize, Serialize};

use crate::todo::{ChaosStage, GuardianStage};

fn default_true() -> bool {
    true
}

/// Per-character display toggles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSettings {
    #[serde(default = "default_true")]
    pub show_character: bool,
    #[serde(default = "default_true")]
    pub show_chaos: bool,
    #[serde(default = "default_true")]
    pub show_guardian: bool,
    #[serde(default = "default_true")]
    pub show_week_todo: bool,
    #[serde(default = "default_true")]
    pub show_cube_ticket: bool,
}

impl Default for CharacterSettings {
    fn default() -> Self {
        Self {
            show_character: true,
            show_chaos: true,
            show_guardian: true,
            show_week_todo: true,
            show_cube_ticket: true,
        }
    }
}

/// Names accepted by the settings endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CharacterSetting {
    ShowCharacter,
    ShowChaos,
    ShowGuardian,
    ShowWeekTodo,
    ShowCubeTicket,
}

impl CharacterSetting {
    pub const ALL: [CharacterSetting; 5] = [
        CharacterSetting::ShowCharacter,
        CharacterSetting::ShowChaos,
        CharacterSetting::ShowGuardian,
        CharacterSetting::ShowWeekTodo,
        CharacterSetting::ShowCubeTicket,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CharacterSetting::ShowCharacter => "캐릭터 표시",
            CharacterSetting::ShowChaos => "카오스 던전",
            CharacterSetting::ShowGuardian => "가디언 토벌",
            CharacterSetting::ShowWeekTodo => "주간 레이드",
            CharacterSetting::ShowCubeTicket => "큐브 티켓",
        }
    }

    pub fn get(self, settings: &CharacterSettings) -> bool {
        match self {
            CharacterSetting::ShowCharacter => settings.show_character,
            CharacterSetting::ShowChaos => settings.show_chaos,
            CharacterSetting::ShowGuardian => settings.show_guardian,
            CharacterSetting::ShowWeekTodo => settings.show_week_todo,
            CharacterSetting::ShowCubeTicket => settings.show_cube_ticket,
        }
    }
}

/// Weekly raid todo of one character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRaid {
    pub id: i64,
    pub name: String,
    pub week_category: String,
    #[serde(default)]
    pub gold: i32,
    #[serde(default)]
    pub check: bool,
    #[serde(default)]
    pub sort_number: i32,
}

/// A tracked in-game character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub character_id: i64,
    pub character_name: String,
    pub character_class_name: String,
    pub server_name: String,
    pub item_level: f64,
    #[serde(default)]
    pub sort_number: i32,
    #[serde(default)]
    pub chaos_check: ChaosStage,
    #[serde(default)]
    pub chaos_gauge: i32,
    #[serde(default)]
    pub guardian_check: GuardianStage,
    #[serde(default)]
    pub guardian_gauge: i32,
    #[serde(default)]
    pub gold_character: bool,
    #[serde(default)]
    pub cube_ticket: i32,
    #[serde(default)]
    pub todo_list: Vec<TodoRaid>,
    #[serde(default)]
    pub settings: CharacterSettings,
}

/// Content catalog entry (weekly raid and its category)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub sort_order: i32,
}

/// Friendship state as seen by the current user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FriendStatus {
    #[serde(rename = "깐부")]
    Friend,
    #[serde(rename = "깐부 요청 진행중")]
    RequestSent,
    #[serde(rename = "깐부 요청 받음")]
    RequestReceived,
    #[serde(rename = "요청 거부")]
    Rejected,
}

/// What a friend may see or check on a roster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendSettings {
    #[serde(default)]
    pub show_day_todo: bool,
    #[serde(default)]
    pub check_day_todo: bool,
    #[serde(default)]
    pub show_raid: bool,
    #[serde(default)]
    pub check_raid: bool,
    #[serde(default)]
    pub setting: bool,
}

/// Names accepted by the friend settings endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FriendSetting {
    ShowDayTodo,
    CheckDayTodo,
    ShowRaid,
    CheckRaid,
    Setting,
}

impl FriendSetting {
    pub const ALL: [FriendSetting; 5] = [
        FriendSetting::ShowDayTodo,
        FriendSetting::CheckDayTodo,
        FriendSetting::ShowRaid,
        FriendSetting::CheckRaid,
        FriendSetting::Setting,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FriendSetting::ShowDayTodo => "일일 숙제 보기",
            FriendSetting::CheckDayTodo => "일일 숙제 체크",
            FriendSetting::ShowRaid => "레이드 보기",
            FriendSetting::CheckRaid => "레이드 체크",
            FriendSetting::Setting => "설정 변경",
        }
    }

    pub fn get(self, settings: &FriendSettings) -> bool {
        match self {
            FriendSetting::ShowDayTodo => settings.show_day_todo,
            FriendSetting::CheckDayTodo => settings.check_day_todo,
            FriendSetting::ShowRaid => settings.show_raid,
            FriendSetting::CheckRaid => settings.check_raid,
            FriendSetting::Setting => settings.setting,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub friend_id: i64,
    pub friend_username: String,
    pub are_we_friend: FriendStatus,
    #[serde(default)]
    pub nick_name: String,
    #[serde(default)]
    pub character_list: Vec<Character>,
    /// Permissions I granted to this friend
    #[serde(default)]
    pub to_friend_settings: FriendSettings,
    /// Permissions this friend granted to me
    #[serde(default)]
    pub from_friend_settings: FriendSettings,
}

/// Recruiting board categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecruitCategory {
    FriendsRecruit,
    GuildRecruit,
    StaticRecruit,
    RaidRecruit,
}

impl RecruitCategory {
    pub const ALL: [RecruitCategory; 4] = [
        RecruitCategory::FriendsRecruit,
        RecruitCategory::GuildRecruit,
        RecruitCategory::StaticRecruit,
        RecruitCategory::RaidRecruit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RecruitCategory::FriendsRecruit => "깐부 모집",
            RecruitCategory::GuildRecruit => "길드 모집",
            RecruitCategory::StaticRecruit => "고정 공대 모집",
            RecruitCategory::RaidRecruit => "레이드 모집",
        }
    }

    /// Query parameter value
    pub fn as_str(self) -> &'static str {
        match self {
            RecruitCategory::FriendsRecruit => "FRIENDS_RECRUIT",
            RecruitCategory::GuildRecruit => "GUILD_RECRUIT",
            RecruitCategory::StaticRecruit => "STATIC_RECRUIT",
            RecruitCategory::RaidRecruit => "RAID_RECRUIT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPost {
    pub id: i64,
    pub category: RecruitCategory,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub writer: String,
    pub created_date: String,
    #[serde(default)]
    pub views: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPage {
    pub content: Vec<BoardPost>,
    pub total_pages: u32,
    pub page: u32,
}

impl BoardPage {
    pub fn has_more(&self) -> bool {
        self.page + 1 < self.total_pages
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub content: String,
    pub notification_type: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_date: String,
    #[serde(default)]
    pub board_id: Option<i64>,
    #[serde(default)]
    pub friend_username: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    #[default]
    User,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub username: String,
    #[serde(default)]
    pub main_character: Option<String>,
    #[serde(default)]
    pub role: MemberRole,
}

impl Member {
    pub fn is_admin(&self) -> bool {
        self.role == MemberRole::Admin
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCount {
    pub date: String,
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    #[serde(default)]
    pub new_members: Vec<DailyCount>,
    #[serde(default)]
    pub new_characters: Vec<DailyCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_from_backend_json() {
        let json = r#"{
            "characterId": 11,
            "characterName": "바드짱",
            "characterClassName": "바드",
            "serverName": "루페온",
            "itemLevel": 1620.5,
            "chaosCheck": 2,
            "guardianCheck": 0,
            "chaosGauge": 40,
            "goldCharacter": true,
            "todoList": [
                {"id": 1, "name": "카멘 하드", "weekCategory": "카멘", "gold": 20000, "check": true}
            ],
            "settings": {"showCharacter": true, "showChaos": false}
        }"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.chaos_check, ChaosStage::Done);
        assert_eq!(character.guardian_check, GuardianStage::None);
        assert_eq!(character.todo_list.len(), 1);
        assert!(character.todo_list[0].check);
        assert!(!character.settings.show_chaos);
        // Missing toggles default to shown
        assert!(character.settings.show_guardian);
        assert_eq!(character.cube_ticket, 0);
    }

    #[test]
    fn test_friend_status_uses_backend_labels() {
        let status: FriendStatus = serde_json::from_str("\"깐부 요청 받음\"").unwrap();
        assert_eq!(status, FriendStatus::RequestReceived);
    }

    #[test]
    fn test_board_page_has_more() {
        let page = BoardPage { content: vec![], total_pages: 3, page: 1 };
        assert!(page.has_more());
        let last = BoardPage { content: vec![], total_pages: 3, page: 2 };
        assert!(!last.has_more());
    }

    #[test]
    fn test_setting_names_serialize_camel_case() {
        assert_eq!(serde_json::to_string(&CharacterSetting::ShowWeekTodo).unwrap(), "\"showWeekTodo\"");
        assert_eq!(serde_json::to_string(&FriendSetting::CheckRaid).unwrap(), "\"checkRaid\"");
    }
}
