pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const BASE_URL_ENV: &str = "TEAM_CONSOLE_URL";
pub const CONFIG_FILE: &str = ".team-console-config.json";

// REST endpoints
pub const GET_TEAMS_PATH: &str = "/get_teams";
pub const CREATE_TEAM_PATH: &str = "/create_team";
pub const ASSIGN_USER_PATH: &str = "/assign_user_to_team";
pub const LEADERBOARD_PATH: &str = "/leaderboard";
pub const SCORE_PATH: &str = "/score";

// Element ids the page controller binds to
pub const LEADERBOARD_TABLE: &str = "leaderboard";
pub const TEAM_LEADERBOARD_TABLE: &str = "teamLeaderboard";
pub const USERS_TABLE: &str = "usersTable";
pub const TEAM_SELECT: &str = "teamName";
pub const CREATE_TEAM_FORM: &str = "createTeamForm";
pub const CREATE_TEAM_INPUT: &str = "teamNameCreate";
pub const ASSIGN_USER_FORM: &str = "assignUserForm";
pub const USER_NAME_INPUT: &str = "userName";

pub const SELECTED_ROW_CLASS: &str = "selected-row";
pub const USERNAME_DATA_KEY: &str = "username";
pub const TEAM_PLACEHOLDER: &str = "Select a team";

pub const DEFAULT_PAGE_LENGTH: usize = 10;
pub const PAGE_LENGTH_CHOICES: [usize; 3] = [10, 25, 50];
pub const RELOAD_DELAY_MS: u64 = 1500;

pub const EMPTY_TEAM_NAME_MESSAGE: &str = "Please enter a team name.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Facets a score can be recorded under, in leaderboard column order.
pub const FACETS: [&str; 4] = [
    "daily_quiet_time",
    "team_call_attendance",
    "daily_journaling",
    "weekly_curriculum",
];
