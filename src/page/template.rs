use crate::constants::{
    ASSIGN_USER_FORM, CREATE_TEAM_FORM, CREATE_TEAM_INPUT, LEADERBOARD_TABLE, TEAM_SELECT,
    USERNAME_DATA_KEY, USERS_TABLE, USER_NAME_INPUT,
};
use crate::models::{leaderboard_columns, UserRow};
use crate::page::{Page, Row, Table};

/// Renders the team-management page. A reload renders it again from scratch.
#[derive(Debug, Clone, Default)]
pub struct PageTemplate {
    pub users: Vec<UserRow>,
}

impl PageTemplate {
    pub fn new(users: Vec<UserRow>) -> Self {
        Self { users }
    }

    pub fn render(&self) -> Page {
        Page::builder()
            .table(LEADERBOARD_TABLE, Table::new(leaderboard_columns()))
            .table(USERS_TABLE, users_table(&self.users))
            .select(TEAM_SELECT)
            .form(ASSIGN_USER_FORM)
            .input(USER_NAME_INPUT, "")
            .form(CREATE_TEAM_FORM)
            .input(CREATE_TEAM_INPUT, "")
            .status_line()
            .build()
    }
}

pub fn users_table(users: &[UserRow]) -> Table {
    users.iter().fold(Table::new(["Username", "Team"]), |table, user| {
        let team = user.team.as_deref().unwrap_or("-");
        table.with_row(
            Row::new([user.username.as_str(), team]).with_data(USERNAME_DATA_KEY, &user.username),
        )
    })
}
