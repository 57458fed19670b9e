use common::model::content::Category;

use super::state::AdminTab;

#[derive(Clone)]
pub enum Msg {
    Advance,
    SetAccount(String),
    SetPassword(String),
    SetSaveLogin(bool),
    Login,
    GuestAccess,
    TypingTick(u64),
    ViewDetail(Category),
    Back,
    UpdateComment(String),
    SubmitComment,
    ReadAloud(String),
    SetAdminTab(AdminTab),
    EditUpdate(Category, String),
    SaveUpdates,
    SetNewUsername(String),
    SetNewPassword(String),
    ChangeCredentials,
    NetworkChanged(bool),
}
