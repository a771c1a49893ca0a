//! Reply keyboards. The transport renders them; only layout lives here.

use reg_core::REGIONS;

pub const BTN_JOIN: &str = "👉 Ishtirok etmoqchiman";
pub const BTN_MY_INFO: &str = "📄 Ma’lumotlarim";
pub const BTN_HELP: &str = "ℹ️ Yordam";
pub const BTN_ADMIN_LIST: &str = "📋 Ro‘yxat (Admin)";
pub const BTN_ADMIN_EXPORT: &str = "📤 CSV Export (Admin)";
pub const BTN_SHARE_CONTACT: &str = "📞 Telefon raqamimni yuborish";

const REGION_COLUMNS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    /// Ask the client to share the user's own contact
    pub request_contact: bool,
}

impl Button {
    fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            request_contact: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyboard {
    /// Join button for people not yet registered
    Welcome,
    Registered,
    /// Registered keyboard plus the admin list/export buttons
    RegisteredAdmin,
    ContactShare,
    Regions,
    /// Hide any keyboard
    Remove,
}

impl Keyboard {
    pub fn after_registration(is_admin: bool) -> Self {
        if is_admin {
            Self::RegisteredAdmin
        } else {
            Self::Registered
        }
    }

    pub fn rows(&self) -> Vec<Vec<Button>> {
        match self {
            Self::Welcome => vec![vec![Button::text(BTN_JOIN)]],
            Self::Registered => vec![vec![Button::text(BTN_MY_INFO)], vec![Button::text(BTN_HELP)]],
            Self::RegisteredAdmin => vec![
                vec![Button::text(BTN_MY_INFO)],
                vec![Button::text(BTN_HELP)],
                vec![Button::text(BTN_ADMIN_LIST)],
                vec![Button::text(BTN_ADMIN_EXPORT)],
            ],
            Self::ContactShare => vec![vec![Button {
                label: BTN_SHARE_CONTACT.to_string(),
                request_contact: true,
            }]],
            Self::Regions => REGIONS
                .chunks(REGION_COLUMNS)
                .map(|row| row.iter().map(|r| Button::text(r.as_str())).collect())
                .collect(),
            Self::Remove => Vec::new(),
        }
    }

    /// Hide the keyboard after one press
    pub fn one_time(&self) -> bool {
        matches!(self, Self::ContactShare | Self::Regions)
    }
}
