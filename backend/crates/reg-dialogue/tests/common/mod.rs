#![allow(dead_code)]

use reg_config::{AdminConfig, DialogueConfig};
use reg_dialogue::{DialogueController, Inbound, Reply};
use reg_ledger::{Ledger, LedgerSync};

use std::path::PathBuf;

use tempfile::TempDir;

pub const ADMIN_ID: &str = "900";
pub const NAME: &str = "Ali Valiyev";
pub const PHONE: &str = "+998 90 111-22-33";
pub const PHONE_DIGITS: &str = "998901112233";

pub fn store_path(temp: &TempDir) -> PathBuf {
    temp.path().join("data").join("registrations.csv")
}

/// Controller over an empty store in a fresh temp dir, with [`ADMIN_ID`] as admin
pub fn create_test_controller() -> (TempDir, DialogueController) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let controller = controller_at(&temp);
    (temp, controller)
}

/// Controller over a store pre-seeded with `contents`
pub fn create_controller_with_contents(contents: &str) -> (TempDir, DialogueController) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = store_path(&temp);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, contents).expect("Failed to seed store");
    let controller = controller_at(&temp);
    (temp, controller)
}

fn controller_at(temp: &TempDir) -> DialogueController {
    let ledger = Ledger::new(store_path(temp), LedgerSync::new());
    let admin = AdminConfig {
        ids: vec![ADMIN_ID.to_string()],
    };
    let settings = DialogueConfig {
        welcome_image: temp
            .path()
            .join("missing.png")
            .to_string_lossy()
            .into_owned(),
        ..DialogueConfig::default()
    };
    DialogueController::new(ledger, admin, settings)
}

pub async fn say(controller: &DialogueController, identity: &str, text: &str) -> Reply {
    controller
        .on_user_message(identity, Inbound::text(identity, text))
        .await
}

pub async fn share_contact(controller: &DialogueController, identity: &str, phone: &str) -> Reply {
    controller
        .on_user_message(
            identity,
            Inbound::contact(identity, phone, Some(identity.to_string())),
        )
        .await
}

/// Walk `identity` through the whole dialogue
pub async fn register(
    controller: &DialogueController,
    identity: &str,
    name: &str,
    phone: &str,
    region: &str,
) -> Reply {
    say(controller, identity, reg_dialogue::keyboard::BTN_JOIN).await;
    say(controller, identity, name).await;
    share_contact(controller, identity, phone).await;
    say(controller, identity, region).await
}
