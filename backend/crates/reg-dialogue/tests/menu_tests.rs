mod common;

use common::{ADMIN_ID, NAME, PHONE, create_test_controller, register, say};

use reg_dialogue::keyboard::{BTN_ADMIN_LIST, BTN_HELP, BTN_MY_INFO};
use reg_dialogue::{Keyboard, ReplyKind, SessionState};

use googletest::prelude::*;

#[tokio::test]
async fn given_new_user_when_starting_then_welcome_with_join_keyboard() {
    let (_temp, controller) = create_test_controller();

    let reply = say(&controller, "101", "/start").await;

    assert_that!(reply.kind, eq(ReplyKind::Welcome));
    assert_that!(reply.keyboard, some(eq(Keyboard::Welcome)));
    assert_that!(reply.photo, none());
}

#[tokio::test]
async fn given_registered_user_when_starting_then_already_registered() {
    let (_temp, controller) = create_test_controller();
    register(&controller, "101", NAME, PHONE, "Samarqand").await;

    let reply = say(&controller, "101", "/start").await;

    assert_that!(reply.kind, eq(ReplyKind::AlreadyRegistered));
    assert_that!(controller.state_of("101").await, eq(&SessionState::Idle));
}

#[tokio::test]
async fn given_registered_user_when_asking_my_info_then_record_is_shown() {
    let (_temp, controller) = create_test_controller();
    register(&controller, "101", NAME, PHONE, "Samarqand").await;

    let reply = say(&controller, "101", BTN_MY_INFO).await;

    assert_that!(reply.kind, eq(ReplyKind::Info));
    assert!(reply.text.contains(NAME));
    assert!(reply.text.contains("Samarqand"));
}

#[tokio::test]
async fn given_unregistered_user_when_asking_my_info_then_not_registered() {
    let (_temp, controller) = create_test_controller();

    let reply = say(&controller, "101", BTN_MY_INFO).await;

    assert_that!(reply.kind, eq(ReplyKind::NotRegistered));
}

#[tokio::test]
async fn given_idle_user_when_sending_help_or_noise_then_help_and_hint() {
    let (_temp, controller) = create_test_controller();

    let help = say(&controller, "101", BTN_HELP).await;
    let hint = say(&controller, "101", "salom").await;

    assert_that!(help.kind, eq(ReplyKind::Help));
    assert_that!(hint.kind, eq(ReplyKind::Hint));
    assert_that!(controller.state_of("101").await, eq(&SessionState::Idle));
}

#[tokio::test]
async fn given_admin_when_registered_then_admin_keyboard_is_offered() {
    let (_temp, controller) = create_test_controller();

    let reply = register(&controller, ADMIN_ID, NAME, PHONE, "Samarqand").await;

    assert_that!(reply.keyboard, some(eq(Keyboard::RegisteredAdmin)));
}

#[tokio::test]
async fn given_non_admin_when_listing_or_exporting_then_refused() {
    let (_temp, controller) = create_test_controller();

    let list = say(&controller, "101", BTN_ADMIN_LIST).await;
    let export = say(&controller, "101", "/export").await;

    assert_that!(list.kind, eq(ReplyKind::Unauthorized));
    assert_that!(export.kind, eq(ReplyKind::Unauthorized));
    assert_that!(export.document, none());
}

#[tokio::test]
async fn given_empty_ledger_when_admin_lists_then_empty_list_reply() {
    let (_temp, controller) = create_test_controller();

    let reply = say(&controller, ADMIN_ID, BTN_ADMIN_LIST).await;

    assert_that!(reply.kind, eq(ReplyKind::AdminList));
    assert_that!(reply.text.as_str(), eq(reg_dialogue::texts::LIST_EMPTY));
}

#[tokio::test]
async fn given_records_when_admin_lists_and_exports_then_records_are_delivered() {
    // Given
    let (_temp, controller) = create_test_controller();
    register(&controller, "101", NAME, PHONE, "Samarqand").await;
    register(&controller, "202", "Vali Aliyev", "+998 90 222-33-44", "Buxoro").await;

    // When
    let list = say(&controller, ADMIN_ID, BTN_ADMIN_LIST).await;
    let export = say(&controller, ADMIN_ID, "/export").await;

    // Then
    assert!(list.text.contains("1) *Ali Valiyev*"));
    assert!(list.text.contains("2) *Vali Aliyev*"));

    let document = export.document.unwrap();
    assert_that!(document.file_name.as_str(), eq("registrations.csv"));
    let csv = String::from_utf8(document.bytes).unwrap();
    assert!(csv.starts_with("telegram_id,full_name,phone,region,registered_at\n"));
    assert_that!(csv.lines().count(), eq(3));
}
