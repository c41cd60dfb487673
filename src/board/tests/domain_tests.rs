//! Domain-focused tests for the board aggregate.

use crate::auth::domain::UserId;
use crate::board::domain::{
    Board, BoardChanges, BoardDomainError, BoardDraft, Column, DEFAULT_COLUMN_NAMES,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn create_seeds_the_default_columns_in_order(clock: DefaultClock) {
    let board = Board::create(BoardDraft::new("Release planning"), UserId::new(), &clock)
        .expect("valid draft");

    let names: Vec<&str> = board.columns().iter().map(Column::name).collect();
    assert_eq!(names, DEFAULT_COLUMN_NAMES);

    let orders: Vec<u32> = board.columns().iter().map(Column::order).collect();
    assert_eq!(orders, vec![0, 1, 2, 3]);
}

#[rstest]
fn create_records_the_owner_as_a_member(clock: DefaultClock) {
    let owner = UserId::new();
    let board = Board::create(BoardDraft::new("Mine"), owner, &clock).expect("valid draft");

    assert_eq!(board.owner_id(), owner);
    assert_eq!(board.member_ids(), &[owner]);
    assert!(board.can_view(owner));
    assert!(!board.can_view(UserId::new()));
}

#[rstest]
fn create_rejects_blank_name(clock: DefaultClock) {
    let result = Board::create(BoardDraft::new("  "), UserId::new(), &clock);
    assert_eq!(result, Err(BoardDomainError::EmptyBoardName));
}

#[rstest]
fn members_may_view_but_strangers_may_not(clock: DefaultClock) {
    let owner = UserId::new();
    let member = UserId::new();
    let mut board = Board::create(BoardDraft::new("Shared"), owner, &clock).expect("valid draft");

    let changes = BoardChanges {
        member_ids: Some(vec![member]),
        ..BoardChanges::default()
    };
    board.apply_changes(changes, &clock).expect("valid changes");

    assert!(board.can_view(member));
    assert!(!board.can_view(UserId::new()));
}

#[rstest]
fn membership_replacement_always_retains_the_owner(clock: DefaultClock) {
    let owner = UserId::new();
    let member = UserId::new();
    let mut board = Board::create(BoardDraft::new("Sticky"), owner, &clock).expect("valid draft");

    let changes = BoardChanges {
        member_ids: Some(vec![member, member]),
        ..BoardChanges::default()
    };
    board.apply_changes(changes, &clock).expect("valid changes");

    assert_eq!(board.member_ids(), &[owner, member]);
}

#[rstest]
fn apply_changes_rejects_blank_replacement_name(clock: DefaultClock) {
    let mut board =
        Board::create(BoardDraft::new("Named"), UserId::new(), &clock).expect("valid draft");

    let changes = BoardChanges {
        name: Some("   ".to_owned()),
        ..BoardChanges::default()
    };
    let result = board.apply_changes(changes, &clock);

    assert_eq!(result, Err(BoardDomainError::EmptyBoardName));
    assert_eq!(board.name(), "Named");
}
