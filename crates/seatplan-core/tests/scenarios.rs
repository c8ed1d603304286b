//! End-to-end seating scenarios through the manager.

use seatplan_core::{
    ClearOutcome, Confirmation, CoreError, DragSource, FormatError, GridLimits,
    PersistenceAdapter, ResizeOutcome, SeatPosition, SeatingManager, Snapshot, Transition,
};

#[derive(Debug, Default)]
struct CountingStore {
    last: Option<Snapshot>,
    writes: usize,
}

impl PersistenceAdapter for CountingStore {
    type Error = std::convert::Infallible;

    fn persist(&mut self, snapshot: &Snapshot) -> Result<(), Self::Error> {
        self.writes += 1;
        self.last = Some(snapshot.clone());
        Ok(())
    }

    fn restore(&self) -> Result<Option<Snapshot>, Self::Error> {
        Ok(self.last.clone())
    }
}

fn chart() -> SeatingManager<CountingStore> {
    SeatingManager::new(CountingStore::default(), GridLimits::default())
}

fn seats_of(m: &SeatingManager<CountingStore>) -> Vec<(String, String)> {
    m.serialize().seats.into_iter().collect()
}

#[test]
fn add_then_duplicate_add() {
    let mut m = chart();
    m.add_person("Alice").unwrap();
    assert_eq!(m.state().unassigned(), ["Alice"]);

    let before = m.state().clone();
    let err = m.add_person("Alice").unwrap_err();
    assert!(matches!(err, CoreError::Duplicate { ref name } if name == "Alice"));
    assert_eq!(m.state(), &before);
}

#[test]
fn assign_from_unassigned() {
    let mut m = chart();
    m.add_person("Alice").unwrap();
    m.assign_to_seat("Alice", 0, 0, DragSource::Unassigned)
        .unwrap();

    assert_eq!(seats_of(&m), vec![("0-0".to_string(), "Alice".to_string())]);
    assert!(m.state().unassigned().is_empty());
}

#[test]
fn swap_two_seated_people() {
    let mut m = chart();
    m.add_person("Alice").unwrap();
    m.add_person("Bob").unwrap();
    m.assign_to_seat("Alice", 0, 0, DragSource::Unassigned).unwrap();
    m.assign_to_seat("Bob", 1, 1, DragSource::Unassigned).unwrap();

    let t = m
        .assign_to_seat("Alice", 1, 1, DragSource::Seat(SeatPosition::new(0, 0)))
        .unwrap();

    assert_eq!(t, Transition::Changed);
    assert_eq!(
        seats_of(&m),
        vec![
            ("0-0".to_string(), "Bob".to_string()),
            ("1-1".to_string(), "Alice".to_string()),
        ]
    );
}

#[test]
fn shrink_with_preview_then_confirm() {
    let mut m = chart();
    m.add_person("Dana").unwrap();
    m.assign_to_seat("Dana", 4, 4, DragSource::Unassigned).unwrap();
    let before = m.state().clone();
    let writes = m.adapter().writes;

    let preview = m.would_displace(3, 3).unwrap();
    assert_eq!(preview.len(), 1);
    assert_eq!(preview[0].position, SeatPosition::new(4, 4));

    let pending = m.resize_grid(3, 3, Confirmation::Pending).unwrap();
    assert!(matches!(pending, ResizeOutcome::NeedsConfirmation { .. }));
    assert_eq!(m.state(), &before);
    assert_eq!(m.adapter().writes, writes);

    let done = m.resize_grid(3, 3, Confirmation::Granted).unwrap();
    assert!(matches!(done, ResizeOutcome::Resized { ref displaced } if displaced.len() == 1));
    assert_eq!((m.state().rows(), m.state().cols()), (3, 3));
    assert_eq!(m.state().unassigned(), ["Dana"]);
    assert!(m.state().seats().is_empty());
    assert_eq!(m.adapter().writes, writes + 1);
}

#[test]
fn load_duplicate_snapshot_is_rejected() {
    let mut m = chart();
    m.add_person("Zed").unwrap();
    let before = m.state().clone();

    let err = m
        .import_json(r#"{"rows":5,"cols":5,"seats":{"0-0":"Alice"},"unassigned":["Alice"]}"#)
        .unwrap_err();

    assert!(matches!(err, CoreError::Format(FormatError::DuplicateName(_))));
    assert_eq!(m.state(), &before);
}

#[test]
fn unseat_empty_cell_is_idempotent() {
    let mut m = chart();
    m.add_person("Alice").unwrap();
    let before = m.state().clone();
    let writes = m.adapter().writes;

    assert_eq!(m.unseat_person(2, 2).unwrap(), Transition::Unchanged);
    assert_eq!(m.state(), &before);
    assert_eq!(m.adapter().writes, writes);
}

#[test]
fn clear_all_requires_confirmation() {
    let mut m = chart();
    for name in ["Ann", "Ben"] {
        m.add_person(name).unwrap();
    }
    m.assign_to_seat("Ben", 0, 1, DragSource::Unassigned).unwrap();
    m.assign_to_seat("Ann", 3, 0, DragSource::Unassigned).unwrap();

    assert!(matches!(
        m.clear_all(Confirmation::Pending),
        ClearOutcome::NeedsConfirmation { .. }
    ));
    assert_eq!(m.state().seated_count(), 2);

    m.clear_all(Confirmation::Granted);
    assert_eq!(m.state().unassigned(), ["Ben", "Ann"]);
}

#[test]
fn round_trip_empty_sparse_and_full() {
    let limits = GridLimits::default();

    let empty = chart();
    let restored = seatplan_core::SeatingState::from_snapshot(&empty.serialize(), &limits).unwrap();
    assert_eq!(&restored, empty.state());

    let mut sparse = chart();
    for name in ["A", "B", "C"] {
        sparse.add_person(name).unwrap();
    }
    sparse.assign_to_seat("B", 4, 0, DragSource::Unassigned).unwrap();
    let json = sparse.serialize().to_json().unwrap();
    let restored = seatplan_core::SeatingState::from_snapshot(
        &Snapshot::from_json(&json).unwrap(),
        &limits,
    )
    .unwrap();
    assert_eq!(&restored, sparse.state());

    let mut full = chart();
    full.resize_grid(2, 2, Confirmation::Granted).unwrap();
    for (i, name) in ["W", "X", "Y", "Z"].iter().enumerate() {
        full.add_person(name).unwrap();
        full.assign_to_seat(name, i as u32 / 2, i as u32 % 2, DragSource::Unassigned)
            .unwrap();
    }
    let restored = seatplan_core::SeatingState::from_snapshot(&full.serialize(), &limits).unwrap();
    assert_eq!(&restored, full.state());
    assert_eq!(restored.seated_count(), 4);
}
