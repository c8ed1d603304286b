//! Property tests: random operation sequences never break the chart.
//!
//! After every step:
//! - each name appears exactly once across seats and unassigned
//! - every seat lies inside the grid
//! - the snapshot round-trips to an identical state
//! - a failed operation left the state untouched

use proptest::prelude::*;
use seatplan_core::{
    Confirmation, DragSource, GridLimits, SeatPosition, SeatingState, Transition,
};

const NAMES: &[&str] = &["Ann", "Ben", "Cat", "Dan", "Eve", "Fay", " Ann ", ""];

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    AssignFromPool(usize, u32, u32),
    AssignFromSeat(u32, u32, u32, u32),
    Unseat(u32, u32),
    Resize(u32, u32, bool),
    Clear(bool),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..NAMES.len()).prop_map(Op::Add),
        (0..NAMES.len(), 0u32..8, 0u32..8).prop_map(|(n, r, c)| Op::AssignFromPool(n, r, c)),
        (0u32..8, 0u32..8, 0u32..8, 0u32..8)
            .prop_map(|(r, c, tr, tc)| Op::AssignFromSeat(r, c, tr, tc)),
        (0u32..8, 0u32..8).prop_map(|(r, c)| Op::Unseat(r, c)),
        (0u32..9, 0u32..9, any::<bool>()).prop_map(|(r, c, y)| Op::Resize(r, c, y)),
        any::<bool>().prop_map(Op::Clear),
    ]
}

fn apply(state: &mut SeatingState, op: &Op, limits: &GridLimits) -> Result<Transition, ()> {
    match *op {
        Op::Add(n) => state.add_person(NAMES[n]).map(|_| Transition::Changed).map_err(|_| ()),
        Op::AssignFromPool(n, r, c) => state
            .assign_to_seat(NAMES[n], SeatPosition::new(r, c), DragSource::Unassigned)
            .map_err(|_| ()),
        Op::AssignFromSeat(r, c, tr, tc) => {
            let origin = SeatPosition::new(r, c);
            let person = state.occupant(origin).unwrap_or("Nobody").to_string();
            state
                .assign_to_seat(&person, SeatPosition::new(tr, tc), DragSource::Seat(origin))
                .map_err(|_| ())
        }
        Op::Unseat(r, c) => state.unseat(SeatPosition::new(r, c)).map_err(|_| ()),
        Op::Resize(r, c, yes) => state
            .resize(r, c, Confirmation::from(yes), limits)
            .map(|o| o.transition())
            .map_err(|_| ()),
        Op::Clear(yes) => Ok(state.clear_all(Confirmation::from(yes)).transition()),
    }
}

fn population(state: &SeatingState) -> usize {
    state.seated_count() + state.unassigned().len()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn invariants_hold_for_any_sequence(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let limits = GridLimits::new(8);
        let mut state = SeatingState::default();

        for op in &ops {
            let before = state.clone();
            let result = apply(&mut state, op, &limits);

            prop_assert!(state.check_invariants().is_ok(), "{:?}: {:?}", op, state.check_invariants());

            match result {
                Err(()) | Ok(Transition::Unchanged) => prop_assert_eq!(&state, &before),
                Ok(Transition::Changed) => prop_assert_ne!(&state, &before),
            }

            // Nobody disappears except through a failed add.
            if !matches!(op, Op::Add(_)) {
                prop_assert_eq!(population(&state), population(&before));
            }

            let restored = SeatingState::from_snapshot(&state.to_snapshot(), &limits);
            prop_assert_eq!(restored.as_ref(), Ok(&state));
        }
    }

    #[test]
    fn resize_preview_matches_commit(
        seats in prop::collection::btree_set((0u32..6, 0u32..6), 0..12),
        rows in 1u32..7,
        cols in 1u32..7,
    ) {
        let limits = GridLimits::new(6);
        let mut state = SeatingState::new(6, 6, &limits).unwrap();
        for (i, (r, c)) in seats.iter().enumerate() {
            let name = format!("P{}", i);
            state.add_person(&name).unwrap();
            state
                .assign_to_seat(&name, SeatPosition::new(*r, *c), DragSource::Unassigned)
                .unwrap();
        }

        let preview = state.would_displace(rows, cols, &limits).unwrap();
        let pool_before = state.unassigned().len();
        state.resize(rows, cols, Confirmation::Granted, &limits).unwrap();

        let moved: Vec<String> = preview.iter().map(|p| p.name.clone()).collect();
        prop_assert_eq!(&state.unassigned()[pool_before..], moved.as_slice());
        prop_assert!(state.seats().keys().all(|p| p.is_within(rows, cols)));
    }
}
