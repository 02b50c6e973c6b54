use fracsack_core::{ItemId, SolveError};
use fracsack_solver::{solve, Outcome, Take};
use fracsack_test_utils::fixtures;

#[test]
fn every_fixture_reaches_expected_value() {
    for (name, f) in fixtures::all() {
        let s = solve(&f.items, f.capacity).unwrap();
        assert!(
            (s.total_value() - f.expected_value).abs() < 1e-9,
            "{name}: expected {}, got {}",
            f.expected_value,
            s.total_value()
        );
        assert!(s.total_weight() <= f.capacity, "{name}: over capacity");
    }
}

#[test]
fn classic_three_ratios_and_split() {
    let f = fixtures::classic_three();
    let s = solve(&f.items, f.capacity).unwrap();
    let ratios: Vec<f64> = s.steps().iter().map(|st| st.item.ratio).collect();
    assert_eq!(ratios, vec![6.0, 5.0, 4.0]);

    let split = s.split_step().expect("classic case ends on a split");
    assert_eq!(split.id(), ItemId(3));
    assert_eq!(split.take(), Take::Partial);
    assert!((split.fraction - 0.667).abs() < 1e-3);
    assert_eq!(split.weight_taken, 20.0);
    assert!((split.value_gained - 80.0).abs() < 1e-9);

    let running: Vec<(f64, f64)> = s
        .steps()
        .iter()
        .map(|st| (st.total_weight, st.total_value))
        .collect();
    assert_eq!(running[0], (10.0, 60.0));
    assert_eq!(running[1], (30.0, 160.0));
    assert_eq!(running[2].0, 50.0);
}

#[test]
fn equal_ratios_follow_input_order() {
    let f = fixtures::equal_ratios();
    let s = solve(&f.items, f.capacity).unwrap();
    assert_eq!(s.taken_ids(), vec![ItemId(3), ItemId(1), ItemId(2)]);
    assert_eq!(s.outcome(ItemId(2)), Some(Outcome::Partial { fraction: 0.5 }));
}

#[test]
fn overflowing_first_item_is_split_alone() {
    let f = fixtures::overflowing();
    let s = solve(&f.items, f.capacity).unwrap();
    assert_eq!(s.steps().len(), 1);
    assert_eq!(s.steps()[0].id(), ItemId(2));
    assert_eq!(s.steps()[0].fraction, 0.25);
    assert_eq!(s.not_taken(), vec![ItemId(1)]);
}

#[test]
fn exact_fit_has_no_split() {
    let f = fixtures::exact_fit();
    let s = solve(&f.items, f.capacity).unwrap();
    assert!(s.split_step().is_none());
    assert_eq!(s.total_weight(), 50.0);
    assert_eq!(s.outcome(ItemId(3)), Some(Outcome::NotTaken));
}

#[test]
fn single_light_leaves_room() {
    let f = fixtures::single_light();
    let s = solve(&f.items, f.capacity).unwrap();
    assert_eq!(s.steps().len(), 1);
    assert_eq!(s.total_weight(), 5.0);
    assert_eq!(s.summary().utilization, 0.05);
}

#[test]
fn zero_capacity_and_empty_batch() {
    let f = fixtures::classic_three();
    let s = solve(&f.items, 0.0).unwrap();
    assert!(s.is_empty());
    assert_eq!(s.total_value(), 0.0);
    assert_eq!(s.not_taken().len(), 3);

    let s = solve(&[], 50.0).unwrap();
    assert!(s.is_empty());
    assert!(s.item_ids().is_empty());
}

#[test]
fn invalid_inputs_are_rejected() {
    let f = fixtures::classic_three();
    assert_eq!(
        solve(&f.items, -5.0),
        Err(SolveError::InvalidCapacity { value: -5.0 })
    );

    let mut dup = f.items.clone();
    dup[2].id = ItemId(1);
    assert_eq!(
        solve(&dup, 50.0),
        Err(SolveError::DuplicateItemId { id: ItemId(1) })
    );

    let mut nan = f.items.clone();
    nan[1].value = f64::NAN;
    assert!(matches!(
        solve(&nan, 50.0),
        Err(SolveError::InvalidValue { id: ItemId(2), .. })
    ));
}
