// src/color/tests.rs

//! Unit tests for the color cycle state machine.

use super::*;
use proptest::prelude::*;

const FULL: Bounds = Bounds::new(0, 255);

const PHASES: [Phase; 6] = [
    Phase::GreenUp,
    Phase::RedDown,
    Phase::BlueUp,
    Phase::GreenDown,
    Phase::RedUp,
    Phase::BlueDown,
];

fn advance_n(mut state: ColorState, n: usize, delta: u8, bounds: Bounds) -> ColorState {
    for _ in 0..n {
        state = state.advanced(delta, bounds);
    }
    state
}

fn steps_per_phase(delta: u8, bounds: Bounds) -> usize {
    let span = usize::from(bounds.high - bounds.low);
    span.div_ceil(usize::from(delta))
}

#[test_log::test]
fn test_initial_state_is_full_red() {
    let state = ColorState::initial(Bounds::new(80, 255));
    assert_eq!(state.rgb(), (255, 80, 80));
    assert_eq!(state.phase, Phase::GreenUp);
}

#[test_log::test]
fn test_green_ramps_up_first() {
    let state = ColorState::initial(FULL).advanced(10, FULL);
    assert_eq!(state.rgb(), (255, 10, 0));
    assert_eq!(state.phase, Phase::GreenUp);
}

#[test_log::test]
fn test_overshoot_clamps_and_moves_to_next_phase() {
    let state = ColorState {
        r: 255,
        g: 250,
        b: 0,
        phase: Phase::GreenUp,
    };
    let next = state.advanced(10, FULL);
    assert_eq!(next.rgb(), (255, 255, 0));
    assert_eq!(next.phase, Phase::RedDown);
}

#[test_log::test]
fn test_exact_hit_moves_to_next_phase() {
    let state = ColorState {
        r: 10,
        g: 255,
        b: 0,
        phase: Phase::RedDown,
    };
    let next = state.advanced(10, FULL);
    assert_eq!(next.rgb(), (0, 255, 0));
    assert_eq!(next.phase, Phase::BlueUp);
}

#[test_log::test]
fn test_large_delta_does_not_wrap_channel() {
    let state = ColorState {
        r: 255,
        g: 200,
        b: 0,
        phase: Phase::GreenUp,
    };
    assert_eq!(state.advanced(255, FULL).g, 255);

    let state = ColorState {
        r: 100,
        g: 255,
        b: 0,
        phase: Phase::RedDown,
    };
    assert_eq!(state.advanced(255, FULL).r, 0);
}

#[test_log::test]
fn test_blue_down_wraps_to_green_up() {
    let state = ColorState {
        r: 255,
        g: 0,
        b: 5,
        phase: Phase::BlueDown,
    };
    let next = state.advanced(10, FULL);
    assert_eq!(next.rgb(), (255, 0, 0));
    assert_eq!(next.phase, Phase::GreenUp);
}

#[test_log::test]
fn test_phase_table_visits_every_phase_once() {
    let mut phase = Phase::GreenUp;
    let mut seen = Vec::new();
    for _ in 0..6 {
        seen.push(phase);
        phase = phase.next();
    }
    assert_eq!(seen, PHASES.to_vec());
    assert_eq!(phase, Phase::GreenUp);
}

#[test_log::test]
fn test_equal_bounds_cycle_phase_only() {
    let bounds = Bounds::new(128, 128);
    let mut state = ColorState::initial(bounds);
    for expected in 1..=6 {
        state = state.advanced(7, bounds);
        assert_eq!(state.rgb(), (128, 128, 128));
        assert_eq!(state.phase, PHASES[expected % 6]);
    }
}

#[test_log::test]
fn test_zero_delta_is_stationary() {
    let state = ColorState::initial(FULL);
    assert_eq!(advance_n(state, 1000, 0, FULL), state);
}

#[test_log::test]
fn test_zero_delta_with_equal_bounds_still_moves_phase() {
    let bounds = Bounds::new(40, 40);
    let state = ColorState::initial(bounds).advanced(0, bounds);
    assert_eq!(state.phase, Phase::RedDown);
}

#[test_log::test]
fn test_primed_offset_zero_is_initial() {
    let bounds = Bounds::default();
    assert_eq!(ColorState::primed(0, bounds), ColorState::initial(bounds));
}

#[test_log::test]
fn test_primed_uses_fixed_step() {
    let state = ColorState::primed(3, FULL);
    assert_eq!(state.rgb(), (255, 48, 0));
    assert_eq!(state, advance_n(ColorState::initial(FULL), 3, OFFSET_STEP, FULL));
}

#[test_log::test]
fn test_primed_terminates_with_degenerate_bounds() {
    let bounds = Bounds::new(9, 9);
    let state = ColorState::primed(MAX_OFFSET, bounds);
    assert_eq!(state.rgb(), (9, 9, 9));
    assert_eq!(state.phase, PHASES[usize::from(MAX_OFFSET) % 6]);
}

#[test_log::test]
fn test_full_cycle_with_default_bounds() {
    let bounds = Bounds::default();
    let start = ColorState::initial(bounds);
    // ceil(175 / 10) = 18 steps per leg
    let end = advance_n(start, 6 * 18, 10, bounds);
    assert_eq!(end, start);
    let almost = advance_n(start, 6 * 18 - 1, 10, bounds);
    assert_eq!(almost.phase, Phase::BlueDown);
}

fn bounds_strategy() -> impl Strategy<Value = Bounds> {
    (0u8..=255, 0u8..=255).prop_map(|(a, b)| Bounds::new(a.min(b), a.max(b)))
}

proptest! {
    #[test]
    fn prop_channels_stay_within_bounds(
        bounds in bounds_strategy(),
        delta in 0u8..=255,
        steps in 0usize..600,
    ) {
        let mut state = ColorState::initial(bounds);
        for _ in 0..steps {
            state = state.advanced(delta, bounds);
            for channel in [state.r, state.g, state.b] {
                prop_assert!(channel >= bounds.low && channel <= bounds.high);
            }
            let interior = [state.r, state.g, state.b]
                .iter()
                .filter(|&&c| c > bounds.low && c < bounds.high)
                .count();
            prop_assert!(interior <= 1);
        }
    }

    #[test]
    fn prop_cycle_is_closed(bounds in bounds_strategy(), delta in 1u8..=255) {
        prop_assume!(bounds.low < bounds.high);
        let start = ColorState::initial(bounds);
        let period = 6 * steps_per_phase(delta, bounds);
        prop_assert_eq!(advance_n(start, period, delta, bounds), start);
    }

    #[test]
    fn prop_each_call_moves_at_most_one_channel(
        bounds in bounds_strategy(),
        delta in 0u8..=255,
        offset in 0u8..=MAX_OFFSET,
    ) {
        let before = ColorState::primed(offset, bounds);
        let after = before.advanced(delta, bounds);
        let changed = [
            before.r != after.r,
            before.g != after.g,
            before.b != after.b,
        ]
        .iter()
        .filter(|&&c| c)
        .count();
        prop_assert!(changed <= 1);
    }
}
