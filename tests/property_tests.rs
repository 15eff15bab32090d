//! Property-based tests for the session controller.
//!
//! These tests use proptest to drive the controller through random
//! action sequences and check properties that must hold after each step.

use proptest::prelude::*;
use vrx_session::builder::{ControllerBuilder, ControllerConfig};
use vrx_session::checkpoint::Checkpoint;
use vrx_session::core::{Action, SessionMode, State, TheaterEnvironment};
use vrx_session::session::{
    project, ActionOutcome, UnavailableActionPolicy, ViewModeController, Visibility,
};

prop_compose! {
    fn arbitrary_environment()(index in 0..TheaterEnvironment::ALL.len()) -> TheaterEnvironment {
        TheaterEnvironment::ALL[index]
    }
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::EnterVr),
        Just(Action::ExitVr),
        Just(Action::Recenter),
        Just(Action::ChangeEnvironment),
        arbitrary_environment().prop_map(Action::SelectEnvironment),
    ]
}

fn arbitrary_mode() -> impl Strategy<Value = SessionMode> {
    prop_oneof![Just(SessionMode::Inactive), Just(SessionMode::Active)]
}

proptest! {
    #[test]
    fn projection_enables_exactly_one_side(mode in arbitrary_mode()) {
        let controls = project(mode);
        let enter = controls.enter_vr.is_visible();
        prop_assert_eq!(enter, !mode.is_active());
        prop_assert_eq!(controls.exit_vr.is_visible(), !enter);
        prop_assert_eq!(controls.recenter, controls.exit_vr);
        prop_assert_eq!(controls.change_environment, controls.exit_vr);
    }

    #[test]
    fn mode_name_matches_display(mode in arbitrary_mode()) {
        prop_assert_eq!(mode.name(), mode.to_string());
        prop_assert!(!mode.is_final());
    }

    #[test]
    fn visibility_tracks_mode_after_any_sequence(
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let mut controller = ViewModeController::new();
        for action in actions {
            let _ = controller.apply(action);
            let controls = controller.view().controls;
            prop_assert_eq!(controls, project(controller.mode()));
            let expected = if controller.mode().is_active() {
                Visibility::Gone
            } else {
                Visibility::Visible
            };
            prop_assert_eq!(controls.enter_vr, expected);
        }
    }

    #[test]
    fn applied_actions_set_their_status(
        actions in prop::collection::vec(arbitrary_action(), 1..40)
    ) {
        let mut controller = ViewModeController::new();
        for action in actions {
            let before = controller.state().clone();
            match controller.apply(action) {
                Ok(ActionOutcome::Applied) => {
                    prop_assert_eq!(controller.status_message(), action.status_message());
                }
                Ok(ActionOutcome::Ignored) | Err(_) => {
                    prop_assert_eq!(controller.state(), &before);
                }
            }
        }
    }

    #[test]
    fn in_mode_actions_never_leave_active(
        actions in prop::collection::vec(
            prop_oneof![
                Just(Action::Recenter),
                Just(Action::ChangeEnvironment),
                arbitrary_environment().prop_map(Action::SelectEnvironment),
            ],
            1..20
        )
    ) {
        let mut controller = ViewModeController::new();
        controller.enter_vr().unwrap();
        for action in actions {
            prop_assert_eq!(controller.apply(action), Ok(ActionOutcome::Applied));
            prop_assert_eq!(controller.mode(), SessionMode::Active);
        }
    }

    #[test]
    fn reject_policy_never_changes_state_on_error(
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let mut controller = ControllerBuilder::new()
            .policy(UnavailableActionPolicy::Reject)
            .build()
            .unwrap();
        for action in actions {
            let before = controller.state().clone();
            let records = controller.history().records().len();
            if controller.apply(action).is_err() {
                prop_assert_eq!(controller.state(), &before);
                prop_assert_eq!(controller.history().records().len(), records);
            }
        }
    }

    #[test]
    fn history_path_is_connected(
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let mut controller = ViewModeController::new();
        for action in actions {
            let _ = controller.apply(action);
        }

        let records = controller.history().records();
        for pair in records.windows(2) {
            prop_assert_eq!(pair[0].to, pair[1].from);
        }
        if let Some(last) = records.last() {
            prop_assert_eq!(last.to, controller.mode());
        }
        if let Some(first) = records.first() {
            prop_assert_eq!(first.from, SessionMode::Inactive);
        }
    }

    #[test]
    fn bounded_history_never_exceeds_capacity(
        capacity in 1usize..8,
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let mut controller = ControllerBuilder::new()
            .history_capacity(capacity)
            .build()
            .unwrap();
        for action in actions {
            let _ = controller.apply(action);
            prop_assert!(controller.history().records().len() <= capacity);
        }
    }

    #[test]
    fn checkpoint_restore_preserves_state(
        actions in prop::collection::vec(arbitrary_action(), 0..30)
    ) {
        let mut controller = ViewModeController::new();
        for action in actions {
            let _ = controller.apply(action);
        }

        let json = controller.checkpoint().to_json().unwrap();
        let checkpoint = Checkpoint::from_json(&json).unwrap();
        let restored = ViewModeController::restore(checkpoint, &ControllerConfig::default()).unwrap();

        prop_assert_eq!(restored.state(), controller.state());
        prop_assert_eq!(restored.history().records(), controller.history().records());
    }
}
