//! Session controller embedding a state machine.
//!
//! Shows the pieces a UI controller typically uses: a transition action
//! that reads the caller's dispatch parameters, an internal transition for
//! refresh-in-place, a dynamic target override, and the dispatch journal
//! serialized for inspection.
//!
//! Run with: cargo run --example session

use switchyard::builder::StateMachineBuilder;
use switchyard::{event_enum, state_enum, TransitionBuilder};

state_enum! {
    enum Session {
        Idle,
        Active,
        Closed,
    }
    final: [Closed]
}

event_enum! {
    enum Input {
        Open,
        Select,
        Refresh,
        Close,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut session = StateMachineBuilder::new()
        .initial(Session::Idle)
        .label("session-42")
        .transition(
            TransitionBuilder::new()
                .from(Session::Idle)
                .on(Input::Open)
                .to(Session::Active),
        )
        .unwrap()
        .transition(
            // Selecting "quit" overrides the self-loop and closes the
            // session; anything else keeps it active.
            TransitionBuilder::new()
                .from(Session::Active)
                .on(Input::Select)
                .to(Session::Active)
                .action(|params| {
                    let choice = params
                        .first()
                        .and_then(|param| param.downcast_ref::<&str>())
                        .copied()
                        .unwrap_or("<none>");
                    println!("  selected {choice:?}");
                    if choice == "quit" {
                        Ok(Some(Session::Closed))
                    } else {
                        Ok(None)
                    }
                }),
        )
        .unwrap()
        .transition(
            TransitionBuilder::new()
                .from(Session::Active)
                .on(Input::Refresh)
                .internal()
                .effect(|_| println!("  refreshing in place")),
        )
        .unwrap()
        .transition(
            TransitionBuilder::new()
                .from(Session::Active)
                .on(Input::Close)
                .to(Session::Closed),
        )
        .unwrap()
        .build()
        .unwrap();

    session.fire(Input::Open).unwrap();
    session.execute(Input::Select, &[&"entry-7"]).unwrap();
    session.fire(Input::Refresh).unwrap();
    session.execute(Input::Select, &[&"quit"]).unwrap();

    // Closed has no wiring: further input is ignored.
    session.fire(Input::Refresh).unwrap();

    println!(
        "session is {:?} (final: {})",
        session.current_state(),
        session.is_final()
    );
    println!(
        "journal:\n{}",
        serde_json::to_string_pretty(session.journal()).unwrap()
    );
}
