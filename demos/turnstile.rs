//! Coin-operated turnstile.
//!
//! The classic introductory state machine: a coin unlocks the arm, a push
//! rotates it and locks it again. Pushing while locked is wired as an
//! internal transition (the arm bounces, the state stays put); inserting a
//! second coin while unlocked is not wired at all and is silently ignored.
//!
//! Run with: cargo run --example turnstile

use switchyard::builder::StateMachineBuilder;
use switchyard::{event_enum, state_enum, StateAction, TransitionBuilder};

state_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
    }
}

event_enum! {
    enum Visitor {
        Coin,
        Push,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut turnstile = StateMachineBuilder::new()
        .initial(Turnstile::Locked)
        .label("turnstile")
        .on_entry(
            Turnstile::Unlocked,
            StateAction::from_fn(|| println!("  arm released")),
        )
        .on_exit(
            Turnstile::Unlocked,
            StateAction::from_fn(|| println!("  arm rotating")),
        )
        .transition(
            TransitionBuilder::new()
                .from(Turnstile::Locked)
                .on(Visitor::Coin)
                .to(Turnstile::Unlocked),
        )
        .unwrap()
        .transition(
            TransitionBuilder::new()
                .from(Turnstile::Unlocked)
                .on(Visitor::Push)
                .to(Turnstile::Locked),
        )
        .unwrap()
        .transition(
            TransitionBuilder::new()
                .from(Turnstile::Locked)
                .on(Visitor::Push)
                .internal()
                .effect(|_| println!("  push while locked: bounce")),
        )
        .unwrap()
        .build()
        .unwrap();

    println!("turnstile starts {:?}", turnstile.current_state());

    for event in [Visitor::Push, Visitor::Coin, Visitor::Coin, Visitor::Push] {
        println!("visitor: {:?}", event);
        let state = turnstile.fire(event).unwrap();
        println!("  now {state:?}");
    }

    println!(
        "{} dispatches recorded, final state {:?}",
        turnstile.journal().len(),
        turnstile.current_state()
    );
}
