//! End-to-end exercise of the event loop over real channels.
//!
//! No terminal involved: events are preloaded into the bounded queue and
//! the controller runs on the test thread until the back key stops it.

use crossbeam_channel::{bounded, Receiver, Sender};
use nudge::{
    AppState, Controller, Event, HeldKeys, InputEvent, InputKey, InputPhase, RedrawHandle,
    RenderCommand,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct Loop {
    event_tx: Sender<Event>,
    render_rx: Receiver<RenderCommand>,
    state: Arc<Mutex<AppState>>,
    controller: Controller,
}

fn event_loop() -> Loop {
    let (event_tx, event_rx) = bounded(8);
    let (render_tx, render_rx) = bounded(64);
    let state = Arc::new(Mutex::new(AppState::new()));
    let controller = Controller::new(
        event_rx,
        state.clone(),
        RedrawHandle::new(render_tx),
        Duration::from_millis(20),
    );
    Loop {
        event_tx,
        render_rx,
        state,
        controller,
    }
}

fn press(key: InputKey) -> Event {
    Event::Input(InputEvent {
        key,
        phase: InputPhase::Press,
    })
}

fn release(key: InputKey) -> Event {
    Event::Input(InputEvent {
        key,
        phase: InputPhase::Release,
    })
}

#[test]
fn test_held_right_walks_three_cells_over_three_ticks() {
    let harness = event_loop();

    for event in [
        press(InputKey::Right),
        Event::Tick,
        Event::Tick,
        Event::Tick,
        release(InputKey::Right),
        Event::Tick,
        press(InputKey::Back),
    ] {
        harness.event_tx.send(event).expect("preload event");
    }

    harness.controller.run();

    let state = harness.state.lock().expect("state lock");
    assert_eq!((state.x(), state.y()), (3, 0));
    assert_eq!(state.label(), "back");

    // Every iteration requested a redraw: seven events processed.
    assert_eq!(harness.render_rx.try_iter().count(), 7);
}

#[test]
fn test_confirm_press_release_updates_label_only() {
    let harness = event_loop();

    for event in [
        press(InputKey::Confirm),
        release(InputKey::Confirm),
        press(InputKey::Back),
    ] {
        harness.event_tx.send(event).expect("preload event");
    }

    harness.controller.run();

    let state = harness.state.lock().expect("state lock");
    assert_eq!((state.x(), state.y()), (0, 0));
    assert!(!state.held().contains(HeldKeys::CONFIRM));
}

#[test]
fn test_back_stops_processing_pending_events() {
    let harness = event_loop();

    harness
        .event_tx
        .send(press(InputKey::Back))
        .expect("preload event");
    harness
        .event_tx
        .send(press(InputKey::Right))
        .expect("preload event");

    harness.controller.run();

    // The press queued behind back was never consumed or applied.
    let state = harness.state.lock().expect("state lock");
    assert!(!state.held().contains(HeldKeys::RIGHT));
    assert_eq!(state.label(), "back");
    assert_eq!(harness.event_tx.len(), 1);
}

#[test]
fn test_idle_loop_keeps_redrawing_until_back() {
    let harness = event_loop();
    let event_tx = harness.event_tx.clone();

    // Let a few wait windows lapse before pressing back from another
    // thread, as the input actor would.
    let presser = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(90));
        event_tx.send(press(InputKey::Back)).expect("send back");
    });

    harness.controller.run();
    presser.join().expect("presser thread");

    let state = harness.state.lock().expect("state lock");
    assert_eq!((state.x(), state.y()), (0, 0));
    // At least the timed-out iterations and the final one redrew.
    assert!(harness.render_rx.try_iter().count() >= 2);
}
