#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo::timers::callback::Timeout;
use gloo::timers::future::TimeoutFuture;
use memory_game::{Board, FlipOutcome, Resolution, ResolveTicket, Session, SymbolId};
use wasm_bindgen_test::*;
use yew::Callback;

wasm_bindgen_test_configure!(run_in_browser);

const RESOLVE_MS: u32 = 20;

fn one_pair() -> Rc<RefCell<Session>> {
    let contents: Vec<SymbolId> = ["A", "A"].into_iter().map(SymbolId::from).collect();
    let board = Board::from_contents(contents).unwrap();
    Rc::new(RefCell::new(Session::with_board(
        Duration::from_millis(u64::from(RESOLVE_MS)),
        board,
    )))
}

fn last_pair(session: &Rc<RefCell<Session>>) -> ResolveTicket {
    let mut session = session.borrow_mut();
    assert_eq!(session.flip(0), Ok(FlipOutcome::Revealed));
    match session.flip(1) {
        Ok(FlipOutcome::Compared { matched: true, ticket }) => ticket,
        other => panic!("expected a match, got {:?}", other),
    }
}

// Resolves `ticket` after its delay, then emits `end` after `end_ms` if no
// reset happened in between.
fn schedule(
    session: Rc<RefCell<Session>>,
    ticket: ResolveTicket,
    end_ms: u32,
    end: Callback<()>,
    pending: Rc<RefCell<Option<Timeout>>>,
) -> Timeout {
    let delay = ticket.delay().as_millis() as u32;
    Timeout::new(delay, move || {
        if session.borrow_mut().resolve(ticket) != Resolution::Completed {
            return;
        }
        let generation = session.borrow().generation();
        let finish = Timeout::new(end_ms, move || {
            if session.borrow().is_current(generation) {
                end.emit(());
            }
        });
        *pending.borrow_mut() = Some(finish);
    })
}

fn counting_end() -> (Callback<()>, Rc<Cell<u32>>) {
    let ended = Rc::new(Cell::new(0));
    let counter = ended.clone();
    (Callback::from(move |_| counter.set(counter.get() + 1)), ended)
}

#[wasm_bindgen_test]
async fn end_fires_once_after_last_pair_settles() {
    let session = one_pair();
    let ticket = last_pair(&session);
    let (end, ended) = counting_end();
    let pending = Rc::new(RefCell::new(None));

    let resolve = schedule(session.clone(), ticket, 0, end, pending.clone());
    TimeoutFuture::new(RESOLVE_MS / 2).await;
    assert_eq!(ended.get(), 0);

    TimeoutFuture::new(RESOLVE_MS * 3).await;
    assert_eq!(ended.get(), 1);
    assert!(session.borrow().board().unwrap().is_complete());
    assert_eq!(session.borrow().matches_made(), 0);
    drop(resolve);
}

#[wasm_bindgen_test]
async fn reset_before_end_tick_suppresses_end() {
    let session = one_pair();
    let ticket = last_pair(&session);
    let (end, ended) = counting_end();
    let pending = Rc::new(RefCell::new(None));

    let _resolve = schedule(session.clone(), ticket, RESOLVE_MS * 2, end, pending.clone());
    // The pair settles at RESOLVE_MS; reset before the end tick is due.
    TimeoutFuture::new(RESOLVE_MS * 2).await;
    assert!(pending.borrow().is_some());
    session.borrow_mut().reset();
    TimeoutFuture::new(RESOLVE_MS * 3).await;

    assert_eq!(ended.get(), 0);
}

#[wasm_bindgen_test]
async fn dropping_pending_resolution_cancels_it() {
    let session = one_pair();
    let ticket = last_pair(&session);
    let (end, ended) = counting_end();
    let pending = Rc::new(RefCell::new(None));

    let resolve = schedule(session.clone(), ticket, 0, end, pending.clone());
    drop(resolve);
    TimeoutFuture::new(RESOLVE_MS * 3).await;

    assert_eq!(ended.get(), 0);
    assert_eq!(session.borrow().board().unwrap().revealed(), vec![0, 1]);
    assert!(pending.borrow().is_none());
}
