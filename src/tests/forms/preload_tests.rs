use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::*;

fn delayed<T>(ms: u64, label: &'static str, order: &Mutex<Vec<&'static str>>, v: T) -> Result<T> {
    std::thread::sleep(Duration::from_millis(ms));
    order.lock().expect("order lock").push(label);
    Ok(v)
}

#[test]
fn continuation_runs_once_after_both_sources_in_either_order() {
    for (realm_ms, resolver_ms) in [(40, 0), (0, 40)] {
        let order = Mutex::new(Vec::new());
        let fired = AtomicUsize::new(0);

        let seen = preload2(
            || delayed(realm_ms, "realms", &order, vec!["realm1", "realm2"]),
            || delayed(resolver_ms, "resolvers", &order, vec!["reso1"]),
            |realms, resolvers| {
                fired.fetch_add(1, Ordering::SeqCst);
                Ok((realms.len(), resolvers.len()))
            },
        )
        .expect("preload");

        assert_eq!(seen, (2, 1));
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        let order = order.into_inner().expect("order");
        assert_eq!(order.len(), 2);
        let expected_last = if realm_ms > resolver_ms {
            "realms"
        } else {
            "resolvers"
        };
        assert_eq!(order[1], expected_last);
    }
}

#[test]
fn failing_branch_fails_join_and_skips_continuation() {
    let fired = AtomicUsize::new(0);
    let err = preload2(
        || -> Result<u32> { Ok(1) },
        || -> Result<u32> { anyhow::bail!("resolver backend unavailable") },
        |_, _| {
            fired.fetch_add(1, Ordering::SeqCst);
            Ok(())
        },
    )
    .expect_err("join must fail");

    assert_eq!(fired.load(Ordering::SeqCst), 0);
    let text = format!("{:#}", err);
    assert!(text.contains("preload branch 1"));
    assert!(text.contains("resolver backend unavailable"));
}

#[test]
fn first_branch_error_wins_when_both_fail() {
    let err = join2(
        || -> Result<()> { anyhow::bail!("realms down") },
        || -> Result<()> { anyhow::bail!("resolvers down") },
    )
    .expect_err("join must fail");
    assert!(format!("{:#}", err).contains("realms down"));
}

#[test]
fn panicking_branch_is_reported_as_error() {
    let err = join2(
        || -> Result<u8> { panic!("boom") },
        || -> Result<u8> { Ok(2) },
    )
    .expect_err("panic surfaces as error");
    assert!(err.to_string().contains("branch 0 panicked"));
}

#[test]
fn join_all_keeps_submission_order() {
    let fetches: Vec<Box<dyn FnOnce() -> Result<u64> + Send>> = (0..4u64)
        .map(|i| {
            Box::new(move || {
                std::thread::sleep(Duration::from_millis(30 - i * 10));
                Ok(i)
            }) as Box<dyn FnOnce() -> Result<u64> + Send>
        })
        .collect();
    let out = join_all(fetches).expect("join all");
    assert_eq!(out, vec![0, 1, 2, 3]);
}
