use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

use searchgate::rate_limiter::RateLimiter;

fn client(n: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(10, 0, 0, n))
}

#[test]
fn budget_is_enforced_within_a_window() {
    let limiter = RateLimiter::new(3, Duration::from_secs(60));
    let ip = client(1);

    assert!(limiter.admit(ip));
    assert!(limiter.admit(ip));
    assert!(limiter.admit(ip));
    assert!(
        !limiter.admit(ip),
        "fourth request in the window should be rejected"
    );
    assert!(!limiter.admit(ip), "rejection should persist until reset");
}

#[test]
fn window_expiry_resets_the_budget() {
    let limiter = RateLimiter::new(2, Duration::from_millis(50));
    let ip = client(2);

    assert!(limiter.admit(ip));
    assert!(limiter.admit(ip));
    assert!(!limiter.admit(ip));

    std::thread::sleep(Duration::from_millis(60));

    assert!(
        limiter.admit(ip),
        "new window should start with a fresh budget"
    );
    assert!(limiter.admit(ip));
    assert!(!limiter.admit(ip));
}

#[test]
fn clients_do_not_share_budgets() {
    let limiter = RateLimiter::new(1, Duration::from_secs(60));

    assert!(limiter.admit(client(3)));
    assert!(!limiter.admit(client(3)));

    // a different address still has its full budget
    assert!(limiter.admit(client(4)));
}

#[test]
fn zero_points_rejects_everything() {
    let limiter = RateLimiter::new(0, Duration::from_secs(60));
    assert!(!limiter.admit(client(5)));
}

#[test]
fn concurrent_admits_never_exceed_budget() {
    let limiter = Arc::new(RateLimiter::new(100, Duration::from_secs(60)));
    let ip = client(6);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let limiter = Arc::clone(&limiter);
            std::thread::spawn(move || {
                let mut admitted = 0u32;
                for _ in 0..50 {
                    if limiter.admit(ip) {
                        admitted += 1;
                    }
                }
                admitted
            })
        })
        .collect();

    let total: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(
        total, 100,
        "exactly the budgeted number of requests should be admitted"
    );
}
