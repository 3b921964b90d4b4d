use dashmap::DashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};

/// Fixed-window rate limiter keyed by client address.
///
/// Each client gets a budget of `points` requests per `window`. The first
/// request from a client opens a window; when the window deadline passes the
/// next request resets the budget. State lives in process memory only and is
/// never pruned, so limits are per-instance and lost on restart. A shared
/// counter service would be needed for multi-instance deployments.
pub struct RateLimiter {
    points: u32,
    window: Duration,
    clients: DashMap<IpAddr, WindowState>,
}

struct WindowState {
    remaining: u32,
    resets_at: Instant,
}

impl RateLimiter {
    pub fn new(points: u32, window: Duration) -> RateLimiter {
        RateLimiter {
            points,
            window,
            clients: DashMap::new(),
        }
    }

    /// Consume one point from the client's budget. Returns false when the
    /// budget is exhausted within the active window.
    ///
    /// The dashmap entry guard is held for the whole decision, so concurrent
    /// requests from one client serialize on its counter.
    pub fn admit(&self, client: IpAddr) -> bool {
        let now = Instant::now();
        let mut state = self.clients.entry(client).or_insert_with(|| WindowState {
            remaining: self.points,
            resets_at: now + self.window,
        });

        if now >= state.resets_at {
            state.remaining = self.points;
            state.resets_at = now + self.window;
        }

        if state.remaining > 0 {
            state.remaining -= 1;
            true
        } else {
            false
        }
    }
}
