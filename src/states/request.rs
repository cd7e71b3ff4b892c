// 请求令牌
// 每次发起请求领取一个递增令牌，结果返回时只有最新令牌的结果会被应用

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    latest: Arc<AtomicU64>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }

    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_increase() {
        let guard = RequestGuard::new();
        let first = guard.issue();
        let second = guard.issue();
        assert!(second > first);
        assert!(guard.is_current(second));
        assert!(!guard.is_current(first));
    }

    #[test]
    fn test_clones_share_counter() {
        let guard = RequestGuard::new();
        let clone = guard.clone();
        let token = guard.issue();
        assert!(clone.is_current(token));
        clone.issue();
        assert!(!guard.is_current(token));
        assert_eq!(guard.latest(), 2);
    }
}
