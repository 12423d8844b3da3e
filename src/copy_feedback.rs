//! 「Copied!」表示のオン／オフを管理する一発タイマー。
//!
//! - 現在時刻は呼び出し側から `Instant` で渡す（egui の update ループでも、テストでも同じ）。
//! - 期限内にもう一度コピーした場合は期限を延長するだけで、状態は `copied` のまま。

use std::time::{Duration, Instant};

/// Copied 表示の既定時間
pub const DEFAULT_COPIED_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFeedback {
    duration: Duration,
    deadline: Option<Instant>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_COPIED_DURATION)
    }
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            deadline: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// コピー成功時に呼ぶ。期限を `now + duration` に設定し直す。
    pub fn mark_copied(&mut self, now: Instant) {
        self.deadline = Some(now + self.duration);
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// 期限切れなら `not-copied` に戻し、戻した場合だけ true を返す。
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// 期限までの残り時間（表示中でなければ None）。再描画の予約に使う。
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .and_then(|deadline| deadline.checked_duration_since(now))
            .filter(|d| !d.is_zero())
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
