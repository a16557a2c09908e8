use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use lazy_static::lazy_static;
use serenity::model::id::UserId;
use tokio::sync::Mutex;

const COOLDOWN_SECONDS: u64 = 5;

lazy_static! {
    static ref COMMAND_COOLDOWNS: Mutex<CooldownTracker> = Mutex::new(CooldownTracker::new(COOLDOWN_SECONDS));
}

/// Per-user, per-command cooldown bookkeeping
pub struct CooldownTracker {
    cooldown: u64,
    last_used: HashMap<(UserId, String), u64>,
    // When we last warned about a cooldown, so retries don't spam warnings
    last_warned: HashMap<(UserId, String), u64>,
}

impl CooldownTracker {
    pub fn new(cooldown: u64) -> Self {
        CooldownTracker {
            cooldown,
            last_used: HashMap::new(),
            last_warned: HashMap::new(),
        }
    }

    /// Ok if the command may run now (and records the use).
    /// Err((remaining_seconds, should_warn)) otherwise; `should_warn` is true
    /// only for the first rejected attempt in a cooldown window.
    pub fn check(&mut self, user_id: UserId, command: &str, now: u64) -> Result<(), (u64, bool)> {
        self.prune(now);
        let key = (user_id, command.to_string());

        if let Some(&last_time) = self.last_used.get(&key) {
            let elapsed = now.saturating_sub(last_time);
            if elapsed < self.cooldown {
                let should_warn = match self.last_warned.get(&key) {
                    Some(&last_warning) => last_warning < last_time,
                    None => true,
                };
                if should_warn {
                    self.last_warned.insert(key, now);
                }
                return Err((self.cooldown - elapsed, should_warn));
            }
        }

        self.last_used.insert(key, now);
        Ok(())
    }

    /// Forget uses and warnings whose cooldown window has passed
    fn prune(&mut self, now: u64) {
        let cooldown = self.cooldown;
        self.last_used.retain(|_, &mut t| now.saturating_sub(t) < cooldown);
        self.last_warned.retain(|_, &mut t| now.saturating_sub(t) < cooldown);
    }
}

/// Check the global cooldown table for a user's command
pub async fn check_cooldown(user_id: UserId, command: &str) -> Result<(), (u64, bool)> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    COMMAND_COOLDOWNS.lock().await.check(user_id, command, now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_use_is_allowed() {
        let mut tracker = CooldownTracker::new(5);
        assert!(tracker.check(UserId::new(1), "$rates", 100).is_ok());
    }

    #[test]
    fn test_repeat_within_window_warns_once() {
        let mut tracker = CooldownTracker::new(5);
        let user = UserId::new(1);

        tracker.check(user, "$rates", 100).unwrap();
        assert_eq!(tracker.check(user, "$rates", 102), Err((3, true)));
        assert_eq!(tracker.check(user, "$rates", 103), Err((2, false)));
    }

    #[test]
    fn test_window_expires_and_resets_warning() {
        let mut tracker = CooldownTracker::new(5);
        let user = UserId::new(1);

        tracker.check(user, "$rates", 100).unwrap();
        tracker.check(user, "$rates", 101).unwrap_err();
        assert!(tracker.check(user, "$rates", 105).is_ok());
        assert_eq!(tracker.check(user, "$rates", 106), Err((4, true)));
    }

    #[test]
    fn test_expired_entries_are_dropped() {
        let mut tracker = CooldownTracker::new(5);

        for id in 1..=50 {
            tracker.check(UserId::new(id), "$rates", 100).unwrap();
        }
        tracker.check(UserId::new(1), "$rates", 101).unwrap_err();
        assert_eq!(tracker.last_used.len(), 50);
        assert_eq!(tracker.last_warned.len(), 1);

        tracker.check(UserId::new(99), "$help", 110).unwrap();
        assert_eq!(tracker.last_used.len(), 1);
        assert!(tracker.last_warned.is_empty());
    }

    #[test]
    fn test_commands_and_users_are_independent() {
        let mut tracker = CooldownTracker::new(5);

        tracker.check(UserId::new(1), "$rates", 100).unwrap();
        assert!(tracker.check(UserId::new(1), "$help", 100).is_ok());
        assert!(tracker.check(UserId::new(2), "$rates", 100).is_ok());
    }
}
