/// Reference-counted body scroll lock.
///
/// The page is locked while at least one holder exists. The caller applies
/// the DOM side effect only on the transitions reported by `acquire`/`release`.
#[derive(Debug, Default, Clone)]
pub struct ScrollLock {
    holders: usize,
}

impl ScrollLock {
    /// Returns true when this call locked the page (0 -> 1).
    pub fn acquire(&mut self) -> bool {
        self.holders += 1;
        self.holders == 1
    }

    /// Returns true when this call unlocked the page (1 -> 0).
    /// Releasing an unheld lock is a no-op.
    pub fn release(&mut self) -> bool {
        if self.holders == 0 {
            return false;
        }
        self.holders -= 1;
        self.holders == 0
    }

    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }

    pub fn holders(&self) -> usize {
        self.holders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlocks_only_after_last_release() {
        let mut lock = ScrollLock::default();
        assert!(lock.acquire());
        assert!(!lock.acquire());
        assert!(!lock.release());
        assert!(lock.is_locked());
        assert!(lock.release());
        assert!(!lock.is_locked());
        assert!(!lock.release());
        assert_eq!(lock.holders(), 0);
    }
}
