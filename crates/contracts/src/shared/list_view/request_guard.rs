/// Identifies one fetch; only the most recently issued token is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Last-request-wins guard for overlapping fetches.
#[derive(Debug, Default, Clone)]
pub struct RequestGuard {
    issued: u64,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new token, superseding every earlier one.
    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }

    /// Supersedes any in-flight request without starting a new one.
    pub fn invalidate(&mut self) {
        self.issued += 1;
    }
}
