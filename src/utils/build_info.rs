const UNKNOWN: &str = "unknown";

/// What `build.rs` recorded about the binary being run.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

impl BuildMetadata {
    /// Abbreviated commit hash, or `unknown` outside a git checkout.
    pub fn short_hash(&self) -> &'static str {
        self.git_hash.get(..8).unwrap_or(self.git_hash)
    }

    /// Labelled values in the order `version` prints them.
    pub fn rows(&self) -> [(&'static str, String); 5] {
        [
            ("Build hash", format!("{} ({})", self.short_hash(), self.git_status)),
            ("Built at", self.timestamp.to_string()),
            ("Target", self.target.to_string()),
            ("Profile", self.profile.to_string()),
            ("Rustc", self.rustc.to_string()),
        ]
    }
}

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("SPEND_TRACKER_BUILD_HASH").unwrap_or(UNKNOWN),
        git_status: option_env!("SPEND_TRACKER_BUILD_STATUS").unwrap_or(UNKNOWN),
        timestamp: option_env!("SPEND_TRACKER_BUILD_TIMESTAMP").unwrap_or(UNKNOWN),
        target: option_env!("SPEND_TRACKER_BUILD_TARGET").unwrap_or(UNKNOWN),
        profile: option_env!("SPEND_TRACKER_BUILD_PROFILE").unwrap_or(UNKNOWN),
        rustc: option_env!("SPEND_TRACKER_BUILD_RUSTC").unwrap_or(UNKNOWN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hash_trims_long_hashes_only() {
        let mut meta = current();
        meta.git_hash = "0123456789abcdef";
        assert_eq!(meta.short_hash(), "01234567");
        meta.git_hash = UNKNOWN;
        assert_eq!(meta.short_hash(), UNKNOWN);
        assert_eq!(meta.rows()[0].0, "Build hash");
    }
}
