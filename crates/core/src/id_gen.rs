//! Render-stable identifier generation
//!
//! Keys are `<process prefix>-<counter>`. The prefix is taken once per
//! process from a v4 UUID so keys from different processes do not collide
//! when trees are merged; the counter makes keys unique within the process.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};

static PROCESS_PREFIX: Lazy<String> = Lazy::new(|| {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    uuid[..8].to_string()
});

static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

/// Generate the next unique key
pub fn generate_key() -> String {
    let n = NEXT_KEY.fetch_add(1, Ordering::Relaxed);
    format!("{}-{:x}", *PROCESS_PREFIX, n)
}

/// Generate the next unique key with a caller-supplied prefix
pub fn generate_key_with_prefix(prefix: &str) -> String {
    format!("{}{}", prefix, generate_key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<String> = (0..10_000).map(|_| generate_key()).collect();
        assert_eq!(keys.len(), 10_000);
    }

    #[test]
    fn test_keys_are_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..1_000).map(|_| generate_key()).collect::<Vec<_>>()))
            .collect();
        let mut keys = HashSet::new();
        for handle in handles {
            for key in handle.join().unwrap() {
                assert!(keys.insert(key));
            }
        }
        assert_eq!(keys.len(), 4_000);
    }

    #[test]
    fn test_prefixed_key() {
        let key = generate_key_with_prefix("section_");
        assert!(key.starts_with("section_"));
        assert!(key.len() > "section_".len());
    }
}
