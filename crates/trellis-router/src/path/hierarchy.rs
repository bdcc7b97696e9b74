/// Lazy iterator over a `/`-joined key and all of its ancestors
///
/// For key `a/(shop)/b`, yields: `a/(shop)/b` → `a/(shop)` → `a` → `` (the root key)
///
/// Used for nearest-first lookups: loading files up through group folders,
/// not-found views up through route paths.
///
/// # Examples
///
/// ```
/// use trellis_router::path::FolderHierarchy;
///
/// let keys: Vec<&str> = FolderHierarchy::new("a/b/c").collect();
/// assert_eq!(keys, vec!["a/b/c", "a/b", "a", ""]);
/// ```
///
/// Zero allocations: every item borrows from the input.
#[derive(Debug, Clone)]
pub struct FolderHierarchy<'a> {
    current: Option<&'a str>,
}

impl<'a> FolderHierarchy<'a> {
    /// Creates a hierarchy iterator starting at `key` itself
    pub fn new(key: &'a str) -> Self {
        Self { current: Some(key) }
    }
}

impl<'a> Iterator for FolderHierarchy<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        self.current = if current.is_empty() {
            None // Root key reached
        } else if let Some(slash_pos) = current.rfind('/') {
            Some(&current[..slash_pos])
        } else {
            Some("")
        };

        Some(current)
    }
}

/// Last `/`-separated component of a key (the key itself if it has none)
pub fn last_component(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hierarchy_nested() {
        let keys: Vec<&str> = FolderHierarchy::new("(group)/sub/deep").collect();
        assert_eq!(keys, vec!["(group)/sub/deep", "(group)/sub", "(group)", ""]);
    }

    #[test]
    fn test_hierarchy_root_only() {
        let keys: Vec<&str> = FolderHierarchy::new("").collect();
        assert_eq!(keys, vec![""]);
    }

    #[test]
    fn test_hierarchy_short_circuit() {
        let mut iter = FolderHierarchy::new("a/b/c/d");
        assert_eq!(iter.find(|&k| k == "a/b"), Some("a/b"));
        assert_eq!(iter.next(), Some("a"));
    }

    #[test]
    fn test_last_component() {
        assert_eq!(last_component("a/(g)"), "(g)");
        assert_eq!(last_component("users"), "users");
        assert_eq!(last_component(""), "");
    }
}
