//! Arguments - Ordered parameter bindings of a menu session

/// Ordered name → value map
///
/// Iteration follows insertion order. Re-inserting a name overwrites the
/// value in place and keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    entries: Vec<(String, String)>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `name`, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut arguments = Arguments::new();
        for (name, value) in iter {
            arguments.insert(name, value);
        }
        arguments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let args: Arguments = [("b", "1"), ("a", "2"), ("c", "3")].into_iter().collect();
        let names: Vec<_> = args.names().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut args: Arguments = [("page", "1"), ("item", "apple")].into_iter().collect();

        let previous = args.insert("page", "2");

        assert_eq!(previous.as_deref(), Some("1"));
        assert_eq!(args.len(), 2);
        assert_eq!(args.iter().next(), Some(("page", "2")));
    }

    #[test]
    fn test_lookup() {
        let args: Arguments = [("target", "Alex")].into_iter().collect();
        assert_eq!(args.get("target"), Some("Alex"));
        assert!(args.contains("target"));
        assert!(!args.contains("missing"));
        assert!(Arguments::new().is_empty());
    }
}
