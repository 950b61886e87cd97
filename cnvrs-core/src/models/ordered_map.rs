use fxhash::FxHashMap as HashMap;

///
/// String-keyed map that iterates in first-insertion order.
///
/// Keys are stored once in `order`; lookups go through the hash map. Output
/// order of every driver depends on this, so it must never be swapped for a
/// plain hash map.
///
#[derive(Clone, Debug, PartialEq)]
pub struct OrderedMap<V> {
    order: Vec<String>,
    entries: HashMap<String, V>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        OrderedMap {
            order: Vec::new(),
            entries: HashMap::default(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for `key`, inserting `V::default()` first if absent.
    pub fn entry_or_default(&mut self, key: &str) -> &mut V
    where
        V: Default,
    {
        if !self.entries.contains_key(key) {
            self.order.push(key.to_string());
        }
        self.entries.entry(key.to_string()).or_default()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.order
            .iter()
            .filter_map(|k| self.entries.get(k).map(|v| (k.as_str(), v)))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_iterates_in_insertion_order() {
        let mut map: OrderedMap<Vec<u32>> = OrderedMap::new();
        for (key, value) in [("XV", 1), ("I", 2), ("Mito", 3), ("I", 4)] {
            map.entry_or_default(key).push(value);
        }

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["XV", "I", "Mito"]);
        assert_eq!(map.get("I"), Some(&vec![2, 4]));
        assert_eq!(map.len(), 3);
    }

    #[rstest]
    fn test_missing_key() {
        let map: OrderedMap<u32> = OrderedMap::new();
        assert!(map.get("II").is_none());
        assert!(!map.contains_key("II"));
        assert!(map.is_empty());
    }
}
