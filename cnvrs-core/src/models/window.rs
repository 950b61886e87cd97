use std::fmt::{self, Display};

use crate::models::ordered_map::OrderedMap;

///
/// ReferenceWindow struct, one row of the externally supplied window BED.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct ReferenceWindow {
    pub chr: String,
    pub start: u32,
    pub end: u32,
}

impl Display for ReferenceWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.chr, self.start, self.end)
    }
}

///
/// Reference windows grouped by chromosome, in file order.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WindowSet {
    by_chr: OrderedMap<Vec<ReferenceWindow>>,
}

impl WindowSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, window: ReferenceWindow) {
        self.by_chr.entry_or_default(&window.chr).push(window);
    }

    pub fn get(&self, chr: &str) -> Option<&[ReferenceWindow]> {
        self.by_chr.get(chr).map(Vec::as_slice)
    }

    pub fn chromosomes(&self) -> impl Iterator<Item = &str> {
        self.by_chr.keys()
    }

    pub fn len(&self) -> usize {
        self.by_chr.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_chr.is_empty()
    }
}

impl FromIterator<ReferenceWindow> for WindowSet {
    fn from_iter<T: IntoIterator<Item = ReferenceWindow>>(iter: T) -> Self {
        let mut set = WindowSet::new();
        for window in iter {
            set.push(window);
        }
        set
    }
}
