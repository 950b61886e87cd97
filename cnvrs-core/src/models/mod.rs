pub mod interval;
pub mod interval_set;
pub mod locus;
pub mod ordered_map;
pub mod sample;
pub mod window;

// re-export for cleaner imports
pub use self::interval::{CallType, GenomicInterval};
pub use self::interval_set::IntervalSet;
pub use self::locus::Locus;
pub use self::ordered_map::OrderedMap;
pub use self::sample::SampleCollection;
pub use self::window::{ReferenceWindow, WindowSet};
