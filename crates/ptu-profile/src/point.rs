//! A single (time, value) pair.

/// One value on a time axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point<T, V> {
    pub time: T,
    pub value: V,
}

impl<T, V> Point<T, V> {
    pub fn new(time: T, value: V) -> Self {
        Self { time, value }
    }
}
