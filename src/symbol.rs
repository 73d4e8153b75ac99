use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// A unit of the input alphabet.
///
/// `ordinal` places the symbol in the fixed code space so that an
/// [`Alphabet`](crate::Alphabet) can decide whether it is in range.
pub trait Symbol: Copy + Ord + Hash + Debug + Serialize + DeserializeOwned {
    fn ordinal(self) -> u32;
}

impl Symbol for u8 {
    fn ordinal(self) -> u32 {
        self as u32
    }
}

impl Symbol for char {
    fn ordinal(self) -> u32 {
        self as u32
    }
}
