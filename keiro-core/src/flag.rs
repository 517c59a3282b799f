//! Dispatch flags.

use std::fmt;

bitflags::bitflags! {
    /// An integer tag on a registration used to selectively match dispatch calls.
    ///
    /// Flags are meant to be combined as bits (`Flag::new(0b01) | Flag::new(0b10)`),
    /// giving up to 32 distinct tags. No bits are named: every `u32` is a valid
    /// flag and is retained as given. [`Flag::ALL`] (zero) is reserved: a
    /// dispatch carrying it reaches every listener in the group.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Flag: u32 {
        const _ = !0;
    }
}

impl Flag {
    /// The match-all sentinel.
    ///
    /// Not to be confused with [`Flag::all`], which has every bit set.
    pub const ALL: Flag = Flag::empty();

    /// Create a flag from raw bits.
    pub const fn new(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }

    /// Whether this is the match-all sentinel.
    pub const fn is_all(self) -> bool {
        self.is_empty()
    }
}

impl Default for Flag {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<u32> for Flag {
    fn from(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            f.write_str("Flag(ALL)")
        } else {
            write!(f, "Flag({:#b})", self.bits())
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.bits())
    }
}
