use std::fmt::{self, Display};

use bitflags::bitflags;
use eyre::{eyre, Result};

use crate::sequence::Sequence;

pub use tag::{CategoryTag, MeetShape, MinCategory, ShapeTag};

pub mod tag;

/// Traversal strength of a sequence, ordered from the weakest to the strongest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum Category {
    /// Single pass, cursors can't be copied or compared.
    #[display("input")]
    Input,
    /// Multi-pass, cursors are copyable positions.
    #[display("forward")]
    Forward,
    /// Forward and able to step backwards.
    #[display("bidirectional")]
    Bidirectional,
    /// Bidirectional with constant time offsets and distances.
    #[display("random-access")]
    RandomAccess,
}

impl Category {
    pub const fn min(self, other: Self) -> Self {
        if (self as u8) <= (other as u8) {
            self
        } else {
            other
        }
    }

    pub const fn is_at_least(self, other: Self) -> bool {
        self as u8 >= other as u8
    }
}

bitflags! {
    /// Structural properties of a sequence that are independent of its traversal category.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Traits: u8 {
        /// The number of elements is known without a traversal.
        const SIZED    = 1 << 0;
        /// The end marker has the same type as the cursor.
        const COMMON   = 1 << 1;
        /// Cheap to copy and doesn't own the element storage.
        const VIEW     = 1 << 2;
        /// Elements can be mutated through the references produced by the sequence.
        const MUTABLE  = 1 << 3;
        /// The end marker is never reached.
        const INFINITE = 1 << 4;
    }
}

/// Capability descriptor of a sequence type: its category and structural traits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Capabilities {
    category: Category,
    traits: Traits,
}

impl Capabilities {
    pub const fn new(category: Category, traits: Traits) -> Self {
        Self { category, traits }
    }

    /// Capabilities declared by the sequence type `S`.
    pub const fn of<S: Sequence + ?Sized>() -> Self {
        Self::new(<S::Category as CategoryTag>::CATEGORY, S::TRAITS)
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    pub const fn traits(&self) -> Traits {
        self.traits
    }

    pub const fn is_sized(&self) -> bool {
        self.traits.contains(Traits::SIZED)
    }

    pub const fn is_common(&self) -> bool {
        self.traits.contains(Traits::COMMON)
    }

    pub const fn is_view(&self) -> bool {
        self.traits.contains(Traits::VIEW)
    }

    pub const fn is_mutable(&self) -> bool {
        self.traits.contains(Traits::MUTABLE)
    }

    pub const fn is_infinite(&self) -> bool {
        self.traits.contains(Traits::INFINITE)
    }

    /// True if these capabilities are at least as strong as the `required` ones.
    pub const fn satisfies(&self, required: &Capabilities) -> bool {
        self.category.is_at_least(required.category) && self.traits.contains(required.traits)
    }

    /// Reject a composition whose source doesn't provide what the `adaptor` needs.
    pub fn require(&self, required: &Capabilities, adaptor: &str) -> Result<()> {
        if self.satisfies(required) {
            return Ok(());
        }
        log::debug!("Rejected composition: {adaptor} requires [{required}], got [{self}]");
        Err(eyre!(
            "Unsupported composition: {adaptor} requires [{required}], but the source provides [{self}]"
        ))
    }
}

impl Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        for (name, _) in self.traits.iter_names() {
            write!(f, ", {}", name.to_lowercase())?;
        }
        Ok(())
    }
}

pub fn category<S: Sequence>(_: &S) -> Category {
    S::CAPABILITIES.category()
}

pub fn is_sized<S: Sequence>(_: &S) -> bool {
    S::CAPABILITIES.is_sized()
}

pub fn is_common<S: Sequence>(_: &S) -> bool {
    S::CAPABILITIES.is_common()
}

pub fn is_view<S: Sequence>(_: &S) -> bool {
    S::CAPABILITIES.is_view()
}

pub fn is_mutable<S: Sequence>(_: &S) -> bool {
    S::CAPABILITIES.is_mutable()
}
