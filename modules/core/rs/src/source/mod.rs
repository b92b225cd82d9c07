pub use archetype::{BidirectionalOnly, ForwardOnly, Unsized};
pub use iota::{iota, Counter, Iota, Unreachable};
pub use slice::{slice, slice_mut, Slice, SliceMut};

mod archetype;
mod iota;
mod slice;
