pub use adaptor::{Adapted, Adaptor, AdaptorReference, AdaptorRvalueReference, Mutability};
pub use capability::{Capabilities, Category, Traits};
pub use pipe::{Chain, Pipe};
pub use sequence::{
    BidirectionalSequence, CommonSequence, Decay, ForwardSequence, Moved, Pair,
    RandomAccessSequence, Readonly, Reference, RvalueReference, Sequence, SizedSequence,
};

mod adaptor;
pub mod capability;
pub mod pipe;
pub mod sequence;
pub mod source;
pub mod testing;
