pub use constant::{as_const, AsConst, AsConstPipe, ConstView};
pub use counted::{counted, try_counted, Countdown, Counted, CountedCursor, CountedStrategy};
pub use delimit::{delimit, Delimit, DelimitCursor, DelimitPipe};
pub use ext::ViewExt;
pub use iter_transform::{
    iter_transform, IterFn, IterTransform, IterTransformPipe, SelectFirst, SelectSecond,
};
pub use moved::{moved, AsMoved, MoveView, MovedPipe};
pub use reverse::{reverse, Reverse, ReverseCursor, ReversePipe};
pub use subrange::Subrange;
pub use take::{take, Take, TakeCursor, TakeEnd, TakeExtent, TakePipe, TakeStrategy};
pub use transform::{
    transform, transform_with_move, zip_with, Elementwise, Map, MapWithMove, TransformPipe,
    TransformWithMovePipe, WithMove,
};
pub use zip::{zip, Zip};

mod constant;
mod counted;
mod delimit;
mod ext;
mod iter_transform;
mod moved;
mod reverse;
mod subrange;
mod take;
mod transform;
mod zip;
