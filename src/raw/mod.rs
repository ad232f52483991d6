mod arena;
mod handle;
mod node;
mod raw_llrb;
mod size;

pub(crate) use raw_llrb::{Iter, Postorder, Preorder, RawLlrb};
