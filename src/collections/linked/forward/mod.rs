mod forward_list;
mod iter;
mod length;
mod node;

pub use forward_list::*;
pub use iter::*;
pub(crate) use length::*;
pub(crate) use node::*;
