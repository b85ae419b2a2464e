mod invoice;
mod node_info;

pub use invoice::*;
pub use node_info::*;
