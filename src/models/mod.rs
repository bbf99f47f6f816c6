pub mod fragment;
pub mod ids;
pub mod thread;

pub use fragment::{char_len, CharCountStatus, Fragment};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use thread::Thread;
