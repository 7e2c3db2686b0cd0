mod stub;
mod traits;

pub use stub::StubHost;
pub use traits::{Animator, LabelHost};
