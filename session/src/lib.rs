pub use channel::*;
pub use draft::*;
pub use session::*;
pub use update::*;

mod channel;
mod draft;
mod session;
mod update;
