pub mod constants;
pub mod dodge;
pub mod error;
pub mod flow;
pub mod frame_loop;
pub mod host;
pub mod input;
pub mod page;
pub mod particles;
pub mod timeline;

pub use constants::*;
pub use dodge::*;
pub use error::*;
pub use flow::*;
pub use frame_loop::*;
pub use host::*;
pub use input::*;
pub use page::*;
pub use particles::*;
pub use timeline::*;
