pub mod constants;
pub mod counter;
pub mod error;
pub mod konami;
pub mod menu;
pub mod params;
pub mod particles;
pub mod pointer;
pub mod scroll;
pub mod typewriter;

pub use counter::*;
pub use error::FxError;
pub use konami::*;
pub use menu::*;
pub use params::FxParams;
pub use particles::*;
pub use pointer::*;
pub use scroll::*;
pub use typewriter::*;
