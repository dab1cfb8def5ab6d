pub mod ambient;
pub mod config;
pub mod constants;
pub mod easing;
pub mod element;
pub mod error;
pub mod math;
pub mod parallax;
pub mod pointer;
pub mod proximity;
pub mod ripple;
pub mod timers;
pub mod transition;
pub mod tween;
pub mod visibility;

pub use ambient::*;
pub use config::*;
pub use easing::*;
pub use element::*;
pub use error::*;
pub use math::*;
pub use parallax::*;
pub use pointer::*;
pub use proximity::*;
pub use ripple::*;
pub use timers::*;
pub use transition::*;
pub use tween::*;
pub use visibility::*;
