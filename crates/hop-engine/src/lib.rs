pub mod assets;
pub mod components;
pub mod core;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use assets::manifest::{AnimationDescriptor, AnimationManifest};
pub use components::actor::{Actor, ActorConfig};
pub use components::animation::{AnimationManager, MissingAnimation};
pub use components::motion::{Direction, Moving};
pub use crate::core::frame::Frame;
pub use crate::core::rect::Rect;
pub use renderer::camera::Camera;
pub use systems::collision::collides_with_rects;
