use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::components::actor::ActorConfig;

/// Manifest describing an actor's animation sets.
/// Loaded from a JSON file at runtime by the asset collaborator.
///
/// The core never reads the filesystem: the collaborator parses this
/// manifest, loads the referenced images into `Frame`s, and registers
/// them on the actor's animation manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationManifest {
    /// Animation name → frame sources and timing.
    pub animations: HashMap<String, AnimationDescriptor>,
    /// Optional movement tunables for the actor using these animations.
    #[serde(default)]
    pub actor: Option<ActorConfig>,
}

/// Describes a single named animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    /// Relative image paths, in playback order (e.g. "hero/run_0.png").
    pub frames: Vec<String>,
    /// Ticks each frame is held for (default: 1).
    #[serde(default = "default_frame_scale")]
    pub frame_scale: u32,
}

fn default_frame_scale() -> u32 {
    1
}

impl AnimationManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "animations": {
                "idle": { "frames": ["hero/idle_0.png", "hero/idle_1.png"] }
            }
        }"#;
        let manifest = AnimationManifest::from_json(json).unwrap();
        assert_eq!(manifest.animations.len(), 1);

        let idle = &manifest.animations["idle"];
        assert_eq!(idle.frames.len(), 2);
        assert_eq!(idle.frame_scale, 1);
        assert!(manifest.actor.is_none());
    }

    #[test]
    fn parse_manifest_with_tuning() {
        let json = r#"{
            "animations": {
                "run": { "frames": ["run_0.png", "run_1.png", "run_2.png"], "frame_scale": 5 }
            },
            "actor": { "speed": 3.0, "gravity": 1.0, "jump_force": 9.0, "max_fall_speed": 7.0 }
        }"#;
        let manifest = AnimationManifest::from_json(json).unwrap();

        let run = &manifest.animations["run"];
        assert_eq!(run.frame_scale, 5);

        let actor = manifest.actor.unwrap();
        assert_eq!(actor.speed, 3.0);
        assert_eq!(actor.max_fall_speed, 7.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AnimationManifest::from_json("{ not json").is_err());
    }
}
