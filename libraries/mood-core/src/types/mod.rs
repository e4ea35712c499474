mod group;
mod manifest;

pub use group::Group;
pub use manifest::MusicManifest;
