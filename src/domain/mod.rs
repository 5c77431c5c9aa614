/// Domain layer: the manifest, the on-disk workspace layout and the value
/// objects they are built from
pub mod entities;
pub mod value_objects;
