//! Layer merging
//!
//! Layers combine with a single-level overwrite: a later layer's top-level
//! key replaces the earlier value wholesale, nested objects included.

use confstack_fs::ConfigObject;

/// Merge `layers` left to right into a new object.
pub fn merge_layers<'a, I>(layers: I) -> ConfigObject
where
    I: IntoIterator<Item = &'a ConfigObject>,
{
    let mut merged = ConfigObject::new();
    for layer in layers {
        merge_into(&mut merged, layer);
    }
    merged
}

/// Copy every top-level entry of `other` into `base`, replacing existing keys.
pub fn merge_into(base: &mut ConfigObject, other: &ConfigObject) {
    for (key, value) in other {
        base.insert(key.clone(), value.clone());
    }
}
