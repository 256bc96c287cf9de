// Использование общих трейтов и классов через crate от корня
use crate::{
    structs::{
        Vector3
    },
};

/// Единственный точечный источник света сцены
#[derive(Debug)]
pub struct Light {
    pub position: Vector3,
    pub brightness: f32,
}
