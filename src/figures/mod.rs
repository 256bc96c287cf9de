mod sphere;
mod traits;

pub(crate) use self::{
    traits::{
        Intersectable,
        Normalable
    },
    sphere::{
        Sphere
    }
};
