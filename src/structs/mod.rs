mod color;
mod vector3;

pub(crate) use self::{
    color::{
        Color
    },
    vector3::{
        Vector3
    }
};
