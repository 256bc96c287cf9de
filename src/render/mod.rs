mod ray;
mod render;

pub(crate) use self::{
    ray::{
        Ray
    },
    render::{
        render,
        save_png,
        RenderMode
    }
};
