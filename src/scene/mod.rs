mod intersection;
mod light;
mod parser;
mod scene;

// Экспортировать можно с помощью self из текущего модуля
pub(crate) use self::{
    scene::{
        Scene
    },
    light::{
        Light
    },
    parser::{
        parse_scene_description,
        SceneDescription
    }
};
