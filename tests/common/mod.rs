#![allow(dead_code)]

pub mod recording_renderer;
pub mod synthetic_image;
