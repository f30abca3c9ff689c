#![allow(clippy::needless_pass_by_value)]

pub mod comment;
pub mod draft;
pub mod guide;
pub mod like;
pub mod play;
pub mod show;
