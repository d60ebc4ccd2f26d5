#![allow(dead_code)]

pub mod geometry;
pub mod mock_document;
pub mod recording_sink;
