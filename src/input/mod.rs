//! Input processing module
//! Handles document loading, file detection, and text extraction

pub mod document;
pub mod file_detector;
pub mod manager;
pub mod text_extractor;
