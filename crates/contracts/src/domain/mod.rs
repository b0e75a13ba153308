pub mod a001_document_upload;
pub mod a002_document_chat;
pub mod common;
