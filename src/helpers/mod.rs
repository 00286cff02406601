pub mod handler_404;
pub mod progress;
pub mod text_format;
