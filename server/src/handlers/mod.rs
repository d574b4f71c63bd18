pub mod extract_handlers;
