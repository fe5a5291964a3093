pub mod components;
pub mod pages;

// Re-export the Learning Hub App
pub use pages::routes::App;
