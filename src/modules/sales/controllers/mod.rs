mod sale_controller;

pub use sale_controller::configure;
