//! Page components for the Ecommerce Input demo.

mod demo;

pub use demo::DemoPage;
