// Adapters layer: concrete surfaces exposing the conversion service.

pub mod http;
