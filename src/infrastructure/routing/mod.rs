pub mod openroute;
mod types;
