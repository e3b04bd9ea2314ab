pub mod env_guard;
