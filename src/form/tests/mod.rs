// src/form/tests/mod.rs
