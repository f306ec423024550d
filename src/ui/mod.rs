//! UI module - widgets shared by the views

pub mod components;
