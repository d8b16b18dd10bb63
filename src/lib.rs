//! Desktop form that translates pasted text between two chosen languages.
//!
//! The form logic lives in [`form`] and talks to a [`translation::TranslationClient`];
//! [`gui`] renders it with eframe.

pub mod config;
pub mod error;
pub mod form;
pub mod gui;
pub mod i18n;
pub mod translation;
