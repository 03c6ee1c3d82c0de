//! Parser module for JavaScript/TypeScript test files

pub mod javascript;

pub use javascript::JavaScriptParser;
