//! Markquill: a terminal text viewer with vim-style marks.
//!
//! Buffer marks (`a`-`z`) and global marks (`A`-`Z`) are set with `m` and
//! listed in a floating overlay (`M`), from which they can be jumped to or
//! deleted. The overlay itself lives in [`overlay`] and talks to the rest of
//! the viewer only through [`overlay::MarkProvider`] and
//! [`overlay::surface::Surface`].

pub mod config;
pub mod editor;
pub mod file;
pub mod input;
pub mod overlay;
pub mod theme;
pub mod ui;
