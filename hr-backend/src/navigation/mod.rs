// src/navigation/mod.rs
//
// 画面権限によるナビゲーションメニューと行アクションの絞り込み

pub mod filter;
pub mod loader;
pub mod menu;

pub use filter::{filter_actions, filter_menu, Action, ActionSet, GrantSet, PermissionCheck, ScreenGrant};
pub use loader::{GrantSource, HttpGrantSource, PermissionLoadError, PermissionLoader, RepositoryGrantSource};
pub use menu::{default_menu, row_actions_for, MenuEntry, RowAction};
