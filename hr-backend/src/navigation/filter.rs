// src/navigation/filter.rs

use super::menu::{MenuEntry, RowAction};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 画面に対する操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        };
        write!(f, "{}", s)
    }
}

/// 画面ごとの許可操作
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSet {
    pub can_read: bool,
    pub can_create: bool,
    pub can_update: bool,
    pub can_delete: bool,
}

impl ActionSet {
    pub fn all() -> Self {
        Self {
            can_read: true,
            can_create: true,
            can_update: true,
            can_delete: true,
        }
    }

    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::Read => self.can_read,
            Action::Create => self.can_create,
            Action::Update => self.can_update,
            Action::Delete => self.can_delete,
        }
    }

    /// 同じ画面に複数の付与があれば OR で合成する
    pub fn merge(&mut self, other: ActionSet) {
        self.can_read |= other.can_read;
        self.can_create |= other.can_create;
        self.can_update |= other.can_update;
        self.can_delete |= other.can_delete;
    }
}

/// API でやり取りする画面権限 1 件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenGrant {
    pub screen_code: String,
    #[serde(flatten)]
    pub actions: ActionSet,
}

/// 取得済みの権限集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrantSet {
    /// 取得失敗時の許可モード
    AllowAll,
    Granted(HashMap<String, ActionSet>),
}

impl Default for GrantSet {
    fn default() -> Self {
        GrantSet::Granted(HashMap::new())
    }
}

impl GrantSet {
    pub fn from_grants(grants: impl IntoIterator<Item = ScreenGrant>) -> Self {
        let mut map: HashMap<String, ActionSet> = HashMap::new();
        for grant in grants {
            map.entry(grant.screen_code)
                .or_default()
                .merge(grant.actions);
        }
        GrantSet::Granted(map)
    }

    pub fn is_allow_all(&self) -> bool {
        matches!(self, GrantSet::AllowAll)
    }

    /// 画面コード順に並べた一覧（AllowAll では空）
    pub fn to_grants(&self) -> Vec<ScreenGrant> {
        match self {
            GrantSet::AllowAll => Vec::new(),
            GrantSet::Granted(map) => {
                let mut grants: Vec<ScreenGrant> = map
                    .iter()
                    .map(|(code, actions)| ScreenGrant {
                        screen_code: code.clone(),
                        actions: *actions,
                    })
                    .collect();
                grants.sort_by(|a, b| a.screen_code.cmp(&b.screen_code));
                grants
            }
        }
    }
}

/// 権限判定
pub trait PermissionCheck {
    fn has_permission(&self, screen_code: &str, action: Action) -> bool;
}

impl PermissionCheck for GrantSet {
    fn has_permission(&self, screen_code: &str, action: Action) -> bool {
        match self {
            GrantSet::AllowAll => true,
            GrantSet::Granted(map) => map
                .get(screen_code)
                .is_some_and(|actions| actions.allows(action)),
        }
    }
}

/// メニューツリーを権限で刈り込む
///
/// 葉は画面コードなし、または Read 権限ありなら残る。
/// 親は子孫が 1 つでも残れば残り、子は残ったものだけに置き換わる。
pub fn filter_menu<P>(entries: &[MenuEntry], permissions: &P) -> Vec<MenuEntry>
where
    P: PermissionCheck + ?Sized,
{
    entries
        .iter()
        .filter_map(|entry| {
            if entry.is_leaf() {
                let visible = match &entry.screen_code {
                    None => true,
                    Some(code) => permissions.has_permission(code, Action::Read),
                };
                visible.then(|| entry.clone())
            } else {
                let children = filter_menu(&entry.children, permissions);
                if children.is_empty() {
                    None
                } else {
                    Some(MenuEntry {
                        children,
                        ..entry.clone()
                    })
                }
            }
        })
        .collect()
}

/// 行アクションボタンを (画面, 操作) の権限で絞り込む
pub fn filter_actions<P>(actions: &[RowAction], permissions: &P) -> Vec<RowAction>
where
    P: PermissionCheck + ?Sized,
{
    actions
        .iter()
        .filter(|a| permissions.has_permission(&a.screen_code, a.action))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_only(code: &str) -> ScreenGrant {
        ScreenGrant {
            screen_code: code.to_string(),
            actions: ActionSet {
                can_read: true,
                ..Default::default()
            },
        }
    }

    fn personnel_menu() -> Vec<MenuEntry> {
        vec![
            MenuEntry::leaf("Ana Sayfa", "/", None),
            MenuEntry::group(
                "Personel",
                "users",
                vec![
                    MenuEntry::leaf("Personeller", "/personeller", Some("personeller")),
                    MenuEntry::leaf("İzin Talepleri", "/izin-talepleri", Some("izin-talepleri")),
                ],
            ),
        ]
    }

    #[test]
    fn test_parent_keeps_only_permitted_child() {
        let grants = GrantSet::from_grants(vec![read_only("personeller")]);
        let filtered = filter_menu(&personnel_menu(), &grants);

        assert_eq!(filtered.len(), 2);
        let parent = &filtered[1];
        assert_eq!(parent.label, "Personel");
        assert_eq!(parent.children.len(), 1);
        assert_eq!(parent.children[0].screen_code.as_deref(), Some("personeller"));
    }

    #[test]
    fn test_no_grants_keeps_only_codeless_entries() {
        let filtered = filter_menu(&personnel_menu(), &GrantSet::default());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].label, "Ana Sayfa");
    }

    #[test]
    fn test_nested_groups_are_pruned_recursively() {
        let menu = vec![MenuEntry::group(
            "İşe Alım",
            "briefcase",
            vec![
                MenuEntry::group(
                    "Süreç",
                    "flow",
                    vec![MenuEntry::leaf("Mülakatlar", "/mulakatlar", Some("mulakatlar"))],
                ),
                MenuEntry::leaf("Adaylar", "/adaylar", Some("adaylar")),
            ],
        )];

        let grants = GrantSet::from_grants(vec![read_only("adaylar")]);
        let filtered = filter_menu(&menu, &grants);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].children.len(), 1);
        assert_eq!(filtered[0].children[0].label, "Adaylar");

        let grants = GrantSet::from_grants(vec![read_only("mulakatlar")]);
        let filtered = filter_menu(&menu, &grants);
        assert_eq!(filtered[0].children[0].children[0].label, "Mülakatlar");
    }

    #[test]
    fn test_allow_all_keeps_everything() {
        let menu = personnel_menu();
        assert_eq!(filter_menu(&menu, &GrantSet::AllowAll), menu);
    }

    #[test]
    fn test_create_without_read_does_not_show_leaf() {
        let grants = GrantSet::from_grants(vec![ScreenGrant {
            screen_code: "personeller".to_string(),
            actions: ActionSet {
                can_create: true,
                ..Default::default()
            },
        }]);
        assert!(!grants.has_permission("personeller", Action::Read));
        assert_eq!(filter_menu(&personnel_menu(), &grants).len(), 1);
    }

    #[test]
    fn test_filter_actions() {
        let grants = GrantSet::from_grants(vec![ScreenGrant {
            screen_code: "personeller".to_string(),
            actions: ActionSet {
                can_read: true,
                can_update: true,
                ..Default::default()
            },
        }]);
        let actions = vec![
            RowAction::new("edit", "Düzenle", "personeller", Action::Update),
            RowAction::new("delete", "Sil", "personeller", Action::Delete),
            RowAction::new("approve", "Onayla", "izin-onay", Action::Update),
        ];

        let visible = filter_actions(&actions, &grants);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].key, "edit");
    }

    #[test]
    fn test_duplicate_grants_are_merged() {
        let grants = GrantSet::from_grants(vec![
            read_only("adaylar"),
            ScreenGrant {
                screen_code: "adaylar".to_string(),
                actions: ActionSet {
                    can_delete: true,
                    ..Default::default()
                },
            },
        ]);
        assert!(grants.has_permission("adaylar", Action::Read));
        assert!(grants.has_permission("adaylar", Action::Delete));
        assert!(!grants.has_permission("adaylar", Action::Create));
        assert_eq!(grants.to_grants().len(), 1);
    }

    #[test]
    fn test_screen_grant_wire_format() {
        let grant: ScreenGrant = serde_json::from_str(
            r#"{"screen_code":"teklifler","can_read":true,"can_create":false,"can_update":true,"can_delete":false}"#,
        )
        .unwrap();
        assert!(grant.actions.can_update);
        let json = serde_json::to_value(&grant).unwrap();
        assert_eq!(json["can_read"], true);
        assert_eq!(json["screen_code"], "teklifler");
    }
}
