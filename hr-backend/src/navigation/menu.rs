// src/navigation/menu.rs

use super::filter::Action;
use serde::{Deserialize, Serialize};

/// ナビゲーションメニューの 1 項目。子を持てばグループ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuEntry>,
}

impl MenuEntry {
    pub fn leaf(label: &str, path: &str, screen_code: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            path: Some(path.to_string()),
            icon: None,
            screen_code: screen_code.map(str::to_string),
            children: Vec::new(),
        }
    }

    pub fn group(label: &str, icon: &str, children: Vec<MenuEntry>) -> Self {
        Self {
            label: label.to_string(),
            path: None,
            icon: Some(icon.to_string()),
            screen_code: None,
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// 一覧行に表示する操作ボタン
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowAction {
    pub key: String,
    pub label: String,
    pub screen_code: String,
    pub action: Action,
}

impl RowAction {
    pub fn new(key: &str, label: &str, screen_code: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            screen_code: screen_code.to_string(),
            action,
        }
    }
}

/// アプリ全体のメニュー
pub fn default_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::leaf("Ana Sayfa", "/", None),
        MenuEntry::group(
            "Organizasyon",
            "sitemap",
            vec![
                MenuEntry::leaf("Kademeler", "/kademeler", Some("kademeler")),
                MenuEntry::leaf("Departmanlar", "/departmanlar", Some("departmanlar")),
                MenuEntry::leaf("Pozisyonlar", "/pozisyonlar", Some("pozisyonlar")),
                MenuEntry::leaf("Şehirler", "/sehirler", Some("sehirler")),
            ],
        ),
        MenuEntry::group(
            "Personel",
            "users",
            vec![
                MenuEntry::leaf("Personeller", "/personeller", Some("personeller")),
                MenuEntry::leaf("Giriş Çıkış", "/giris-cikis", Some("giris-cikis")),
            ],
        ),
        MenuEntry::group(
            "İzin",
            "calendar",
            vec![
                MenuEntry::leaf("İzin Talepleri", "/izin-talepleri", Some("izin-talepleri")),
                MenuEntry::leaf("İzin Onay", "/izin-onay", Some("izin-onay")),
            ],
        ),
        MenuEntry::group(
            "Zimmet",
            "box",
            vec![
                MenuEntry::leaf("Zimmet Stok", "/zimmet/stok", Some("zimmet-stok")),
                MenuEntry::leaf("Zimmet Onay", "/zimmet/onay", Some("zimmet-onay")),
                MenuEntry::leaf("Zimmet Atama", "/zimmet/atama", Some("zimmet-atama")),
            ],
        ),
        MenuEntry::group(
            "Eğitim",
            "play",
            vec![
                MenuEntry::leaf("Eğitimler", "/egitimler", Some("egitimler")),
                MenuEntry::leaf("Eğitim Atama", "/egitim-atama", Some("egitim-atama")),
            ],
        ),
        MenuEntry::group(
            "İşe Alım",
            "briefcase",
            vec![
                MenuEntry::leaf("İş İlanları", "/is-ilanlari", Some("is-ilanlari")),
                MenuEntry::leaf("Adaylar", "/adaylar", Some("adaylar")),
                MenuEntry::leaf("Başvurular", "/basvurular", Some("basvurular")),
                MenuEntry::leaf("Mülakatlar", "/mulakatlar", Some("mulakatlar")),
                MenuEntry::leaf("Teklifler", "/teklifler", Some("teklifler")),
            ],
        ),
        MenuEntry::group(
            "Yönetim",
            "shield",
            vec![MenuEntry::leaf(
                "Ekran Yetkileri",
                "/ekran-yetkileri",
                Some("ekran-yetkileri"),
            )],
        ),
        MenuEntry::leaf("Profilim", "/profil", None),
    ]
}

/// 画面コードごとの行アクション
pub fn row_actions_for(screen_code: &str) -> Vec<RowAction> {
    match screen_code {
        "izin-onay" => vec![
            RowAction::new("approve", "Onayla", "izin-onay", Action::Update),
            RowAction::new("reject", "Reddet", "izin-onay", Action::Update),
        ],
        "zimmet-onay" => vec![
            RowAction::new("approve", "Onayla", "zimmet-onay", Action::Update),
            RowAction::new("reject", "Reddet", "zimmet-onay", Action::Update),
        ],
        code => vec![
            RowAction::new("view", "Görüntüle", code, Action::Read),
            RowAction::new("edit", "Düzenle", code, Action::Update),
            RowAction::new("delete", "Sil", code, Action::Delete),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn collect_codes(entries: &[MenuEntry], out: &mut Vec<String>) {
        for entry in entries {
            if let Some(code) = &entry.screen_code {
                out.push(code.clone());
            }
            collect_codes(&entry.children, out);
        }
    }

    #[test]
    fn test_default_menu_codes_are_unique() {
        let mut codes = Vec::new();
        collect_codes(&default_menu(), &mut codes);
        let unique: HashSet<_> = codes.iter().collect();
        assert_eq!(codes.len(), unique.len());
        assert!(codes.contains(&"personeller".to_string()));
        assert!(codes.contains(&"ekran-yetkileri".to_string()));
    }

    #[test]
    fn test_groups_have_no_path() {
        for entry in default_menu() {
            if entry.is_leaf() {
                assert!(entry.path.is_some());
            } else {
                assert!(entry.path.is_none());
                assert!(entry.screen_code.is_none());
            }
        }
    }

    #[test]
    fn test_serialization_omits_empty_fields() {
        let json = serde_json::to_value(MenuEntry::leaf("Ana Sayfa", "/", None)).unwrap();
        assert!(json.get("screen_code").is_none());
        assert!(json.get("children").is_none());
        assert_eq!(json["path"], "/");
    }

    #[test]
    fn test_row_actions_for_approval_screens() {
        let actions = row_actions_for("izin-onay");
        assert!(actions.iter().all(|a| a.action == Action::Update));
        assert_eq!(row_actions_for("adaylar").len(), 3);
    }
}
